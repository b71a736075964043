//! Tunegrab - terminal client for a video-to-MP3 conversion service
//!
//! This library provides the full client-side flow for the tunegrab backend:
//! URL intake, metadata preview, conversion request with a cosmetic progress
//! indicator, and saving the produced file. The orchestrator is UI-agnostic;
//! rendering layers consume its view model (the bundled binary renders it in
//! a terminal).
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, formatting, and input validation
//! - `api`: wire types and the HTTP client for the backend endpoints
//! - `session`: the download orchestrator, session state machine, cosmetic
//!   progress, and the state-to-view-model projection

pub mod api;
pub mod cli;
pub mod core;
pub mod session;

// Re-export commonly used types for convenience
pub use crate::api::client::ApiClient;
pub use crate::api::types::{Quality, VideoInfo};
pub use crate::core::error::{AppError, AppResult};
pub use crate::session::{Orchestrator, Session, UiState};
