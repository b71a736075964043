//! HTTP surface of the conversion backend: wire types and the typed client.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Quality, VideoInfo};
