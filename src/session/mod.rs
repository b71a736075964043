//! Download orchestration: session state machine, cosmetic progress, and
//! the state-to-view-model projection.

pub mod orchestrator;
pub mod progress;
pub mod state;
pub mod view;

pub use orchestrator::Orchestrator;
pub use progress::ProgressValue;
pub use state::{ErrorPanel, Session, UiState};
pub use view::{Section, ViewModel};
