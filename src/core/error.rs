use thiserror::Error;

/// Centralized error types for the client
///
/// Every failure in the flow is converted to this enum for consistent
/// handling. Uses `thiserror` for automatic conversion and display
/// formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation invoked without its required prior state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Non-success response from the backend
    #[error("{message}")]
    Remote {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Network or body-decoding failure
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors (saving the produced file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::InvalidState(_) => "invalid_state",
            AppError::Remote { .. } => "remote",
            AppError::Transport(_) => "transport",
            AppError::Url(_) => "url",
            AppError::Io(_) => "io",
        }
    }

    /// Message suitable for the user-facing error panel.
    ///
    /// Backend-provided messages pass through unchanged; transport and
    /// parse failures get a generic substitute instead of a debug dump.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::InvalidState(msg) => msg.clone(),
            AppError::Remote { message, .. } => message.clone(),
            AppError::Transport(_) => {
                "Network request failed. Check your connection and try again.".to_string()
            }
            AppError::Url(_) => "Invalid URL".to_string(),
            AppError::Io(e) => format!("Could not save file: {}", e),
        }
    }
}
