//! Validation for user-submitted input
//!
//! The backend owns strict URL validation; the client only guarantees that
//! no network call is issued for input that cannot possibly succeed.

use crate::core::config;
use crate::core::error::AppError;

/// Validates and normalizes a user-submitted source URL.
///
/// Leading/trailing whitespace is stripped. Empty or whitespace-only input
/// is rejected before any network call, as is absurdly long input.
///
/// # Examples
/// ```
/// use tunegrab::core::validation::validate_source_url;
///
/// assert_eq!(validate_source_url("  https://x/video  ").unwrap(), "https://x/video");
/// assert!(validate_source_url("").is_err());
/// assert!(validate_source_url("   ").is_err());
/// ```
pub fn validate_source_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation("Please enter a video URL".to_string()));
    }

    if trimmed.len() > config::validation::MAX_URL_LENGTH {
        return Err(AppError::Validation(format!(
            "URL exceeds {} characters",
            config::validation::MAX_URL_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}
