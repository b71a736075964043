use crate::api::types::VideoInfo;

/// Exclusive UI states of the download flow.
///
/// `Success` and `Error` absorb until an explicit user action; they are
/// escapable only via reset/retry. No spontaneous transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    InfoLoaded,
    Downloading,
    Success,
    Error,
}

/// Error panel content: a title plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
}

/// In-memory record of one download session.
///
/// Mutated only by the two network operations and explicit reset/retry.
/// After a download failure the metadata is retained so retry can re-show
/// the preview instead of re-fetching.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub source_url: String,
    pub metadata: Option<VideoInfo>,
    pub ui_state: UiState,
    /// Filename returned by a successful conversion.
    pub filename: Option<String>,
    /// Save trigger URL for the produced file.
    pub file_url: Option<String>,
    pub error: Option<ErrorPanel>,
}

impl Session {
    /// Returns the session to its initial state. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when a source URL has been loaded via a successful info fetch.
    pub fn has_loaded_url(&self) -> bool {
        !self.source_url.is_empty() && self.metadata.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_idle() {
        let session = Session::default();
        assert_eq!(session.ui_state, UiState::Idle);
        assert!(session.source_url.is_empty());
        assert!(session.metadata.is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session {
            source_url: "https://x/video".to_string(),
            metadata: Some(VideoInfo::default()),
            ui_state: UiState::Success,
            filename: Some("t.mp3".to_string()),
            file_url: Some("http://api/get-file/t.mp3".to_string()),
            error: None,
        };
        session.reset();
        assert_eq!(session.ui_state, UiState::Idle);
        assert!(session.source_url.is_empty());
        assert!(session.metadata.is_none());
        assert!(session.filename.is_none());
        assert!(session.file_url.is_none());

        // Idempotent
        session.reset();
        assert_eq!(session.ui_state, UiState::Idle);
    }

    #[test]
    fn test_has_loaded_url_requires_both_fields() {
        let mut session = Session::default();
        assert!(!session.has_loaded_url());
        session.source_url = "https://x/video".to_string();
        assert!(!session.has_loaded_url());
        session.metadata = Some(VideoInfo::default());
        assert!(session.has_loaded_url());
    }
}
