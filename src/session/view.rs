//! Pure projection of session state into a renderable view model
//!
//! Keeps the orchestrator testable without a UI: the rendering layer only
//! ever consumes pre-formatted strings, never raw metadata.

use crate::api::types::VideoInfo;
use crate::core::utils::{format_count, format_duration};
use crate::session::state::{ErrorPanel, Session, UiState};

/// Fallbacks substituted for missing metadata fields.
const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_UPLOADER: &str = "Unknown";

/// Metadata preview, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub title: String,
    /// Channel/author name.
    pub uploader: String,
    /// E.g. "1,000 views".
    pub views: String,
    /// E.g. "1:05".
    pub duration: String,
    /// Thumbnail URL; empty when the backend returned none.
    pub thumbnail: String,
}

impl PreviewView {
    /// Formats raw metadata, substituting the defined fallbacks for any
    /// missing or empty field.
    pub fn from_metadata(info: &VideoInfo) -> Self {
        Self {
            title: info
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            uploader: info
                .uploader
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| UNKNOWN_UPLOADER.to_string()),
            views: format!("{} views", format_count(info.view_count.unwrap_or(0))),
            duration: format_duration(info.duration.unwrap_or(0)),
            thumbnail: info.thumbnail.clone().unwrap_or_default(),
        }
    }
}

/// Progress section content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    pub percent: u8,
}

/// Success section content: the produced filename and its save trigger URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub filename: String,
    pub file_url: String,
}

/// Exactly one section is visible per state; showing one hides all others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// URL input; owns the keyboard focus.
    Input,
    Preview(PreviewView),
    Progress(ProgressView),
    Success(SuccessView),
    Failure(ErrorPanel),
}

/// Full render state for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub section: Section,
    /// The info-fetch control is disabled while its request is in flight.
    pub fetch_busy: bool,
    /// The download control is disabled while its request is in flight.
    pub download_busy: bool,
}

/// Projects session state plus live progress and busy flags into a view
/// model. Pure; any rendering layer can consume the result.
pub fn project(session: &Session, percent: u8, fetch_busy: bool, download_busy: bool) -> ViewModel {
    let section = match session.ui_state {
        UiState::Idle => Section::Input,
        UiState::InfoLoaded => match &session.metadata {
            Some(info) => Section::Preview(PreviewView::from_metadata(info)),
            // The orchestrator never constructs InfoLoaded without metadata
            None => Section::Input,
        },
        UiState::Downloading => Section::Progress(ProgressView { percent }),
        UiState::Success => Section::Success(SuccessView {
            filename: session.filename.clone().unwrap_or_default(),
            file_url: session.file_url.clone().unwrap_or_default(),
        }),
        UiState::Error => Section::Failure(session.error.clone().unwrap_or_else(|| ErrorPanel {
            title: "Error".to_string(),
            message: "Something went wrong".to_string(),
        })),
    };
    ViewModel {
        section,
        fetch_busy,
        download_busy,
    }
}
