//! The download orchestrator: a linear, restartable flow over two network
//! calls, `Idle -> InfoLoaded -> Downloading -> Success | Error`.

use std::path::{Path, PathBuf};

use crate::api::client::ApiClient;
use crate::api::types::Quality;
use crate::core::error::{AppError, AppResult};
use crate::core::utils::{sanitize_filename, video_id_from_url};
use crate::core::validation::validate_source_url;
use crate::session::progress::{ProgressTicker, ProgressValue};
use crate::session::state::{ErrorPanel, Session, UiState};
use crate::session::view::{self, ViewModel};

/// Error panel title for metadata and precondition failures.
const ERROR_TITLE: &str = "Error";
/// Error panel title for conversion failures.
const ERROR_TITLE_DOWNLOAD: &str = "Download Failed";

/// Owns one download session and drives it through the backend.
///
/// Every operation catches its own failure and records it as the `Error`
/// UI state; the error is also returned for caller flow control. Nothing
/// here is fatal — any state is recoverable via [`Orchestrator::reset`] or
/// [`Orchestrator::retry`].
pub struct Orchestrator {
    client: ApiClient,
    session: Session,
    progress: ProgressValue,
    fetch_busy: bool,
    download_busy: bool,
}

impl Orchestrator {
    /// Creates an orchestrator in the `Idle` state.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: Session::default(),
            progress: ProgressValue::default(),
            fetch_busy: false,
            download_busy: false,
        }
    }

    /// Read access to the underlying session record.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current UI state.
    pub fn state(&self) -> UiState {
        self.session.ui_state
    }

    /// Shared handle to the live progress percentage. Clone it before a
    /// download to render progress concurrently.
    pub fn progress(&self) -> ProgressValue {
        self.progress.clone()
    }

    /// Projects the current state into a view model for rendering.
    pub fn view_model(&self) -> ViewModel {
        view::project(
            &self.session,
            self.progress.percent(),
            self.fetch_busy,
            self.download_busy,
        )
    }

    /// Fetches metadata for a source URL and transitions to `InfoLoaded`.
    ///
    /// Empty or whitespace-only input fails with a validation error before
    /// any network call. The fetch control is marked busy for the duration
    /// of the call and cleared on every exit path. On failure the session
    /// lands in `Error` with the backend's message when one was provided.
    pub async fn fetch_metadata(&mut self, url: &str) -> AppResult<()> {
        let url = match validate_source_url(url) {
            Ok(url) => url,
            Err(err) => {
                self.fail(ERROR_TITLE, &err);
                return Err(err);
            }
        };

        if let Some(id) = video_id_from_url(&url) {
            log::debug!("Fetching info for video {}", id);
        }

        self.fetch_busy = true;
        let result = self.client.fetch_info(&url).await;
        self.fetch_busy = false;

        match result {
            Ok(info) => {
                log::info!("Loaded metadata for {}", url);
                self.session.source_url = url;
                self.session.metadata = Some(info);
                self.session.error = None;
                self.session.ui_state = UiState::InfoLoaded;
                Ok(())
            }
            Err(err) => {
                self.fail(ERROR_TITLE, &err);
                Err(err)
            }
        }
    }

    /// Requests conversion of the loaded URL at the given quality.
    ///
    /// Fails with an invalid-state error (no network contact) when no URL
    /// has been loaded. Transitions to `Downloading` immediately and starts
    /// the cosmetic progress ticker; the ticker is completed on success
    /// (snapping the indicator to 100%) and cancelled on failure. On
    /// success the session holds the produced filename and its save
    /// trigger URL.
    pub async fn request_download(&mut self, quality: Quality) -> AppResult<String> {
        if !self.session.has_loaded_url() {
            let err = AppError::InvalidState("No video selected".to_string());
            self.fail(ERROR_TITLE, &err);
            return Err(err);
        }

        let url = self.session.source_url.clone();
        log::info!("Requesting {} conversion of {}", quality.display_name(), url);

        self.session.ui_state = UiState::Downloading;
        self.download_busy = true;
        let ticker = ProgressTicker::start(self.progress.clone());

        let result = self.client.request_download(&url, quality).await;
        self.download_busy = false;

        match result {
            Ok(filename) => {
                ticker.complete();
                log::info!("Conversion finished: {}", filename);
                self.session.file_url = Some(self.client.file_url(&filename));
                self.session.filename = Some(filename.clone());
                self.session.error = None;
                self.session.ui_state = UiState::Success;
                Ok(filename)
            }
            Err(err) => {
                ticker.cancel();
                self.fail(ERROR_TITLE_DOWNLOAD, &err);
                Err(err)
            }
        }
    }

    /// Returns the session to `Idle` unconditionally, clearing url,
    /// metadata, and progress. Idempotent.
    pub fn reset(&mut self) {
        self.session.reset();
        self.progress.set(0);
    }

    /// Re-shows the preview when metadata is still present; otherwise
    /// behaves like [`Orchestrator::reset`].
    pub fn retry(&mut self) {
        if self.session.metadata.is_some() {
            self.session.error = None;
            self.session.ui_state = UiState::InfoLoaded;
        } else {
            self.reset();
        }
    }

    /// Save trigger URL for the produced file, once in `Success`.
    pub fn save_url(&self) -> Option<&str> {
        self.session.file_url.as_deref()
    }

    /// Filename of the produced file, once in `Success`.
    pub fn filename(&self) -> Option<&str> {
        self.session.filename.as_deref()
    }

    /// Executes the save trigger: fetches the produced file and writes it
    /// under `dir` (created when missing) with a sanitized filename.
    ///
    /// Only valid after a successful download. Does not change the UI
    /// state; the session stays in `Success` regardless of the outcome.
    pub async fn save_file(&self, dir: &Path) -> AppResult<PathBuf> {
        let filename = self
            .session
            .filename
            .as_deref()
            .ok_or_else(|| AppError::InvalidState("No completed download to save".to_string()))?;

        let bytes = self.client.fetch_file(filename).await?;
        let dest = dir.join(sanitize_filename(filename));
        fs_err::tokio::create_dir_all(dir).await?;
        fs_err::tokio::write(&dest, &bytes).await?;
        log::info!("Saved {} ({} bytes)", dest.display(), bytes.len());
        Ok(dest)
    }

    fn fail(&mut self, title: &str, err: &AppError) {
        log::warn!("{}: {} ({})", title, err, err.subcategory());
        self.session.error = Some(ErrorPanel {
            title: title.to_string(),
            message: err.user_message(),
        });
        self.session.ui_state = UiState::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::VideoInfo;
    use crate::session::view::Section;

    fn orchestrator() -> Orchestrator {
        // Nothing listens here; these tests never reach the network
        Orchestrator::new(ApiClient::with_base_url("http://127.0.0.1:9").unwrap())
    }

    #[tokio::test]
    async fn test_fetch_metadata_rejects_blank_input() {
        let mut orch = orchestrator();
        for input in ["", "   ", "\t\n"] {
            let err = orch.fetch_metadata(input).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "input {:?}", input);
            assert_eq!(orch.state(), UiState::Error);
            match orch.view_model().section {
                Section::Failure(panel) => assert_eq!(panel.title, "Error"),
                other => panic!("expected failure section, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_request_download_requires_loaded_url() {
        let mut orch = orchestrator();
        let err = orch.request_download(Quality::Kbps320).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(orch.state(), UiState::Error);
    }

    #[tokio::test]
    async fn test_save_file_requires_completed_download() {
        let orch = orchestrator();
        let err = orch.save_file(Path::new("/tmp")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_retry_with_metadata_reshows_preview() {
        let mut orch = orchestrator();
        orch.session.source_url = "https://x/video".to_string();
        orch.session.metadata = Some(VideoInfo::default());
        orch.session.ui_state = UiState::Error;
        orch.session.error = Some(ErrorPanel {
            title: "Download Failed".to_string(),
            message: "boom".to_string(),
        });

        orch.retry();
        assert_eq!(orch.state(), UiState::InfoLoaded);
        assert!(orch.session().error.is_none());
        assert!(orch.session().metadata.is_some());
    }

    #[tokio::test]
    async fn test_retry_without_metadata_resets() {
        let mut orch = orchestrator();
        orch.session.ui_state = UiState::Error;
        orch.session.error = Some(ErrorPanel {
            title: "Error".to_string(),
            message: "boom".to_string(),
        });

        orch.retry();
        assert_eq!(orch.state(), UiState::Idle);
        assert!(orch.session().source_url.is_empty());
    }

    #[tokio::test]
    async fn test_reset_clears_progress() {
        let mut orch = orchestrator();
        orch.progress.set(87);
        orch.session.ui_state = UiState::Success;
        orch.reset();
        assert_eq!(orch.state(), UiState::Idle);
        assert_eq!(orch.progress().percent(), 0);
    }
}
