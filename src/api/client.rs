use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::{
    ApiErrorBody, DownloadRequest, DownloadResponse, InfoRequest, InfoResponse, Quality, VideoInfo,
};
use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Generic messages used when a failure response carries no usable body.
const GENERIC_INFO_ERROR: &str = "Failed to fetch video info";
const GENERIC_DOWNLOAD_ERROR: &str = "Download failed";
const GENERIC_FILE_ERROR: &str = "Failed to fetch file";

/// Typed HTTP client for the conversion backend.
///
/// Thin glue over the three endpoints; all failures are mapped into
/// [`AppError`] with the backend's `error` field surfaced when present.
///
/// # Example
///
/// ```no_run
/// use tunegrab::api::ApiClient;
///
/// # async fn example() -> tunegrab::AppResult<()> {
/// let client = ApiClient::new()?;
/// let info = client.fetch_info("https://youtu.be/dQw4w9WgXcQ").await?;
/// println!("{:?}", info.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the configured base URL.
    pub fn new() -> AppResult<Self> {
        Self::with_base_url(config::API_BASE_URL.as_str())
    }

    /// Creates a client against an explicit base URL (tests, `--api-url`).
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config::network::timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The backend base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/info` — fetches metadata for a source URL.
    pub async fn fetch_info(&self, url: &str) -> AppResult<VideoInfo> {
        let resp: InfoResponse = self
            .post_json("/api/info", &InfoRequest { url }, GENERIC_INFO_ERROR)
            .await?;
        Ok(resp.info)
    }

    /// `POST /api/download` — triggers conversion, returns the produced
    /// filename.
    pub async fn request_download(&self, url: &str, quality: Quality) -> AppResult<String> {
        let resp: DownloadResponse = self
            .post_json(
                "/api/download",
                &DownloadRequest { url, quality },
                GENERIC_DOWNLOAD_ERROR,
            )
            .await?;
        Ok(resp.filename)
    }

    /// Absolute URL of the produced file; the filename is percent-encoded
    /// into the path.
    pub fn file_url(&self, filename: &str) -> String {
        format!(
            "{}/api/get-file/{}",
            self.base_url,
            urlencoding::encode(filename)
        )
    }

    /// `GET /api/get-file/{filename}` — fetches the produced file bytes.
    pub async fn fetch_file(&self, filename: &str) -> AppResult<Vec<u8>> {
        let url = self.file_url(filename);
        log::debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = Self::error_body_message(resp, GENERIC_FILE_ERROR).await;
            log::warn!("get-file failed with {}: {}", status, message);
            return Err(AppError::Remote { status, message });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        generic: &str,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);
        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = Self::error_body_message(resp, generic).await;
            log::warn!("{} failed with {}: {}", path, status, message);
            return Err(AppError::Remote { status, message });
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extracts the backend's `error` field, substituting `generic` when the
    /// body is absent, unparseable, or empty.
    async fn error_body_message(resp: reqwest::Response, generic: &str) -> String {
        resp.json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| generic.to_string())
    }
}
