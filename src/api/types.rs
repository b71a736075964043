use serde::{Deserialize, Serialize};

/// Target audio bitrate for the conversion request.
///
/// The backend accepts exactly these three values on the wire as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "128")]
    Kbps128,
    #[serde(rename = "192")]
    Kbps192,
    #[default]
    #[serde(rename = "320")]
    Kbps320,
}

impl Quality {
    /// Parse from the wire/CLI string value. Unknown input falls back to
    /// the default bitrate.
    pub fn parse(s: &str) -> Self {
        match s {
            "128" => Self::Kbps128,
            "192" => Self::Kbps192,
            "320" => Self::Kbps320,
            _ => Self::default(),
        }
    }

    /// Serialize to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kbps128 => "128",
            Self::Kbps192 => "192",
            Self::Kbps320 => "320",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kbps128 => "128 kbps",
            Self::Kbps192 => "192 kbps",
            Self::Kbps320 => "320 kbps",
        }
    }

    /// All permitted bitrates, in ascending order.
    pub fn all() -> &'static [Self] {
        &[Self::Kbps128, Self::Kbps192, Self::Kbps320]
    }
}

/// Metadata describing the remote resource.
///
/// Every field is optional on the wire; rendering substitutes defined
/// fallbacks for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub duration: Option<u64>,
}

/// Request body for `POST /api/info`.
#[derive(Debug, Serialize)]
pub struct InfoRequest<'a> {
    pub url: &'a str,
}

/// Success body for `POST /api/info`.
#[derive(Debug, Deserialize)]
pub struct InfoResponse {
    pub info: VideoInfo,
}

/// Request body for `POST /api/download`.
#[derive(Debug, Serialize)]
pub struct DownloadRequest<'a> {
    pub url: &'a str,
    pub quality: Quality,
}

/// Success body for `POST /api/download`.
#[derive(Debug, Deserialize)]
pub struct DownloadResponse {
    pub filename: String,
}

/// Failure body shared by all endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
