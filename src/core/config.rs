use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the client

/// Base URL of the conversion backend
/// Read once at startup from TUNEGRAB_API_URL or defaults to the local
/// development server
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    env::var("TUNEGRAB_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
});

/// Folder produced files are saved into
/// Read from TUNEGRAB_DOWNLOAD_FOLDER environment variable
/// Supports tilde (~) expansion for home directory
pub static DOWNLOAD_FOLDER: Lazy<String> = Lazy::new(|| {
    env::var("TUNEGRAB_DOWNLOAD_FOLDER").unwrap_or_else(|_| "~/Downloads".to_string())
});

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for HTTP requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Cosmetic progress indicator configuration
pub mod progress {
    use super::Duration;

    /// Interval between indicator updates (in milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 500;

    /// Upper bound while the conversion request is still pending.
    /// The indicator never implies completion before the call resolves.
    pub const MAX_PRE_COMPLETE_PERCENT: u8 = 90;

    /// Largest random advance per tick (in percentage points)
    pub const MAX_STEP_PERCENT: f64 = 10.0;

    /// Indicator update interval duration
    pub fn tick_interval() -> Duration {
        Duration::from_millis(TICK_INTERVAL_MS)
    }
}

/// Validation configuration
pub mod validation {
    /// Maximum URL length (RFC 7230 recommends 8000, but we use 2048 for safety)
    pub const MAX_URL_LENGTH: usize = 2048;
}
