//! Backend location and the fixed timings of the page.

use std::time::Duration;

/// Setting that points the page at its backend.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Used when [`BACKEND_URL_VAR`] is unset or blank.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Delay between issuing an order and announcing the (simulated) payment.
pub const PAYMENT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Period of the testimonial carousel auto-advance.
pub const CAROUSEL_INTERVAL: Duration = Duration::from_millis(4000);

/// Where the backend API lives.
///
/// All endpoints hang off `{base_url}/api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are dropped;
    /// a blank URL falls back to [`DEFAULT_BACKEND_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            base_url: trimmed.to_string(),
        }
    }

    /// Read [`BACKEND_URL_VAR`] from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(BACKEND_URL_VAR).ok())
    }

    /// Read [`BACKEND_URL_VAR`] as it was set when the bundle was built.
    ///
    /// A browser has no process environment, so the value is baked in at
    /// compile time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_setting(option_env!("BACKEND_URL").map(str::to_owned))
    }

    fn from_setting(value: Option<String>) -> Self {
        match value {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an API endpoint, e.g. `api_url("leads")`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
