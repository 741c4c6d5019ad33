//! API endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://movie-booking-api-3wep.onrender.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Build a config, trimming trailing slashes from `base_url`.
    ///
    /// A zero timeout is clamped to one second so fetches can never hang.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upper bound applied by transports to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for an API path such as `/movies`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS)
    }
}
