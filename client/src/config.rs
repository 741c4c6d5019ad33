//! Build-time API configuration.
//!
//! The browser has no environment, so `BOOKING_API_URL` and
//! `BOOKING_TIMEOUT_SECS` are read when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use booking::ApiConfig;
use booking::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

pub fn api_config() -> ApiConfig {
    resolve(option_env!("BOOKING_API_URL"), option_env!("BOOKING_TIMEOUT_SECS"))
}

fn resolve(base_url: Option<&str>, timeout_secs: Option<&str>) -> ApiConfig {
    let base_url = base_url.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(DEFAULT_API_URL);
    let timeout_secs = timeout_secs
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    ApiConfig::new(base_url, timeout_secs)
}
