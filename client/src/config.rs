//! Configuration for the cinema client
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the cinema backend (no trailing slash)
    pub api_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Where the bearer token is persisted between runs
    pub token_path: PathBuf,
    /// **DEMO ONLY**: Substitute placeholder data when a movie detail
    /// fetch fails instead of surfacing the error.
    ///
    /// # Security Warning
    ///
    /// This MUST be `false` in production! Setting this to `true` masks
    /// real backend failures behind canned sample data, so an outage
    /// looks like a working catalog. Only enable this for demos and
    /// local development without a backend.
    ///
    /// Default: `false`
    pub demo_fallback: bool,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("MARQUEE_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            request_timeout: Duration::from_secs(
                env::var("MARQUEE_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            token_path: env::var("MARQUEE_TOKEN_PATH")
                .map_or_else(|_| PathBuf::from(".marquee/token"), PathBuf::from),
            demo_fallback: env::var("MARQUEE_DEMO_FALLBACK")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false), // CRITICAL: Default to false (secure by default)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(30),
            token_path: PathBuf::from(".marquee/token"),
            demo_fallback: false,
        }
    }
}
