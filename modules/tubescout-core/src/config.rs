use std::env;

use tracing::info;

/// Fallback scraper host used when no base address is configured.
const DEFAULT_API_BASE: &str = "https://macrocosmos-youtube-scraper-backend.onrender.com";

/// Application configuration loaded from environment variables. Read once
/// at process start; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the scraper service.
    pub api_base: String,
    /// Static API key sent on every request. Empty means unauthenticated.
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("TUBESCOUT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            api_key: env::var("TUBESCOUT_API_KEY").unwrap_or_default(),
        }
    }

    /// Log the effective configuration without leaking the key itself.
    pub fn log_redacted(&self) {
        info!(
            api_base = %self.api_base,
            api_key_set = !self.api_key.is_empty(),
            "Configuration loaded"
        );
    }
}
