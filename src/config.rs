use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://roll20.net/compendium/dnd5e/";
pub const DEFAULT_ALLOWED_DOMAIN: &str = "roll20.net";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for locating and fetching compendium pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix joined with a bare monster name to form the page URL.
    pub base_url: String,
    /// Hosts that may be fetched. Empty means nothing may be fetched.
    pub allowed_domains: Vec<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            allowed_domains: vec![DEFAULT_ALLOWED_DOMAIN.to_string()],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn trace_loaded(&self) {
        info!(
            base_url = %self.base_url,
            allowed_domains = ?self.allowed_domains,
            timeout_secs = self.timeout_secs,
            "Loaded Config"
        );
        debug!(?self, "Config loaded (full debug)");
    }
}
