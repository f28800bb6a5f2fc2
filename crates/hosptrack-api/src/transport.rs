// Transport configuration for building the reqwest::Client.
//
// Keeps base URL, timeout and user agent in one place so the CLI and the
// tests build clients the same way.

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.torn.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: Url,
    /// Expiry is reported as a transport error; there is no retry.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("hosptrack/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Start from the defaults with a different API root.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            ..Self::default()
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(Error::Transport)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL parses")
}
