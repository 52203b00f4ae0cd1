use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::config::settings::HttpConfig;

/// One outbound client shared by the token exchange and the remote calls.
/// Timeouts stay at the reqwest defaults unless configured.
pub fn build(cfg: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout_ms) = cfg.timeout_ms {
        builder = builder.timeout(Duration::from_millis(timeout_ms));
    }
    if let Some(connect_timeout_ms) = cfg.connect_timeout_ms {
        builder = builder.connect_timeout(Duration::from_millis(connect_timeout_ms));
    }
    let user_agent = cfg
        .user_agent
        .clone()
        .unwrap_or_else(|| format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
    builder = builder.user_agent(user_agent);

    builder
        .build()
        .map_err(|e| anyhow!("failed to build HTTP client: {}", e))
}
