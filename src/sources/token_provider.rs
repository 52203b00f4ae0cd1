use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::cache::token::Token;
use crate::cache::token_cache::TokenCache;
use crate::config::services::{SecurityConfig, ServiceSettings};
use crate::endpoints::resolver::{join_url, resolve_path};
use crate::error::{BridgeError, BridgeResult};
use crate::helpers::time::{get_instant, now_utc};
use crate::observability::metrics::get_metrics;
use crate::sources::oauth2::{OAuth2Source, TokenExchangeError};
use crate::sources::FetchToken;
use crate::utils::constants::{TOKEN_ENDPOINT, TOKEN_EXCHANGE_FAILED};

/// Obtains, caches and refreshes the client-credentials access token.
///
/// One instance per process, shared behind an `Arc`. With `coalesce_refresh`
/// concurrent callers that find the token expired wait on a single exchange;
/// without it every such caller runs its own exchange and the last write wins.
pub struct TokenProvider {
    source: OAuth2Source,
    services: Arc<ServiceSettings>,
    base_url: String,
    credentials: SecurityConfig,
    environment: Option<String>,
    cache: TokenCache,
    refresh_lock: Option<Mutex<()>>,
}

impl TokenProvider {
    pub fn new(
        client: Client,
        services: Arc<ServiceSettings>,
        base_url: String,
        credentials: SecurityConfig,
        environment: Option<String>,
        coalesce_refresh: bool,
    ) -> Self {
        Self {
            source: OAuth2Source::new(client),
            services,
            base_url,
            credentials,
            environment,
            cache: TokenCache::new(),
            refresh_lock: coalesce_refresh.then(|| Mutex::new(())),
        }
    }

    /// Shared handle on the cached slot
    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    pub async fn get_token(&self) -> BridgeResult<Arc<Token>> {
        if let Some(token) = self.cached().await {
            return Ok(token);
        }

        match &self.refresh_lock {
            Some(lock) => {
                let _guard = lock.lock().await;
                // another caller may have refreshed while we waited
                if let Some(token) = self.cached().await {
                    return Ok(token);
                }
                self.refresh().await
            }
            None => self.refresh().await,
        }
    }

    async fn cached(&self) -> Option<Arc<Token>> {
        let token = self.cache.get().await?;
        debug!("serving cached token, expires at {}", token.expires_at);
        get_metrics().await.token_cache_hits.inc();
        Some(token)
    }

    async fn refresh(&self) -> BridgeResult<Arc<Token>> {
        let token_path = resolve_path(&self.services, TOKEN_ENDPOINT, &[])?;
        let token_url = join_url(&self.base_url, &token_path);

        if !self.credentials.is_complete() {
            warn!(
                "ClientId and ClientSecret should be set for environment {}",
                self.environment.as_deref().unwrap_or("<unset>")
            );
        }

        let metrics = get_metrics().await;
        let start = get_instant();
        metrics.token_exchanges.inc();
        info!("requesting access token from {}", token_url);

        let granted = match self
            .source
            .request_client_credentials_token(&token_url, &self.credentials)
            .await
        {
            Ok(granted) => granted,
            Err(err) => {
                error!("Error obtaining a token: {}", err);
                metrics
                    .token_exchange_failures
                    .with_label_values(&[failure_reason(&err)])
                    .inc();
                self.cache.clear().await;
                return Err(BridgeError::Authorization(TOKEN_EXCHANGE_FAILED.to_owned()));
            }
        };

        let token = Token::issued_at(granted.access_token, now_utc(), granted.expires_in);
        metrics.token_expiry_unix.set(token.expires_at.timestamp());
        metrics
            .token_exchange_duration
            .observe(start.elapsed().as_secs_f64());
        info!("access token obtained, expires at {}", token.expires_at);

        Ok(self.cache.set(token).await)
    }
}

impl FetchToken for TokenProvider {
    async fn get_token(&self) -> BridgeResult<Arc<Token>> {
        TokenProvider::get_token(self).await
    }
}

fn failure_reason(err: &TokenExchangeError) -> &'static str {
    match err {
        TokenExchangeError::Transport(_) => "transport",
        TokenExchangeError::Rejected { .. } => "rejected",
        TokenExchangeError::Malformed(_) => "malformed",
        TokenExchangeError::MissingAccessToken => "missing_access_token",
    }
}
