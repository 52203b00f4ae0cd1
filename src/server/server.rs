use std::future::Future;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::Router;
use reqwest::Client;
use tracing::info;

use crate::config::services::ServiceConfig;
use crate::config::settings::SettingsConfig;
use crate::endpoints::resolver::resolve_base_url;
use crate::management::ManagementService;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::remote::document_type::DocumentTypeClient;
use crate::remote::executor::CallExecutor;
use crate::remote::health_check::HealthCheckClient;
use crate::server::routes::management_router;
use crate::sources::token_provider::TokenProvider;

#[derive(Clone)]
pub struct AppState {
    pub metrics_state: MetricsState,
    pub management: Arc<ManagementService>,
}

impl AppState {
    pub fn new(metrics_state: MetricsState, management: Arc<ManagementService>) -> Self {
        Self {
            metrics_state,
            management,
        }
    }

    /// Wire the token provider, remote clients and management service.
    pub async fn from_config(service_config: &ServiceConfig, client: Client) -> Self {
        let services = Arc::new(service_config.services.clone());
        let environment = service_config.namespace.name.clone();
        let base_url = resolve_base_url(&services, environment.as_deref());
        info!("remote base url: {}", base_url);

        let tokens = Arc::new(TokenProvider::new(
            client.clone(),
            services.clone(),
            base_url.clone(),
            service_config.security.clone(),
            environment,
            service_config.settings.token.coalesce_refresh,
        ));
        let executor = Arc::new(CallExecutor::new(client, base_url, services));
        let management = ManagementService::new(
            tokens,
            DocumentTypeClient::new(executor.clone()),
            HealthCheckClient::new(executor),
        );

        let metrics = get_metrics().await;
        Self::new(
            MetricsState::new(metrics.registry.clone()),
            Arc::new(management),
        )
    }
}

pub fn router(state: AppState, settings_config: &SettingsConfig) -> Router {
    Router::new()
        .merge(management_router())
        .merge(state.metrics_state.router(&settings_config.metrics))
        .with_state(state)
}

/// Serve until `shutdown` resolves; in-flight requests are allowed to finish.
pub async fn start<F>(settings_config: &SettingsConfig, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state, settings_config);

    let bind_addr = format!("{}:{}", settings_config.server.host, settings_config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow!("cannot bind {}: {}", bind_addr, e))?;
    info!("listening on {}", bind_addr);

    let metrics = get_metrics().await;
    metrics.up.set(1);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    metrics.up.set(0);

    Ok(())
}
