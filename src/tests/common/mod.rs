use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use httpmock::MockServer;
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::config::services::{Endpoint, SecurityConfig, ServiceSettings};
use crate::remote::executor::CallExecutor;
use crate::sources::token_provider::TokenProvider;

pub const TOKEN_PATH: &str = "/umbraco/management/api/v1/security/back-office/token";
pub const DOCUMENT_TYPE_PATH: &str = "/umbraco/management/api/v1/document-type";
pub const HEALTH_CHECK_PATH: &str = "/umbraco/management/api/v1/health-check-group";

pub const CLIENT_ID: &str = "umbraco-back-office-bridge";
pub const CLIENT_SECRET: &str = "bridge-secret";

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn service_settings() -> Arc<ServiceSettings> {
    Arc::new(ServiceSettings {
        base_url: "http://unused/{0}".into(),
        endpoints: vec![
            Endpoint::new("Token", TOKEN_PATH.trim_start_matches('/')),
            Endpoint::new("DocumentType", DOCUMENT_TYPE_PATH.trim_start_matches('/')),
            Endpoint::new(
                "DeleteDocumentType",
                format!("{}/{{0}}", DOCUMENT_TYPE_PATH.trim_start_matches('/')),
            ),
            Endpoint::new("HealthCheck", HEALTH_CHECK_PATH.trim_start_matches('/')),
        ],
    })
}

pub fn credentials() -> SecurityConfig {
    SecurityConfig::new(Some(CLIENT_ID.into()), Some(CLIENT_SECRET.into()))
}

pub fn token_provider(server: &MockServer, coalesce_refresh: bool) -> TokenProvider {
    token_provider_with(server, service_settings(), credentials(), coalesce_refresh)
}

pub fn token_provider_with(
    server: &MockServer,
    services: Arc<ServiceSettings>,
    credentials: SecurityConfig,
    coalesce_refresh: bool,
) -> TokenProvider {
    TokenProvider::new(
        build_reqwest_client(),
        services,
        server.base_url(),
        credentials,
        Some("dev".into()),
        coalesce_refresh,
    )
}

pub fn executor(server: &MockServer) -> Arc<CallExecutor> {
    Arc::new(CallExecutor::new(
        build_reqwest_client(),
        server.base_url(),
        service_settings(),
    ))
}

pub fn token_json(token: &str, expires_in: i64) -> String {
    format!(r#"{{"access_token":"{token}","expires_in":{expires_in},"token_type":"Bearer"}}"#)
}
