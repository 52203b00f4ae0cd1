use std::sync::Arc;

use http::{Method, StatusCode};
use tracing::{error, info};

use crate::error::{BridgeError, BridgeResult};
use crate::models::health_check::HealthCheckGroup;
use crate::remote::executor::{CallExecutor, RemoteCall};
use crate::utils::constants::{HEALTH_CHECK_ENDPOINT, HEALTH_CHECK_FAILED};

#[derive(Debug, Clone)]
pub struct HealthCheckClient {
    executor: Arc<CallExecutor>,
}

impl HealthCheckClient {
    pub fn new(executor: Arc<CallExecutor>) -> Self {
        Self { executor }
    }

    /// GET the health check groups. A 200 with an unparseable body is a
    /// `BridgeError::Deserialization`, never an empty result.
    pub async fn get(&self, token: &str) -> BridgeResult<HealthCheckGroup> {
        let call = RemoteCall {
            operation: "get_health_check",
            method: Method::GET,
            endpoint: HEALTH_CHECK_ENDPOINT,
            substitutions: &[],
            expected: StatusCode::OK,
            failure_message: HEALTH_CHECK_FAILED.to_owned(),
        };
        let body = self.executor.send(token, &call).await?.text().await?;

        let group: HealthCheckGroup = serde_json::from_str(&body).map_err(|source| {
            error!("health check body is not a health check group: {}", source);
            BridgeError::Deserialization {
                target: "health check group",
                source,
            }
        })?;
        info!("health check read, {} groups", group.total);
        Ok(group)
    }
}
