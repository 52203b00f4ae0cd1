use std::sync::Arc;

use http::{Method, StatusCode};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::services::ServiceSettings;
use crate::endpoints::resolver::{join_url, resolve_path};
use crate::error::{BridgeError, BridgeResult};
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::TOKEN_MISSING;

/// One remote operation: where to send it and what counts as success.
#[derive(Debug, Clone)]
pub struct RemoteCall<'a> {
    /// label used in logs and metrics
    pub operation: &'static str,
    pub method: Method,
    pub endpoint: &'a str,
    pub substitutions: &'a [&'a str],
    pub expected: StatusCode,
    pub failure_message: String,
}

/// Issues authenticated requests against the remote API.
///
/// A single attempt per call. Transport failures surface as
/// `BridgeError::Transport`; a status other than `RemoteCall::expected`
/// surfaces as `BridgeError::ExternalService` with the remote status.
#[derive(Debug, Clone)]
pub struct CallExecutor {
    client: Client,
    base_address: String,
    services: Arc<ServiceSettings>,
}

impl CallExecutor {
    pub fn new(client: Client, base_address: String, services: Arc<ServiceSettings>) -> Self {
        Self {
            client,
            base_address,
            services,
        }
    }

    pub async fn send(&self, token: &str, call: &RemoteCall<'_>) -> BridgeResult<Response> {
        let request = self.request(token, call)?;
        self.dispatch(call, request).await
    }

    pub async fn send_json<B>(&self, token: &str, call: &RemoteCall<'_>, body: &B) -> BridgeResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(token, call)?.json(body);
        self.dispatch(call, request).await
    }

    fn request(&self, token: &str, call: &RemoteCall<'_>) -> BridgeResult<RequestBuilder> {
        if token.is_empty() {
            return Err(BridgeError::Authorization(TOKEN_MISSING.to_owned()));
        }
        let path = resolve_path(&self.services, call.endpoint, call.substitutions)?;
        let url = join_url(&self.base_address, &path);
        debug!("{} {} {}", call.operation, call.method, url);

        Ok(self
            .client
            .request(call.method.clone(), url)
            .bearer_auth(token))
    }

    async fn dispatch(&self, call: &RemoteCall<'_>, request: RequestBuilder) -> BridgeResult<Response> {
        let metrics = get_metrics().await;
        let start = get_instant();

        let result = request.send().await;
        metrics
            .remote_request_duration
            .with_label_values(&[call.operation])
            .observe(start.elapsed().as_secs_f64());

        let response = result.inspect_err(|e| {
            error!("{} transport failure: {}", call.operation, e);
            metrics
                .remote_requests
                .with_label_values(&[call.operation, "transport_error"])
                .inc();
        })?;

        let status = response.status();
        metrics
            .remote_requests
            .with_label_values(&[call.operation, status.as_str()])
            .inc();

        if status != call.expected {
            error!(
                "{}: expected {}, remote answered {}",
                call.failure_message, call.expected, status
            );
            return Err(BridgeError::external(call.failure_message.clone(), status));
        }

        Ok(response)
    }
}
