//! Boundary translation from `BridgeError` to an HTTP response.

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::error::BridgeError;
use crate::observability::metrics::try_get_metrics;
use crate::utils::constants::UNEXPECTED_ERROR;

/// Status and JSON body for an error. Pure mapping; never fails.
///
/// Validation failures keep the default 200 status, matching the service
/// this bridge replaces. Callers must look at the body.
pub fn translate(err: &BridgeError) -> (StatusCode, Value) {
    match err {
        BridgeError::ExternalService {
            message,
            status_code,
        } => (*status_code, json!({ "error": message })),
        BridgeError::Validation(violations) => (
            StatusCode::OK,
            json!({ "message": violations.join(" - "), "errors": violations }),
        ),
        BridgeError::Authorization(reason) => {
            (StatusCode::UNAUTHORIZED, json!({ "error": reason }))
        }
        BridgeError::Configuration(_)
        | BridgeError::Deserialization { .. }
        | BridgeError::Transport(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": UNEXPECTED_ERROR }),
        ),
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, body) = translate(&self);
        match &self {
            BridgeError::Validation(_) => warn!("request rejected: {}", self),
            _ => error!("request failed ({}): {}", self.kind(), self),
        }
        if let Some(metrics) = try_get_metrics() {
            metrics.boundary_errors.with_label_values(&[self.kind()]).inc();
        }
        (status, Json(body)).into_response()
    }
}
