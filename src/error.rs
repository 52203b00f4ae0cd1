use http::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while serving a management operation.
///
/// Errors are propagated untouched up to the HTTP boundary, where
/// `server::error_response` turns each variant into a response.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A logical endpoint name is missing from `services.endpoints`.
    #[error("endpoint '{0}' is not configured")]
    Configuration(String),

    /// No usable bearer token could be produced.
    #[error("{0}")]
    Authorization(String),

    /// The remote API answered with a status other than the expected one.
    #[error("{message} (remote status {status_code})")]
    ExternalService {
        message: String,
        status_code: StatusCode,
    },

    /// Input rules failed before any remote call was made.
    #[error("validation failed: {}", .0.join(" - "))]
    Validation(Vec<String>),

    /// A success response carried a body of the wrong shape.
    #[error("failed to deserialize {target}: {source}")]
    Deserialization {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl BridgeError {
    pub fn external(message: impl Into<String>, status_code: StatusCode) -> Self {
        BridgeError::ExternalService {
            message: message.into(),
            status_code,
        }
    }

    /// Short label used for logs and the `boundary_errors_total` metric.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Configuration(_) => "configuration",
            BridgeError::Authorization(_) => "authorization",
            BridgeError::ExternalService { .. } => "external_service",
            BridgeError::Validation(_) => "validation",
            BridgeError::Deserialization { .. } => "deserialization",
            BridgeError::Transport(_) => "transport",
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;
