use std::sync::Arc;

use http::header::LOCATION;
use http::{Method, StatusCode};
use tracing::{info, warn};

use crate::error::BridgeResult;
use crate::models::document_type::{DocumentType, DocumentTypeRequest};
use crate::remote::executor::{CallExecutor, RemoteCall};
use crate::utils::constants::{
    DELETE_DOCUMENT_TYPE_ENDPOINT, DOCUMENT_TYPE_CREATION_FAILED, DOCUMENT_TYPE_DELETION_FAILED,
    DOCUMENT_TYPE_ENDPOINT,
};

/// Document type operations of the remote management API.
#[derive(Debug, Clone)]
pub struct DocumentTypeClient {
    executor: Arc<CallExecutor>,
}

impl DocumentTypeClient {
    pub fn new(executor: Arc<CallExecutor>) -> Self {
        Self { executor }
    }

    /// POST the definition; the remote answers 201 with the new resource in `Location`.
    pub async fn create(&self, token: &str, request: &DocumentTypeRequest) -> BridgeResult<DocumentType> {
        let call = RemoteCall {
            operation: "create_document_type",
            method: Method::POST,
            endpoint: DOCUMENT_TYPE_ENDPOINT,
            substitutions: &[],
            expected: StatusCode::CREATED,
            failure_message: DOCUMENT_TYPE_CREATION_FAILED.to_owned(),
        };
        let response = self.executor.send_json(token, &call, request).await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok());
        if location.is_none() {
            warn!("document type '{}' created without a Location header", request.alias);
        }
        let id = resource_id_from_location(location);
        info!("document type '{}' created with id '{}'", request.alias, id);

        Ok(DocumentType { id })
    }

    /// `id` is percent-encoded into a single path segment.
    pub async fn delete(&self, token: &str, id: &str) -> BridgeResult<()> {
        let segment = urlencoding::encode(id);
        let call = RemoteCall {
            operation: "delete_document_type",
            method: Method::DELETE,
            endpoint: DELETE_DOCUMENT_TYPE_ENDPOINT,
            substitutions: &[segment.as_ref()],
            expected: StatusCode::OK,
            failure_message: format!("{} {}.", DOCUMENT_TYPE_DELETION_FAILED, id),
        };
        self.executor.send(token, &call).await?;
        info!("document type '{}' deleted", id);
        Ok(())
    }
}

/// Last path segment of a `Location` value, query string stripped.
/// Absent or empty header yields an empty id.
pub fn resource_id_from_location(location: Option<&str>) -> String {
    location
        .and_then(|value| value.rsplit('/').next())
        .and_then(|segment| segment.split('?').next())
        .unwrap_or_default()
        .to_owned()
}
