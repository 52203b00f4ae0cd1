//! Management operations exposed by the bridge.
//!
//! Each operation obtains a token, calls the matching remote client and maps
//! the result. Errors are returned as-is for the HTTP boundary to translate.

use std::sync::Arc;

use tracing::info;

use crate::error::BridgeResult;
use crate::models::document_type::DocumentTypeRequest;
use crate::remote::document_type::DocumentTypeClient;
use crate::remote::health_check::HealthCheckClient;
use crate::sources::token_provider::TokenProvider;
use crate::sources::FetchToken;

pub mod commands;
pub mod responses;

use commands::CreateContentTypeCommand;
use responses::{DocumentTypeResponse, HealthCheckResponse};

pub struct ManagementService<T = TokenProvider> {
    tokens: Arc<T>,
    document_types: DocumentTypeClient,
    health_checks: HealthCheckClient,
}

impl<T: FetchToken> ManagementService<T> {
    pub fn new(
        tokens: Arc<T>,
        document_types: DocumentTypeClient,
        health_checks: HealthCheckClient,
    ) -> Self {
        Self {
            tokens,
            document_types,
            health_checks,
        }
    }

    /// Validation runs before the token is requested; an invalid command
    /// never reaches the remote API.
    pub async fn create_content_type(
        &self,
        command: CreateContentTypeCommand,
    ) -> BridgeResult<DocumentTypeResponse> {
        command.validate()?;
        let token = self.tokens.get_token().await?;

        let request = DocumentTypeRequest::from(command);
        let created = self
            .document_types
            .create(&token.access_token, &request)
            .await?;
        Ok(created.into())
    }

    pub async fn delete_content_type(&self, id: &str) -> BridgeResult<()> {
        let token = self.tokens.get_token().await?;
        self.document_types.delete(&token.access_token, id).await
    }

    pub async fn get_health(&self) -> BridgeResult<HealthCheckResponse> {
        let token = self.tokens.get_token().await?;
        let group = self.health_checks.get(&token.access_token).await?;
        info!("health check: {} items", group.items.len());
        Ok(group.into())
    }
}
