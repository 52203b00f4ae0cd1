use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::info;

use crate::error::BridgeResult;
use crate::management::commands::CreateContentTypeCommand;
use crate::management::responses::{DocumentTypeResponse, HealthCheckResponse};
use crate::server::server::AppState;

pub const HEALTH_CHECK_ROUTE: &str = "/api/Management/HealthCheck";
pub const DOCUMENT_TYPE_ROUTE: &str = "/api/Management/DocumentType";
pub const DELETE_DOCUMENT_TYPE_ROUTE: &str = "/api/Management/Delete/{id}";

pub fn management_router() -> Router<AppState> {
    Router::new()
        .route(HEALTH_CHECK_ROUTE, get(get_health))
        .route(DOCUMENT_TYPE_ROUTE, post(create_document_type))
        .route(DELETE_DOCUMENT_TYPE_ROUTE, delete(delete_document_type))
}

async fn get_health(State(state): State<AppState>) -> BridgeResult<Json<HealthCheckResponse>> {
    let health = state.management.get_health().await?;
    Ok(Json(health))
}

async fn create_document_type(
    State(state): State<AppState>,
    Json(command): Json<CreateContentTypeCommand>,
) -> BridgeResult<Json<DocumentTypeResponse>> {
    info!("create document type '{}'", command.alias);
    let created = state.management.create_content_type(command).await?;
    Ok(Json(created))
}

async fn delete_document_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> BridgeResult<StatusCode> {
    info!("delete document type '{}'", id);
    state.management.delete_content_type(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
