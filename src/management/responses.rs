use serde::{Deserialize, Serialize};

use crate::models::document_type::DocumentType;
use crate::models::health_check::HealthCheckGroup;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentTypeResponse {
    pub id: String,
}

impl From<DocumentType> for DocumentTypeResponse {
    fn from(document_type: DocumentType) -> Self {
        Self { id: document_type.id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheckResponse {
    pub total: i64,
    pub items: Vec<HealthCheckItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCheckItem {
    pub name: String,
}

impl From<HealthCheckGroup> for HealthCheckResponse {
    fn from(group: HealthCheckGroup) -> Self {
        Self {
            total: group.total,
            items: group
                .items
                .into_iter()
                .map(|item| HealthCheckItem { name: item.name })
                .collect(),
        }
    }
}
