use serde::{Deserialize, Serialize};

/// Body of the remote "create document type" call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeRequest {
    pub alias: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub allowed_as_root: bool,
    pub title: String,
    pub varies_by_culture: bool,
    pub varies_by_segment: bool,
    pub collection: Option<serde_json::Value>,
    pub is_element: bool,
}

/// Created document type; `id` is empty when the remote sent no `Location`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentType {
    pub id: String,
}
