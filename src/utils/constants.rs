//! Shared constants and invariants

// Logical endpoint names looked up in `services.endpoints`
pub const TOKEN_ENDPOINT: &str = "Token";
pub const DOCUMENT_TYPE_ENDPOINT: &str = "DocumentType";
pub const DELETE_DOCUMENT_TYPE_ENDPOINT: &str = "DeleteDocumentType";
pub const HEALTH_CHECK_ENDPOINT: &str = "HealthCheck";

pub const REQUIRED_ENDPOINTS: [&str; 4] = [
    TOKEN_ENDPOINT,
    DOCUMENT_TYPE_ENDPOINT,
    DELETE_DOCUMENT_TYPE_ENDPOINT,
    HEALTH_CHECK_ENDPOINT,
];

pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const ICON_PREFIX: &str = "icon-";

// Error messages
pub const TOKEN_EXCHANGE_FAILED: &str = "Error obtaining a token.";
pub const TOKEN_MISSING: &str =
    "Token cannot be null. Please ensure you have a valid token before making this request.";
pub const DOCUMENT_TYPE_CREATION_FAILED: &str = "Error creating document type.";
pub const DOCUMENT_TYPE_DELETION_FAILED: &str = "Error deleting document type";
pub const HEALTH_CHECK_FAILED: &str = "Error getting health check data.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

// Validation messages
pub const ALIAS_NOT_EMPTY: &str = "Alias must not be empty";
pub const NAME_NOT_EMPTY: &str = "Name must not be empty";
pub const DESCRIPTION_NOT_EMPTY: &str = "Description must not be empty";
pub const ICON_PREFIX_REQUIRED: &str = "Icon must start with icon-";
