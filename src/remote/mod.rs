pub mod document_type;
pub mod executor;
pub mod health_check;
