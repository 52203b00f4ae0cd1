pub mod document_type;
pub mod health_check;
