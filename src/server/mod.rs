pub mod error_response;
pub mod routes;
pub mod server;
