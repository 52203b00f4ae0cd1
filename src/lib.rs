//! # CMS Bridge Library
//!
//! Exposes a small management API (create/delete document types, read health
//! checks) on top of the Umbraco Management API. Calls are authenticated with
//! an OAuth2 client-credentials token that is cached and refreshed on expiry.
//!
//! Modules:
//! - `config`: YAML configuration, defaults and validation
//! - `endpoints`: logical endpoint name to URL path resolution
//! - `cache`: token record and its single-slot cache
//! - `sources`: client-credentials exchange and the token provider
//! - `remote`: authenticated calls against the remote API
//! - `management`: the operations the bridge exposes
//! - `server`: axum routes and the error-to-response boundary

pub mod cache;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod helpers;
pub mod management;
pub mod models;
pub mod observability;
pub mod remote;
pub mod server;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::error::{BridgeError, BridgeResult};
