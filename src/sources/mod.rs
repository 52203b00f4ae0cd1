use std::sync::Arc;

use crate::cache::token::Token;
use crate::error::BridgeResult;

pub mod oauth2;
pub mod token_provider;

/// Anything able to hand out a bearer token for the remote API.
pub trait FetchToken {
    fn get_token(&self) -> impl std::future::Future<Output = BridgeResult<Arc<Token>>> + Send;
}
