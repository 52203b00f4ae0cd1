use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::Token;
use crate::helpers::time::now_utc;

/// Single-slot token cache. The slot holds an immutable record that is
/// swapped as a whole; readers never observe a half-written token.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<Arc<Token>>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token if present and not expired
    pub async fn get(&self) -> Option<Arc<Token>> {
        let now = now_utc();
        self.inner
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_usable_at(now))
            .cloned()
    }

    /// Replace the current token
    pub async fn set(&self, token: Token) -> Arc<Token> {
        let token = Arc::new(token);
        *self.inner.write().await = Some(token.clone());
        token
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// Raw slot content, expired or not
    pub async fn peek(&self) -> Option<Arc<Token>> {
        self.inner.read().await.clone()
    }
}
