use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Bearer token with its absolute expiration. Never mutated after creation.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn new(access_token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token,
            expires_at,
        }
    }

    /// Token issued at `now` and valid for `expires_in_secs`. Lifetimes
    /// beyond the representable range saturate at `DateTime::MAX_UTC` / `MIN_UTC`.
    pub fn issued_at(access_token: String, now: DateTime<Utc>, expires_in_secs: i64) -> Self {
        let expires_at = TimeDelta::try_seconds(expires_in_secs)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(if expires_in_secs > 0 {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            });
        Self::new(access_token, expires_at)
    }

    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"***")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
