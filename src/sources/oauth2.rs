use http::StatusCode;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::services::SecurityConfig;
use crate::utils::constants::GRANT_TYPE_CLIENT_CREDENTIALS;

/// Token endpoint response (RFC 6749 §5.1 / §5.2).
#[derive(Debug, Deserialize, Default)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Failed client-credentials exchange. Never contains the client secret.
#[derive(Debug, Error)]
pub enum TokenExchangeError {
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("token endpoint returned {status}: {}", .description.as_deref().unwrap_or("no description"))]
    Rejected {
        status: StatusCode,
        error: Option<String>,
        description: Option<String>,
    },

    #[error("invalid token response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("token response has no access_token")]
    MissingAccessToken,
}

/// Access token plus its lifetime in seconds
#[derive(Debug, Clone)]
pub struct GrantedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// OAuth2 client-credentials grant against a single token url.
#[derive(Debug, Clone)]
pub struct OAuth2Source {
    pub client: Client,
}

impl OAuth2Source {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn request_client_credentials_token(
        &self,
        token_url: &str,
        credentials: &SecurityConfig,
    ) -> Result<GrantedToken, TokenExchangeError> {
        let mut form: Vec<(&str, &str)> = vec![("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS)];
        if let Some(client_id) = credentials.client_id.as_deref() {
            form.push(("client_id", client_id));
        }
        if let Some(client_secret) = credentials.client_secret.as_deref() {
            form.push(("client_secret", client_secret));
        }

        let response = self.client.post(token_url).form(&form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("token endpoint answered {}", status);

        parse_token_response(status, &body)
    }
}

fn parse_token_response(status: StatusCode, body: &str) -> Result<GrantedToken, TokenExchangeError> {
    if !status.is_success() {
        // error bodies are best effort; a non-JSON body still yields Rejected
        let parsed: TokenResponse = serde_json::from_str(body).unwrap_or_default();
        return Err(TokenExchangeError::Rejected {
            status,
            error: parsed.error,
            description: parsed.error_description,
        });
    }

    let parsed: TokenResponse = serde_json::from_str(body)?;
    if parsed.error.is_some() {
        return Err(TokenExchangeError::Rejected {
            status,
            error: parsed.error,
            description: parsed.error_description,
        });
    }

    match parsed.access_token.filter(|t| !t.is_empty()) {
        Some(access_token) => Ok(GrantedToken {
            access_token,
            expires_in: parsed.expires_in.unwrap_or(0),
        }),
        None => Err(TokenExchangeError::MissingAccessToken),
    }
}
