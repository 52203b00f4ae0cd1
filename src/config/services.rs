use serde::Deserialize;
use std::fmt;

use crate::config::settings::SettingsConfig;

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    #[serde(default)]
    pub namespace: NamespaceConfig,
    pub services: ServiceSettings,
    #[serde(default)]
    pub security: SecurityConfig,
}

/// ================================
/// Remote API: base url + named endpoints
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSettings {
    /// may contain `{0}`, rendered with `namespace.name`
    #[serde(alias = "BaseUrl")]
    pub base_url: String,
    #[serde(default, alias = "Endpoints")]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Endpoint {
    #[serde(alias = "Name")]
    pub name: String,
    /// path template, positional placeholders `{0}`, `{1}` ...
    #[serde(alias = "Path")]
    pub path: String,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Deployment environment the base url is rendered for.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NamespaceConfig {
    #[serde(alias = "Name")]
    pub name: Option<String>,
}

/// ================================
/// Client credentials for the token exchange
/// ================================
#[derive(Deserialize, Clone, Default)]
pub struct SecurityConfig {
    #[serde(alias = "ClientId")]
    pub client_id: Option<String>,
    #[serde(alias = "ClientSecret")]
    pub client_secret: Option<String>,
}

impl SecurityConfig {
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .finish()
    }
}
