//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Structural invariants only: an endpoint the bridge needs but the file
//!   lacks is reported as a warning and fails later, at lookup time.

use std::collections::HashSet;
use tracing::{error, info, warn};

use crate::config::services::{ServiceConfig, ServiceSettings};
use crate::config::settings::SettingsConfig;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::REQUIRED_ENDPOINTS;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_services(&cfg.services, &mut errors);
    for warning in collect_warnings(cfg) {
        warn!("config: {}", warning);
    }

    if errors.is_empty() {
        info!("config validation passed");
        Ok(())
    } else {
        let metrics = get_metrics().await;
        for e in &errors {
            error!("config validation: {}", e);
            metrics.config_validation_errors.inc();
        }
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.server.host.trim().is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    if settings.server.port.parse::<u16>().is_err() {
        errors.push(format!(
            "settings.server.port '{}' is not a valid port",
            settings.server.port
        ));
    }
    if settings.metrics.is_enabled && !settings.metrics.path.starts_with('/') {
        errors.push(format!(
            "settings.metrics.path '{}' must start with '/'",
            settings.metrics.path
        ));
    }
    if let Some(logging) = &settings.logging {
        let allowed = ["trace", "debug", "info", "warn", "error"];
        if !allowed.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' must be one of {:?}",
                logging.level, allowed
            ));
        }
    }
    if settings.http.timeout_ms == Some(0) {
        errors.push("settings.http.timeout_ms must be greater than 0".to_string());
    }
}

fn validate_services(services: &ServiceSettings, errors: &mut Vec<String>) {
    if services.base_url.trim().is_empty() {
        errors.push("services.base_url must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    for (idx, endpoint) in services.endpoints.iter().enumerate() {
        if endpoint.name.trim().is_empty() {
            errors.push(format!("services.endpoints[{}].name must not be empty", idx));
        } else if !seen.insert(endpoint.name.as_str()) {
            errors.push(format!(
                "services.endpoints: duplicate endpoint name '{}'",
                endpoint.name
            ));
        }
        if endpoint.path.trim().is_empty() {
            errors.push(format!(
                "services.endpoints['{}'].path must not be empty",
                endpoint.name
            ));
        }
    }
}

/// Issues that do not reject the config but make some operations fail later.
pub fn collect_warnings(cfg: &ServiceConfig) -> Vec<String> {
    let mut warnings: Vec<String> = REQUIRED_ENDPOINTS
        .iter()
        .filter(|name| !cfg.services.endpoints.iter().any(|e| e.name == **name))
        .map(|name| format!("endpoint '{}' is not configured; calls using it will fail", name))
        .collect();

    if cfg.services.base_url.contains("{0}") && cfg.namespace.name.is_none() {
        warnings.push(
            "services.base_url has an environment placeholder but namespace.name is not set"
                .to_string(),
        );
    }
    warnings
}
