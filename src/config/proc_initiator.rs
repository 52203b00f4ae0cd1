use crate::config::services::ServiceConfig;
use crate::config::settings::LoggingConfig;

pub fn initiate_default_values(mut config: ServiceConfig) -> ServiceConfig {
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig::default());
    }

    // `${VAR:}` expands to an empty string; treat it like a missing value
    config.security.client_id = non_empty(config.security.client_id);
    config.security.client_secret = non_empty(config.security.client_secret);
    config.namespace.name = non_empty(config.namespace.name);

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
