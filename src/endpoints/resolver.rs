use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::warn;

use crate::config::services::ServiceSettings;
use crate::error::{BridgeError, BridgeResult};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Look up `endpoint_name` and render its path template.
///
/// Positional placeholders (`{0}`, `{1}`, ...) are replaced by
/// `substitutions` in order. Placeholders without a matching substitution
/// are left untouched.
pub fn resolve_path(
    settings: &ServiceSettings,
    endpoint_name: &str,
    substitutions: &[&str],
) -> BridgeResult<String> {
    let endpoint = settings
        .endpoints
        .iter()
        .find(|e| e.name == endpoint_name)
        .ok_or_else(|| BridgeError::Configuration(endpoint_name.to_owned()))?;

    Ok(render_positional(&endpoint.path, substitutions))
}

/// Render the `{0}` environment placeholder of `base_url`.
pub fn resolve_base_url(settings: &ServiceSettings, environment: Option<&str>) -> String {
    if environment.is_none() && settings.base_url.contains("{0}") {
        warn!("namespace name is not set, base url '{}' rendered with an empty environment", settings.base_url);
    }
    let base_url = render_positional(&settings.base_url, &[environment.unwrap_or_default()]);
    base_url.trim_end_matches('/').to_owned()
}

/// `{base}/{path}` with exactly one separator between the two.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Single pass over the template; substituted values are inserted literally.
fn render_positional(template: &str, substitutions: &[&str]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|idx| substitutions.get(idx))
                .map(|value| (*value).to_owned())
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::services::Endpoint;

    fn settings() -> ServiceSettings {
        ServiceSettings {
            base_url: "https://{0}.umbraco.io/".into(),
            endpoints: vec![
                Endpoint::new("Token", "umbraco/management/api/v1/security/back-office/token"),
                Endpoint::new("DocumentType", "umbraco/management/api/v1/document-type"),
                Endpoint::new("DeleteDocumentType", "umbraco/management/api/v1/document-type/{0}"),
                Endpoint::new("Pair", "a/{0}/b/{1}"),
            ],
        }
    }

    #[test]
    fn configured_names_resolve_verbatim_without_substitutions() {
        let settings = settings();
        for endpoint in &settings.endpoints {
            let path = resolve_path(&settings, &endpoint.name, &[]).unwrap();
            assert_eq!(path, endpoint.path);
        }
    }

    #[test]
    fn substitutes_positional_placeholders_in_order() {
        let settings = settings();
        assert_eq!(
            resolve_path(&settings, "DeleteDocumentType", &["42"]).unwrap(),
            "umbraco/management/api/v1/document-type/42"
        );
        assert_eq!(resolve_path(&settings, "Pair", &["x", "y"]).unwrap(), "a/x/b/y");
        assert_eq!(resolve_path(&settings, "Pair", &["x"]).unwrap(), "a/x/b/{1}");
    }

    #[test]
    fn substituted_values_are_not_rendered_again() {
        let settings = settings();
        assert_eq!(
            resolve_path(&settings, "Pair", &["{1}", "y"]).unwrap(),
            "a/{1}/b/y"
        );
        assert_eq!(
            resolve_path(&settings, "DeleteDocumentType", &["{0}"]).unwrap(),
            "umbraco/management/api/v1/document-type/{0}"
        );
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = resolve_path(&settings(), "Missing", &[]).unwrap_err();
        assert!(matches!(err, BridgeError::Configuration(name) if name == "Missing"));
    }

    #[test]
    fn base_url_renders_environment() {
        let settings = settings();
        assert_eq!(resolve_base_url(&settings, Some("dev")), "https://dev.umbraco.io");
        assert_eq!(resolve_base_url(&settings, None), "https://.umbraco.io");
    }

    #[test]
    fn join_url_uses_single_separator() {
        assert_eq!(join_url("http://host/", "/api/x"), "http://host/api/x");
        assert_eq!(join_url("http://host", "api/x"), "http://host/api/x");
    }
}
