use serde::Deserialize;

use crate::error::{BridgeError, BridgeResult};
use crate::models::document_type::DocumentTypeRequest;
use crate::utils::constants::{
    ALIAS_NOT_EMPTY, DESCRIPTION_NOT_EMPTY, ICON_PREFIX, ICON_PREFIX_REQUIRED, NAME_NOT_EMPTY,
};

/// Incoming "create content type" command. Missing strings deserialize as
/// empty so that validation, not the JSON extractor, reports them.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateContentTypeCommand {
    pub alias: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub allowed_as_root: bool,
    pub title: String,
    pub varies_by_culture: bool,
    pub varies_by_segment: bool,
    pub collection: Option<serde_json::Value>,
    pub is_element: bool,
}

impl CreateContentTypeCommand {
    /// Runs every rule and reports all violations together.
    pub fn validate(&self) -> BridgeResult<()> {
        let mut violations = Vec::new();

        if is_blank(&self.alias) {
            violations.push(ALIAS_NOT_EMPTY.to_owned());
        }
        if is_blank(&self.name) {
            violations.push(NAME_NOT_EMPTY.to_owned());
        }
        if is_blank(&self.description) {
            violations.push(DESCRIPTION_NOT_EMPTY.to_owned());
        }
        if !self.icon.starts_with(ICON_PREFIX) {
            violations.push(ICON_PREFIX_REQUIRED.to_owned());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(BridgeError::Validation(violations))
        }
    }
}

impl From<CreateContentTypeCommand> for DocumentTypeRequest {
    fn from(command: CreateContentTypeCommand) -> Self {
        Self {
            alias: command.alias,
            name: command.name,
            description: command.description,
            icon: command.icon,
            allowed_as_root: command.allowed_as_root,
            title: command.title,
            varies_by_culture: command.varies_by_culture,
            varies_by_segment: command.varies_by_segment,
            collection: command.collection,
            is_element: command.is_element,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateContentTypeCommand {
        CreateContentTypeCommand {
            alias: "landingPage".into(),
            name: "Landing page".into(),
            description: "Top level marketing page".into(),
            icon: "icon-home".into(),
            title: "Landing".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_command_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn reports_all_violations_in_rule_order() {
        let command = CreateContentTypeCommand {
            alias: "   ".into(),
            icon: "home".into(),
            ..Default::default()
        };
        match command.validate() {
            Err(BridgeError::Validation(violations)) => assert_eq!(
                violations,
                vec![
                    ALIAS_NOT_EMPTY.to_owned(),
                    NAME_NOT_EMPTY.to_owned(),
                    DESCRIPTION_NOT_EMPTY.to_owned(),
                    ICON_PREFIX_REQUIRED.to_owned(),
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn deserializes_camel_case_and_maps_to_request() {
        let command: CreateContentTypeCommand = serde_json::from_value(serde_json::json!({
            "alias": "article",
            "name": "Article",
            "description": "Blog article",
            "icon": "icon-document",
            "allowedAsRoot": true,
            "variesByCulture": true,
            "isElement": false,
            "collection": { "id": "c-1" }
        }))
        .unwrap();
        assert!(command.validate().is_ok());

        let request = DocumentTypeRequest::from(command);
        assert!(request.allowed_as_root);
        assert!(request.varies_by_culture);
        assert!(!request.varies_by_segment);
        assert_eq!(request.title, "");
        assert_eq!(request.collection, Some(serde_json::json!({ "id": "c-1" })));
    }
}
