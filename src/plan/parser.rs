//! Plan document parser
//!
//! Decodes the JSON export of a Terraform/OpenTofu plan
//! (`terraform show -json plan`) into the typed document shape. A document
//! that does not match the expected shape is a hard error; no partial
//! results are produced. Extra fields in the document are ignored.

use anyhow::{Context, Result};

use super::types::Plan;

/// Parser for plan JSON exports
pub struct PlanParser;

impl Default for PlanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse raw file content into a `Plan`
    pub fn parse(&self, content: &str) -> Result<Plan> {
        serde_json::from_str(content).context("Failed to parse plan file as JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_plan_preserves_order() {
        let content = r#"{
            "resource_changes": [
                {"address": "aws_instance.web", "change": {"actions": ["create"]}},
                {"address": "aws_instance.db", "change": {"actions": ["delete", "create"]}}
            ]
        }"#;

        let plan = PlanParser::new().parse(content).unwrap();
        assert_eq!(plan.resource_changes.len(), 2);
        assert_eq!(plan.resource_changes[0].address, "aws_instance.web");
        assert_eq!(plan.resource_changes[0].change.actions, vec!["create"]);
        assert_eq!(plan.resource_changes[1].address, "aws_instance.db");
        assert_eq!(
            plan.resource_changes[1].change.actions,
            vec!["delete", "create"]
        );
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let content = r#"{
            "format_version": "1.2",
            "terraform_version": "1.9.0",
            "resource_changes": [
                {
                    "address": "aws_s3_bucket.logs",
                    "mode": "managed",
                    "type": "aws_s3_bucket",
                    "change": {"actions": ["update"], "before": {}, "after": {}}
                }
            ],
            "configuration": {}
        }"#;

        let plan = PlanParser::new().parse(content).unwrap();
        assert_eq!(plan.resource_changes.len(), 1);
        assert_eq!(plan.resource_changes[0].change.actions, vec!["update"]);
    }

    #[test]
    fn test_parse_empty_changes() {
        let plan = PlanParser::new()
            .parse(r#"{"resource_changes": []}"#)
            .unwrap();
        assert!(plan.resource_changes.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(PlanParser::new().parse("not json at all").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        // Missing the resource_changes field entirely
        assert!(PlanParser::new().parse(r#"{"resources": []}"#).is_err());

        // Actions must be a list of strings
        let content = r#"{
            "resource_changes": [
                {"address": "aws_instance.web", "change": {"actions": "create"}}
            ]
        }"#;
        assert!(PlanParser::new().parse(content).is_err());
    }
}
