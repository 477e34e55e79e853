//! Data types for plan summarization
//!
//! This module defines the document shape decoded from a plan JSON export
//! and the semantic change categories derived from it.

use owo_colors::AnsiColors;
use serde::Deserialize;

/// Top-level plan document (`terraform show -json` output)
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    /// Resource changes in document order
    pub resource_changes: Vec<ResourceChange>,
}

/// One proposed change entry in the plan
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    /// Full resource address (e.g., "aws_instance.example", "module.vpc.aws_subnet.main")
    pub address: String,

    /// The nested change object carrying the action verbs
    pub change: Change,
}

/// The nested object containing the raw action list
#[derive(Debug, Clone, Deserialize)]
pub struct Change {
    /// Raw action verbs, e.g. `["create"]`, `["delete", "create"]`, `["no-op"]`
    pub actions: Vec<String>,
}

/// Semantic category derived from a resource's raw action list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCategory {
    /// Resource will be created
    Create,
    /// Resource will be destroyed
    Delete,
    /// Resource will be updated in-place
    Update,
    /// Resource will be destroyed and recreated
    Replace,
    /// No changes
    NoOp,
    /// Unrecognized action string, passed through unmodified
    Other(String),
}

impl ActionCategory {
    /// Classify a raw action list. Total over all inputs: anything not in the
    /// fixed enumeration lands in `Other` with its literal joined text.
    pub fn from_actions(actions: &[String]) -> Self {
        match actions.join(" ").as_str() {
            "no-op" => ActionCategory::NoOp,
            "create" => ActionCategory::Create,
            "delete" => ActionCategory::Delete,
            "update" => ActionCategory::Update,
            "create delete" | "delete create" => ActionCategory::Replace,
            other => ActionCategory::Other(other.to_string()),
        }
    }

    /// Get the raw label for this category, used for both sorting and display
    pub fn label(&self) -> &str {
        match self {
            ActionCategory::Create => "create",
            ActionCategory::Delete => "delete",
            ActionCategory::Update => "update",
            ActionCategory::Replace => "replace",
            ActionCategory::NoOp => "no-op",
            ActionCategory::Other(label) => label,
        }
    }

    /// Get the terminal color for this category, if any. `Other` labels are
    /// rendered uncolored.
    pub fn color(&self) -> Option<AnsiColors> {
        match self {
            ActionCategory::Create => Some(AnsiColors::Green),
            ActionCategory::Delete | ActionCategory::Replace => Some(AnsiColors::Red),
            ActionCategory::Update => Some(AnsiColors::Yellow),
            ActionCategory::NoOp | ActionCategory::Other(_) => None,
        }
    }
}

/// One row of the rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Category shown in the "Action" column
    pub category: ActionCategory,
    /// Resource address shown in the "Addresses" column
    pub address: String,
}
