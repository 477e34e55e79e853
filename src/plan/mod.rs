//! Plan summarization pipeline
//!
//! Parses a Terraform/OpenTofu plan JSON export, classifies each proposed
//! resource change into a semantic category, and renders the result as a
//! color-coded table. Data flows one way: parser → classifier → renderer.

mod classifier;
mod parser;
mod renderer;
mod types;

pub use classifier::classify;
pub use parser::PlanParser;
pub use renderer::TableRenderer;
pub use types::{ActionCategory, Change, DisplayRow, Plan, ResourceChange};
