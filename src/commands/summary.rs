use crate::plan::{classify, PlanParser, TableRenderer};
use crate::traits::{FileSystem, RealFileSystem};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for a summary run. Built once from the CLI flags and
/// handed through the pipeline; nothing reads flag state globally.
pub struct SummaryConfig {
    /// Path to the plan JSON export
    pub path: PathBuf,
}

/// Handles the default command - summarizes a plan file as a change table
pub struct SummaryCommand;

impl SummaryCommand {
    /// Execute the summary command against the real filesystem
    pub fn execute(config: &SummaryConfig) -> Result<()> {
        let table = Self::render_summary(config, &RealFileSystem)?;
        println!("{}", table);
        Ok(())
    }

    /// Run the pipeline and return the rendered table
    fn render_summary(config: &SummaryConfig, fs: &dyn FileSystem) -> Result<String> {
        // Extension check happens before any read attempt
        if config.path.extension().and_then(|e| e.to_str()) != Some("json") {
            anyhow::bail!(
                "File extension must be '.json': {}",
                config.path.display()
            );
        }

        let content = fs.read_to_string(&config.path)?;
        let plan = PlanParser::new().parse(&content)?;
        let rows = classify(&plan.resource_changes);

        Ok(TableRenderer::new().render(&rows))
    }
}
