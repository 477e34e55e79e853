mod commands;
mod output;
mod plan;
mod traits;

use clap::Parser;
use commands::{SummaryCommand, SummaryConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plansum")]
#[command(about = "Summarize a Terraform/OpenTofu plan JSON export as a change table", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to your plan .json file
    #[arg(long, default_value = "tfplan.json")]
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let config = SummaryConfig { path: cli.path };

    if let Err(err) = SummaryCommand::execute(&config) {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
