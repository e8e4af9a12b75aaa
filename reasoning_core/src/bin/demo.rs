use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use reasoning_core::{Brain, ExternalClause};
use world_model::WorldConfig;

#[derive(Debug, Parser)]
#[command(name = "brain-demo")]
#[command(bin_name = "brain-demo")]
#[command(about = "Feed clauses to a brain and print what it thinks", long_about = None)]
struct DemoCli {
    /// World configuration (TOML). Defaults to the built-in roster.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of clauses. Defaults to the built-in scenario.
    #[arg(long)]
    clauses: Option<PathBuf>,

    /// Report a rejected clause and carry on with the next one.
    #[arg(short, long)]
    keep_going: bool,
}

fn reference_scenario() -> Vec<ExternalClause> {
    vec![
        ExternalClause::new("see")
            .with_role("agent", "Tim")
            .with_role("target", "Tom"),
        ExternalClause::new("see")
            .with_unknown("agent")
            .with_role("target", "Tom"),
    ]
}

fn load_clauses(path: &Path) -> anyhow::Result<Vec<ExternalClause>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read clauses from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse clauses in {}", path.display()))
}

/// Applied when `RUST_LOG` is unset, so answers log their notable argument.
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(rust_log: Option<String>) -> EnvFilter {
    EnvFilter::new(rust_log.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = DemoCli::parse();

    let config = match &cli.config {
        Some(path) => WorldConfig::from_path(path)?,
        None => WorldConfig::default(),
    };
    let mut brain = Brain::from_config(config)?;

    let clauses = match &cli.clauses {
        Some(path) => load_clauses(path)?,
        None => reference_scenario(),
    };

    for clause in &clauses {
        println!("{}", "-".repeat(80));
        println!("{}", serde_json::to_string(clause)?);

        match brain.receive(clause) {
            Ok(outputs) => {
                for output in outputs {
                    println!("* {}", output.to_json_pretty()?);
                }
            }
            Err(err) if cli.keep_going => {
                tracing::error!(error = %err, %clause, "clause rejected");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to process {clause}"));
            }
        }
    }

    Ok(())
}
