//! CLI interface for productpilot
//!
//! Provides subcommands for:
//! - `analyze`: Full viability report for each opportunity
//! - `costs`: Production cost breakdown for a price point
//! - `break-even`: Break-even volume from fixed and unit costs
//! - `sensitivity`: Score and margin under perturbed assumptions
//! - `timeline`: Month-by-month adoption curve
//! - `config`: Show effective configuration

mod analyze;
mod breakeven;
mod costs;
mod sensitivity;
mod source;
mod timeline;

pub use analyze::AnalyzeArgs;
pub use breakeven::BreakEvenArgs;
pub use costs::CostsArgs;
pub use sensitivity::SensitivityArgs;
pub use source::SourceArgs;
pub use timeline::TimelineArgs;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "productpilot")]
#[command(about = "Financial viability modeling for AI-sourced product opportunities")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "productpilot.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a full financial report for each opportunity
    Analyze(AnalyzeArgs),
    /// Estimate production costs for a price point
    Costs(CostsArgs),
    /// Compute break-even units and revenue
    BreakEven(BreakEvenArgs),
    /// Run a sensitivity scenario against each opportunity
    Sensitivity(SensitivityArgs),
    /// Generate the adoption S-curve
    Timeline(TimelineArgs),
    /// Show effective configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Write a value to stdout as pretty JSON
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
