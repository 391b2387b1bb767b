//! Analyze command implementation

use clap::Args;

use super::{print_json, OutputFormat, SourceArgs};
use crate::config::Config;
use crate::finance::Complexity;
use crate::opportunity::{select_opportunities, SelectionOptions};
use crate::report::FinancialReport;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Product complexity tier (low, medium, high)
    #[arg(long)]
    pub complexity: Option<Complexity>,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Drop opportunities below this confidence (0-100)
    #[arg(long)]
    pub min_confidence: Option<u8>,

    /// Keep only the N highest-scoring opportunities
    #[arg(long)]
    pub max_opportunities: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut assumptions = config.assumptions.clone();
        if let Some(complexity) = self.complexity {
            assumptions.complexity = complexity;
        }
        if let Some(years) = self.years {
            assumptions.years = years;
        }

        let options = SelectionOptions {
            min_confidence: self.min_confidence.or(config.analysis.min_confidence),
            max_opportunities: self.max_opportunities.or(config.analysis.max_opportunities),
        };

        let opportunities = select_opportunities(self.source.load().await?, &options);
        tracing::info!(count = opportunities.len(), "Analyzing opportunities");

        let reports = opportunities
            .iter()
            .map(|opp| FinancialReport::build(opp, &assumptions))
            .collect::<Result<Vec<_>, _>>()?;

        match self.format {
            OutputFormat::Json => print_json(&reports)?,
            OutputFormat::Table => {
                for report in &reports {
                    print!("{}", report.format_table());
                }
            }
        }

        Ok(())
    }
}
