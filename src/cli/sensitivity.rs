//! Sensitivity command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{print_json, OutputFormat, SourceArgs};
use crate::finance::{perform_sensitivity_analysis, SensitivityVariables};

#[derive(Args, Debug)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Price change in percent
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub price_change: Decimal,

    /// Cost change in percent
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub cost_change: Decimal,

    /// TAM change in percent
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub tam_change: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SensitivityArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let variables = SensitivityVariables {
            price_change: self.price_change,
            cost_change: self.cost_change,
            tam_change: self.tam_change,
        };

        let opportunities = self.source.load().await?;
        let mut results = Vec::with_capacity(opportunities.len());
        for opp in &opportunities {
            let result = perform_sensitivity_analysis(opp, &variables)?;
            results.push((opp, result));
        }

        match self.format {
            OutputFormat::Json => {
                let rows: Vec<_> = results
                    .iter()
                    .map(|(opp, result)| {
                        serde_json::json!({
                            "id": opp.id,
                            "name": opp.name,
                            "baseScore": opp.overall_score,
                            "result": result,
                        })
                    })
                    .collect();
                print_json(&rows)?;
            }
            OutputFormat::Table => {
                if let Some((_, first)) = results.first() {
                    println!("Scenario: {}", first.scenario);
                }
                for (opp, result) in &results {
                    println!(
                        "{:<36} score {:>4} -> {:>4}  margin {:>4}%  {}",
                        opp.name,
                        opp.overall_score.normalize(),
                        result.adjusted_score.normalize(),
                        result.adjusted_margin,
                        result.impact
                    );
                }
            }
        }

        Ok(())
    }
}
