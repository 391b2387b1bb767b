//! Timeline command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{print_json, OutputFormat};
use crate::finance::{calculate_penetration_timeline, format_currency, format_percentage};

#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Total addressable market in USD
    #[arg(long)]
    pub tam: Decimal,

    /// Target penetration in percent
    #[arg(long)]
    pub target: Decimal,

    /// Ramp-up period in months
    #[arg(long, default_value = "18")]
    pub months: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl TimelineArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let timeline = calculate_penetration_timeline(self.tam, self.target, self.months)?;

        match self.format {
            OutputFormat::Json => print_json(&timeline)?,
            OutputFormat::Table => {
                println!("{:>5}  {:>8}  {:>14}  {:>10}", "Month", "Pen.", "Revenue", "Units");
                for point in &timeline {
                    println!(
                        "{:>5}  {:>8}  {:>14}  {:>10}",
                        point.month,
                        format_percentage(point.penetration, 2),
                        format_currency(point.revenue, "USD"),
                        point.units
                    );
                }
            }
        }

        Ok(())
    }
}
