//! Break-even command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{print_json, OutputFormat};
use crate::finance::{calculate_break_even, format_currency, format_percentage};

#[derive(Args, Debug)]
pub struct BreakEvenArgs {
    /// Fixed costs to recover
    #[arg(long)]
    pub fixed: Decimal,

    /// Variable cost per unit
    #[arg(long)]
    pub variable: Decimal,

    /// Selling price per unit
    #[arg(long)]
    pub price: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl BreakEvenArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let result = calculate_break_even(self.fixed, self.variable, self.price)?;

        match self.format {
            OutputFormat::Json => print_json(&result)?,
            OutputFormat::Table => {
                println!("Contribution margin: {:.2}", result.contribution_margin);
                println!(
                    "Margin ratio:        {}",
                    format_percentage(result.contribution_margin_ratio * Decimal::ONE_HUNDRED, 1)
                );
                println!("Break-even units:    {}", result.break_even_units);
                println!(
                    "Break-even revenue:  {}",
                    format_currency(result.break_even_revenue, "USD")
                );
            }
        }

        Ok(())
    }
}
