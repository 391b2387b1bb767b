//! Costs command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::{print_json, OutputFormat};
use crate::finance::{
    calculate_gross_margin, estimate_production_costs, format_currency, CategoryClass,
    Complexity,
};

#[derive(Args, Debug)]
pub struct CostsArgs {
    /// Base selling price
    #[arg(long)]
    pub price: Decimal,

    /// Product category (free text)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Product complexity tier (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub complexity: Complexity,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CostsArgs {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let costs = estimate_production_costs(self.price, &self.category, self.complexity);

        match self.format {
            OutputFormat::Json => print_json(&costs)?,
            OutputFormat::Table => {
                let margin = calculate_gross_margin(self.price, costs.total_costs)?;
                println!(
                    "Category class:   {:?}",
                    CategoryClass::classify(&self.category)
                );
                println!("Material:         {:.2}", costs.material_costs);
                println!("Manufacturing:    {:.2}", costs.manufacturing_costs);
                println!("Logistics:        {:.2}", costs.logistics_costs);
                println!("Marketing:        {:.2}", costs.marketing_costs);
                println!("Overhead:         {:.2}", costs.overhead_costs);
                println!(
                    "Total:            {:.2} ({})",
                    costs.total_costs,
                    format_currency(costs.total_costs, "USD")
                );
                println!("Gross margin:     {margin}%");
            }
        }

        Ok(())
    }
}
