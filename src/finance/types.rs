//! Financial model types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Financial calculation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinanceError {
    /// An input is outside the domain of the formula
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// ROI analysis needs at least one projected year
    #[error("Revenue projections are empty")]
    EmptyProjections,
    /// Intermediate value exceeded decimal range
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),
}

/// Product complexity tier used for cost estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::str::FromStr for Complexity {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(FinanceError::InvalidArgument(format!(
                "unknown complexity tier '{other}'"
            ))),
        }
    }
}

/// Per-unit production cost breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub material_costs: Decimal,
    pub manufacturing_costs: Decimal,
    pub logistics_costs: Decimal,
    pub marketing_costs: Decimal,
    pub overhead_costs: Decimal,
    /// Always the exact sum of the five components
    pub total_costs: Decimal,
}

/// One year of projected revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueProjection {
    /// 1-indexed projection year
    pub year: u32,
    pub projected_revenue: Decimal,
    pub projected_units: u64,
    /// Percentage of the adjusted TAM captured (not clipped at 100)
    pub market_penetration: Decimal,
    pub average_selling_price: Decimal,
}

/// Return-on-investment summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiAnalysis {
    pub initial_investment: Decimal,
    /// Percent, negative when the horizon does not recover the investment
    pub projected_roi: Decimal,
    /// Months until cumulative profit covers the investment, `None` if never
    pub payback_period_months: Option<u32>,
    pub net_present_value: Decimal,
    /// Mean annual profit over investment, in percent.
    ///
    /// This is a simple-return approximation, not the discount rate at which
    /// NPV is zero.
    pub approximate_irr: Decimal,
}

/// Break-even volume and revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResult {
    /// Rounded up to the next whole unit
    pub break_even_units: u64,
    pub break_even_revenue: Decimal,
    pub contribution_margin: Decimal,
    pub contribution_margin_ratio: Decimal,
}

/// Percentage perturbations applied in a sensitivity scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityVariables {
    #[serde(default, alias = "priceChange")]
    pub price_change: Decimal,
    #[serde(default, alias = "costChange")]
    pub cost_change: Decimal,
    #[serde(default, alias = "tamChange")]
    pub tam_change: Decimal,
}

/// Qualitative effect of a scenario on the opportunity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

impl Impact {
    /// Human-readable assessment
    pub fn assessment(&self) -> &'static str {
        match self {
            Impact::Positive => "Positive impact - opportunity becomes more attractive",
            Impact::Neutral => "Neutral impact on opportunity viability",
            Impact::Negative => "Negative impact - opportunity becomes less attractive",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.assessment())
    }
}

/// Outcome of a sensitivity scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResult {
    pub scenario: String,
    pub adjusted_margin: i64,
    pub adjusted_tam: Decimal,
    /// Clamped to 1..=10
    pub adjusted_score: Decimal,
    pub impact: Impact,
}

/// One month of the adoption S-curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenetrationPoint {
    pub month: u32,
    /// Percent of TAM
    pub penetration: Decimal,
    pub revenue: Decimal,
    pub units: u64,
}
