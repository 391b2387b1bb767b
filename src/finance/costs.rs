//! Production cost estimation and gross margin

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{round_half_up, Complexity, CostBreakdown, FinanceError};

/// Multipliers applied to each cost component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostFactors {
    pub material: Decimal,
    pub manufacturing: Decimal,
    pub logistics: Decimal,
    pub marketing: Decimal,
    pub overhead: Decimal,
}

impl CostFactors {
    /// Neutral factors for unmatched categories
    pub const NEUTRAL: CostFactors = CostFactors {
        material: Decimal::ONE,
        manufacturing: Decimal::ONE,
        logistics: Decimal::ONE,
        marketing: Decimal::ONE,
        overhead: Decimal::ONE,
    };
}

impl Complexity {
    /// Share of the base price spent on each component for this tier
    pub fn cost_fractions(&self) -> CostFactors {
        match self {
            Complexity::Low => CostFactors {
                material: dec!(0.25),
                manufacturing: dec!(0.15),
                logistics: dec!(0.08),
                marketing: dec!(0.12),
                overhead: dec!(0.10),
            },
            Complexity::Medium => CostFactors {
                material: dec!(0.35),
                manufacturing: dec!(0.20),
                logistics: dec!(0.10),
                marketing: dec!(0.15),
                overhead: dec!(0.12),
            },
            Complexity::High => CostFactors {
                material: dec!(0.45),
                manufacturing: dec!(0.25),
                logistics: dec!(0.12),
                marketing: dec!(0.18),
                overhead: dec!(0.15),
            },
        }
    }
}

/// Product category classes with their own cost profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryClass {
    Electronics,
    HomeKitchen,
    Apparel,
    ToolsHardware,
    General,
}

/// Keyword table, checked in order; first match wins
const CATEGORY_KEYWORDS: [(CategoryClass, &[&str]); 4] = [
    (CategoryClass::Electronics, &["electronic", "tech", "smart"]),
    (CategoryClass::HomeKitchen, &["kitchen", "home", "appliance"]),
    (CategoryClass::Apparel, &["clothing", "textile", "apparel"]),
    (CategoryClass::ToolsHardware, &["tool", "hardware", "automotive"]),
];

impl CategoryClass {
    /// Classify a free-text category by case-insensitive keyword containment
    pub fn classify(category: &str) -> Self {
        let lower = category.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(class, _)| *class)
            .unwrap_or(CategoryClass::General)
    }

    /// Cost adjustment factors for this class
    pub fn factors(&self) -> CostFactors {
        match self {
            CategoryClass::Electronics => CostFactors {
                material: dec!(1.2),
                manufacturing: dec!(1.3),
                logistics: dec!(0.9),
                marketing: dec!(1.1),
                overhead: dec!(1.1),
            },
            CategoryClass::HomeKitchen => CostFactors {
                material: dec!(1.0),
                manufacturing: dec!(1.0),
                logistics: dec!(1.2),
                marketing: dec!(0.9),
                overhead: dec!(1.0),
            },
            CategoryClass::Apparel => CostFactors {
                material: dec!(0.8),
                manufacturing: dec!(0.9),
                logistics: dec!(1.1),
                marketing: dec!(1.2),
                overhead: dec!(0.9),
            },
            CategoryClass::ToolsHardware => CostFactors {
                material: dec!(1.1),
                manufacturing: dec!(1.1),
                logistics: dec!(1.3),
                marketing: dec!(0.8),
                overhead: dec!(1.0),
            },
            CategoryClass::General => CostFactors::NEUTRAL,
        }
    }
}

/// Category-specific cost adjustments. Never fails.
pub fn category_adjustment(category: &str) -> CostFactors {
    CategoryClass::classify(category).factors()
}

/// Estimate the per-unit cost breakdown for a product
pub fn estimate_production_costs(
    base_price: Decimal,
    category: &str,
    complexity: Complexity,
) -> CostBreakdown {
    let tier = complexity.cost_fractions();
    let adjust = category_adjustment(category);

    let material_costs = base_price * tier.material * adjust.material;
    let manufacturing_costs = base_price * tier.manufacturing * adjust.manufacturing;
    let logistics_costs = base_price * tier.logistics * adjust.logistics;
    let marketing_costs = base_price * tier.marketing * adjust.marketing;
    let overhead_costs = base_price * tier.overhead * adjust.overhead;

    let total_costs =
        material_costs + manufacturing_costs + logistics_costs + marketing_costs + overhead_costs;

    tracing::debug!(
        %base_price,
        category,
        ?complexity,
        %total_costs,
        "Estimated production costs"
    );

    CostBreakdown {
        material_costs,
        manufacturing_costs,
        logistics_costs,
        marketing_costs,
        overhead_costs,
        total_costs,
    }
}

/// Gross margin as a whole percentage, rounded half up
pub fn calculate_gross_margin(
    selling_price: Decimal,
    total_costs: Decimal,
) -> Result<i64, FinanceError> {
    if selling_price <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "selling price must be positive, got {selling_price}"
        )));
    }

    let ratio = selling_price
        .checked_sub(total_costs)
        .and_then(|profit| profit.checked_div(selling_price))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(FinanceError::Overflow("gross margin"))?;
    i64::try_from(round_half_up(ratio)).map_err(|_| FinanceError::Overflow("gross margin"))
}
