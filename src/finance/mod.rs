//! Financial model module
//!
//! Closed-form cost, margin, revenue, ROI, break-even, sensitivity and
//! adoption calculations. Every function is pure: inputs are borrowed and
//! results are freshly built values.

mod costs;
mod format;
mod market;
mod roi;
mod sensitivity;
mod types;

pub use costs::{
    calculate_gross_margin, category_adjustment, estimate_production_costs, CategoryClass,
    CostFactors,
};
pub use format::{format_currency, format_large_number, format_percentage};
pub use market::{
    calculate_penetration_timeline, calculate_tam, project_revenue, ASSUMED_AVERAGE_PRICE,
    MAX_PROJECTION_YEARS, MAX_RAMP_UP_MONTHS,
};
pub use roi::{calculate_break_even, calculate_roi_analysis};
pub use sensitivity::perform_sensitivity_analysis;
pub use types::{
    BreakEvenResult, Complexity, CostBreakdown, FinanceError, Impact, PenetrationPoint,
    RevenueProjection, RoiAnalysis, SensitivityResult, SensitivityVariables,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(0, strategy)
}
