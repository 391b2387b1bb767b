//! Scenario-based sensitivity analysis

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{calculate_gross_margin, FinanceError, Impact, SensitivityResult, SensitivityVariables};
use crate::opportunity::MarketOpportunity;

/// Score shift when price moves
const PRICE_SCORE_SHIFT: Decimal = dec!(0.5);
/// Score shift when cost moves
const COST_SCORE_SHIFT: Decimal = dec!(0.3);
/// Score shift when the addressable market moves
const TAM_SCORE_SHIFT: Decimal = dec!(0.4);
/// Net shift beyond which a scenario counts as positive or negative
const IMPACT_THRESHOLD: Decimal = dec!(0.5);

const MIN_SCORE: Decimal = dec!(1);
const MAX_SCORE: Decimal = dec!(10);

/// Shift contributed by one variable; zero change contributes nothing
fn directional_shift(change: Decimal, shift_when_rising: Decimal) -> Decimal {
    if change > Decimal::ZERO {
        shift_when_rising
    } else if change < Decimal::ZERO {
        -shift_when_rising
    } else {
        Decimal::ZERO
    }
}

/// Scale `value` by a percentage change
fn apply_change(
    value: Decimal,
    change_pct: Decimal,
    what: &'static str,
) -> Result<Decimal, FinanceError> {
    value
        .checked_mul(Decimal::ONE + change_pct / dec!(100))
        .ok_or(FinanceError::Overflow(what))
}

/// Re-derive margin and score under perturbed price, cost and TAM
pub fn perform_sensitivity_analysis(
    opportunity: &MarketOpportunity,
    variables: &SensitivityVariables,
) -> Result<SensitivityResult, FinanceError> {
    let adjusted_price = apply_change(
        opportunity.suggested_price,
        variables.price_change,
        "adjusted price",
    )?;
    let adjusted_cost = apply_change(
        opportunity.estimated_cost,
        variables.cost_change,
        "adjusted cost",
    )?;
    let adjusted_tam = apply_change(opportunity.tam, variables.tam_change, "adjusted tam")?;

    let adjusted_margin = calculate_gross_margin(adjusted_price, adjusted_cost)?;

    let score_delta = directional_shift(variables.price_change, -PRICE_SCORE_SHIFT)
        + directional_shift(variables.cost_change, -COST_SCORE_SHIFT)
        + directional_shift(variables.tam_change, TAM_SCORE_SHIFT);

    let adjusted_score = opportunity
        .overall_score
        .saturating_add(score_delta)
        .clamp(MIN_SCORE, MAX_SCORE);

    let impact = if score_delta > IMPACT_THRESHOLD {
        Impact::Positive
    } else if score_delta < -IMPACT_THRESHOLD {
        Impact::Negative
    } else {
        Impact::Neutral
    };

    let scenario = format!(
        "Price {}%, Cost {}%, TAM {}%",
        variables.price_change.normalize(),
        variables.cost_change.normalize(),
        variables.tam_change.normalize()
    );

    Ok(SensitivityResult {
        scenario,
        adjusted_margin,
        adjusted_tam,
        adjusted_score,
        impact,
    })
}
