//! ROI, NPV and break-even analysis

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{BreakEvenResult, CostBreakdown, FinanceError, RevenueProjection, RoiAnalysis};

/// Analyze return on an initial investment over the projected years
///
/// `cost_breakdown.total_costs` is treated as a per-unit cost and multiplied
/// by each year's projected units.
pub fn calculate_roi_analysis(
    initial_investment: Decimal,
    projections: &[RevenueProjection],
    cost_breakdown: &CostBreakdown,
    discount_rate: Decimal,
) -> Result<RoiAnalysis, FinanceError> {
    if initial_investment <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "initial investment must be positive, got {initial_investment}"
        )));
    }
    if projections.is_empty() {
        return Err(FinanceError::EmptyProjections);
    }

    let annual_profits = projections
        .iter()
        .map(|p| {
            Decimal::from(p.projected_units)
                .checked_mul(cost_breakdown.total_costs)
                .and_then(|costs| p.projected_revenue.checked_sub(costs))
                .ok_or(FinanceError::Overflow("annual profit"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let discount_step = Decimal::ONE
        .checked_add(discount_rate)
        .ok_or(FinanceError::Overflow("discount factor"))?;
    let mut discount = Decimal::ONE;
    let mut npv = -initial_investment;
    for profit in &annual_profits {
        discount = discount
            .checked_mul(discount_step)
            .ok_or(FinanceError::Overflow("discount factor"))?;
        npv = profit
            .checked_div(discount)
            .and_then(|present| npv.checked_add(present))
            .ok_or(FinanceError::Overflow("net present value"))?;
    }

    let total_profit = annual_profits
        .iter()
        .try_fold(Decimal::ZERO, |acc, profit| acc.checked_add(*profit))
        .ok_or(FinanceError::Overflow("total profit"))?;
    let projected_roi = total_profit
        .checked_sub(initial_investment)
        .and_then(|gain| gain.checked_div(initial_investment))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(FinanceError::Overflow("projected roi"))?;

    let mut cumulative = Decimal::ZERO;
    let mut payback_period_months = None;
    for (index, profit) in annual_profits.iter().enumerate() {
        cumulative = cumulative
            .checked_add(*profit)
            .ok_or(FinanceError::Overflow("cumulative profit"))?;
        if cumulative >= initial_investment {
            payback_period_months = u32::try_from(index + 1).ok().map(|years| years * 12);
            break;
        }
    }

    let approximate_irr = total_profit
        .checked_div(Decimal::from(annual_profits.len()))
        .and_then(|average| average.checked_div(initial_investment))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(FinanceError::Overflow("approximate irr"))?;

    tracing::debug!(
        %initial_investment,
        %npv,
        %projected_roi,
        payback = ?payback_period_months,
        "Computed ROI analysis"
    );

    Ok(RoiAnalysis {
        initial_investment,
        projected_roi,
        payback_period_months,
        net_present_value: npv,
        approximate_irr,
    })
}

/// Units and revenue needed to cover fixed costs
pub fn calculate_break_even(
    fixed_costs: Decimal,
    variable_cost_per_unit: Decimal,
    selling_price_per_unit: Decimal,
) -> Result<BreakEvenResult, FinanceError> {
    if selling_price_per_unit <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "selling price must be positive, got {selling_price_per_unit}"
        )));
    }
    if fixed_costs < Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "fixed costs cannot be negative, got {fixed_costs}"
        )));
    }

    let contribution_margin = selling_price_per_unit
        .checked_sub(variable_cost_per_unit)
        .ok_or(FinanceError::Overflow("contribution margin"))?;
    if contribution_margin <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "contribution margin must be positive, got {contribution_margin}"
        )));
    }

    let contribution_margin_ratio = contribution_margin
        .checked_div(selling_price_per_unit)
        .ok_or(FinanceError::Overflow("contribution margin ratio"))?;
    let break_even_units = fixed_costs
        .checked_div(contribution_margin)
        .ok_or(FinanceError::Overflow("break-even units"))?
        .ceil()
        .to_u64()
        .ok_or(FinanceError::Overflow("break-even units"))?;
    let break_even_revenue = Decimal::from(break_even_units)
        .checked_mul(selling_price_per_unit)
        .ok_or(FinanceError::Overflow("break-even revenue"))?;

    Ok(BreakEvenResult {
        break_even_units,
        break_even_revenue,
        contribution_margin,
        contribution_margin_ratio,
    })
}
