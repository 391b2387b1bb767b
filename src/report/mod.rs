//! Viability report module
//!
//! Runs the full financial model for one opportunity and renders the result

mod summary;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::AssumptionsConfig;
use crate::finance::{
    calculate_break_even, calculate_gross_margin, calculate_penetration_timeline,
    calculate_roi_analysis, estimate_production_costs, perform_sensitivity_analysis,
    project_revenue, BreakEvenResult, CostBreakdown, FinanceError, PenetrationPoint,
    RevenueProjection, RoiAnalysis, SensitivityResult,
};
use crate::opportunity::{calculate_confidence, MarketOpportunity};

/// Complete financial assessment of one opportunity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    /// Unique report identifier
    pub id: Uuid,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    pub opportunity: MarketOpportunity,
    /// Data-quality confidence, 0-100
    pub confidence: u8,
    /// Estimated per-unit costs at the suggested price
    pub cost_breakdown: CostBreakdown,
    /// Gross margin at the suggested price and estimated unit cost
    pub gross_margin: i64,
    pub projections: Vec<RevenueProjection>,
    pub roi: RoiAnalysis,
    /// `None` when the unit cost leaves no contribution margin
    pub break_even: Option<BreakEvenResult>,
    pub sensitivity: Vec<SensitivityResult>,
    pub timeline: Vec<PenetrationPoint>,
}

impl FinancialReport {
    /// Run every calculation for `opportunity` under `assumptions`
    pub fn build(
        opportunity: &MarketOpportunity,
        assumptions: &AssumptionsConfig,
    ) -> Result<Self, FinanceError> {
        let cost_breakdown = estimate_production_costs(
            opportunity.suggested_price,
            &opportunity.category,
            assumptions.complexity,
        );
        let gross_margin =
            calculate_gross_margin(opportunity.suggested_price, opportunity.estimated_cost)?;

        let projections = project_revenue(
            opportunity,
            assumptions.growth_rate,
            assumptions.penetration_rate,
            assumptions.years,
        )?;
        let roi = calculate_roi_analysis(
            assumptions.initial_investment,
            &projections,
            &cost_breakdown,
            assumptions.discount_rate,
        )?;

        let break_even = match calculate_break_even(
            assumptions.initial_investment,
            cost_breakdown.total_costs,
            opportunity.suggested_price,
        ) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(opportunity = %opportunity.id, error = %e, "Break-even unavailable");
                None
            }
        };

        let sensitivity = assumptions
            .scenarios
            .iter()
            .filter_map(|variables| {
                perform_sensitivity_analysis(opportunity, variables)
                    .map_err(|e| {
                        tracing::warn!(
                            opportunity = %opportunity.id,
                            ?variables,
                            error = %e,
                            "Skipping sensitivity scenario"
                        )
                    })
                    .ok()
            })
            .collect();

        let timeline = calculate_penetration_timeline(
            opportunity.tam,
            assumptions.target_penetration_pct,
            assumptions.ramp_up_months,
        )?;

        tracing::info!(
            opportunity = %opportunity.id,
            name = %opportunity.name,
            gross_margin,
            npv = %roi.net_present_value,
            "Built financial report"
        );

        Ok(Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            opportunity: opportunity.clone(),
            confidence: calculate_confidence(opportunity),
            cost_breakdown,
            gross_margin,
            projections,
            roi,
            break_even,
            sensitivity,
            timeline,
        })
    }
}
