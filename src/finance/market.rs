//! Market sizing, revenue projection and adoption timeline

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{round_half_up, FinanceError, PenetrationPoint, RevenueProjection};
use crate::opportunity::MarketOpportunity;

/// Average unit price assumed by the penetration timeline
pub const ASSUMED_AVERAGE_PRICE: Decimal = dec!(50);

/// Penetration growth factor applied per projected year (1.5 growth damped by 0.8)
const PENETRATION_GROWTH: Decimal = dec!(1.5);
const PENETRATION_DAMPING: Decimal = dec!(0.8);

/// Steepness of the adoption S-curve
const S_CURVE_STEEPNESS: f64 = 10.0;

/// Longest projection horizon accepted by [`project_revenue`]
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Longest ramp-up accepted by [`calculate_penetration_timeline`]
pub const MAX_RAMP_UP_MONTHS: u32 = 600;

/// Total addressable market in currency units
pub fn calculate_tam(
    total_market_size: Decimal,
    target_segment_pct: Decimal,
    average_price: Decimal,
    annual_purchase_frequency: Decimal,
) -> Decimal {
    let target_market_size = total_market_size * (target_segment_pct / dec!(100));
    target_market_size * average_price * annual_purchase_frequency
}

/// Project revenue year by year
///
/// The market grows by `growth_rate` each year while penetration starts at
/// `penetration_rate` and compounds by 1.5 x 0.8 per year.
pub fn project_revenue(
    opportunity: &MarketOpportunity,
    growth_rate: Decimal,
    penetration_rate: Decimal,
    years: u32,
) -> Result<Vec<RevenueProjection>, FinanceError> {
    let price = opportunity.suggested_price;
    if price <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "suggested price must be positive, got {price}"
        )));
    }
    if opportunity.tam <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "tam must be positive, got {}",
            opportunity.tam
        )));
    }
    if penetration_rate < Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "penetration rate cannot be negative, got {penetration_rate}"
        )));
    }
    if growth_rate < -Decimal::ONE {
        return Err(FinanceError::InvalidArgument(format!(
            "growth rate cannot be below -100%, got {growth_rate}"
        )));
    }
    if years > MAX_PROJECTION_YEARS {
        return Err(FinanceError::InvalidArgument(format!(
            "projection horizon must be at most {MAX_PROJECTION_YEARS} years, got {years}"
        )));
    }

    let tam_step = Decimal::ONE + growth_rate;
    let mut adjusted_tam = opportunity.tam;
    let mut yearly_penetration = penetration_rate;
    let mut projections = Vec::with_capacity(years as usize);

    for year in 1..=years {
        if year > 1 {
            adjusted_tam = adjusted_tam
                .checked_mul(tam_step)
                .ok_or(FinanceError::Overflow("market growth"))?;
            yearly_penetration = yearly_penetration
                .checked_mul(PENETRATION_GROWTH * PENETRATION_DAMPING)
                .ok_or(FinanceError::Overflow("market penetration"))?;
        }

        let raw_units = adjusted_tam
            .checked_div(price)
            .and_then(|units| units.checked_mul(yearly_penetration))
            .ok_or(FinanceError::Overflow("projected units"))?;
        let projected_units = round_half_up(raw_units)
            .to_u64()
            .ok_or(FinanceError::Overflow("projected units"))?;
        let projected_revenue = Decimal::from(projected_units)
            .checked_mul(price)
            .ok_or(FinanceError::Overflow("projected revenue"))?;
        let market_penetration = yearly_penetration
            .checked_mul(dec!(100))
            .ok_or(FinanceError::Overflow("market penetration"))?;

        projections.push(RevenueProjection {
            year,
            projected_revenue,
            projected_units,
            market_penetration,
            average_selling_price: price,
        });
    }

    tracing::debug!(
        opportunity = %opportunity.id,
        years,
        "Projected revenue"
    );

    Ok(projections)
}

/// Month-by-month S-curve adoption series
///
/// Penetration follows a logistic curve centred on the middle of the ramp-up
/// period and approaches `target_penetration_pct`.
pub fn calculate_penetration_timeline(
    tam: Decimal,
    target_penetration_pct: Decimal,
    ramp_up_months: u32,
) -> Result<Vec<PenetrationPoint>, FinanceError> {
    if ramp_up_months == 0 || ramp_up_months > MAX_RAMP_UP_MONTHS {
        return Err(FinanceError::InvalidArgument(format!(
            "ramp-up period must be between 1 and {MAX_RAMP_UP_MONTHS} months, got {ramp_up_months}"
        )));
    }
    if tam <= Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "tam must be positive, got {tam}"
        )));
    }
    if target_penetration_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidArgument(format!(
            "target penetration cannot be negative, got {target_penetration_pct}"
        )));
    }

    let max_penetration = target_penetration_pct / dec!(100);
    let mut timeline = Vec::with_capacity(ramp_up_months as usize);

    for month in 1..=ramp_up_months {
        let progress = f64::from(month) / f64::from(ramp_up_months);
        let curve = 1.0 / (1.0 + (-S_CURVE_STEEPNESS * (progress - 0.5)).exp());
        let curve = Decimal::try_from(curve).map_err(|_| FinanceError::Overflow("s-curve"))?;

        let penetration = max_penetration
            .checked_mul(curve)
            .ok_or(FinanceError::Overflow("timeline penetration"))?;
        let revenue = tam
            .checked_mul(penetration)
            .ok_or(FinanceError::Overflow("timeline revenue"))?;
        let units = round_half_up(revenue / ASSUMED_AVERAGE_PRICE)
            .to_u64()
            .ok_or(FinanceError::Overflow("timeline units"))?;
        let penetration = penetration
            .checked_mul(dec!(100))
            .ok_or(FinanceError::Overflow("timeline penetration"))?;

        timeline.push(PenetrationPoint {
            month,
            penetration,
            revenue,
            units,
        });
    }

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunity::{EaseOfEntry, MarketOpportunity};

    fn opportunity(tam: Decimal, price: Decimal) -> MarketOpportunity {
        MarketOpportunity {
            id: "opp-1".to_string(),
            name: "Smart Garden Controller".to_string(),
            category: "Garden".to_string(),
            description: String::new(),
            tam,
            estimated_cost: dec!(25),
            suggested_price: price,
            margin: dec!(50),
            competitor_count: 8,
            ease_of_entry: EaseOfEntry::Medium,
            overall_score: dec!(8),
            pain_points: vec![],
            key_features: vec![],
        }
    }

    #[test]
    fn test_calculate_tam() {
        // 1M customers, 10% segment, $50, twice a year
        let tam = calculate_tam(dec!(1000000), dec!(10), dec!(50), dec!(2));
        assert_eq!(tam, dec!(10000000));
    }

    #[test]
    fn test_projection_length_and_order() {
        let projections =
            project_revenue(&opportunity(dec!(1000000), dec!(50)), dec!(0.15), dec!(0.02), 5)
                .unwrap();
        assert_eq!(projections.len(), 5);
        let years: Vec<u32> = projections.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_projection_values() {
        let projections =
            project_revenue(&opportunity(dec!(1000000), dec!(50)), dec!(0.15), dec!(0.02), 2)
                .unwrap();

        // Year 1: 1_000_000 / 50 * 0.02 = 400 units
        assert_eq!(projections[0].projected_units, 400);
        assert_eq!(projections[0].projected_revenue, dec!(20000));
        assert_eq!(projections[0].market_penetration, dec!(2));

        // Year 2: 1_150_000 / 50 * 0.024 = 552 units
        assert_eq!(projections[1].projected_units, 552);
        assert_eq!(projections[1].projected_revenue, dec!(27600));
        assert_eq!(projections[1].average_selling_price, dec!(50));
    }

    #[test]
    fn test_penetration_compounds_without_bound() {
        let projections =
            project_revenue(&opportunity(dec!(1000000), dec!(50)), dec!(0), dec!(0.02), 30)
                .unwrap();

        for pair in projections.windows(2) {
            let ratio = pair[1].market_penetration / pair[0].market_penetration;
            assert!((ratio - dec!(1.2)).abs() < dec!(0.0000001));
        }
        // 2% * 1.2^29 exceeds 100% of the market
        assert!(projections[29].market_penetration > dec!(100));
    }

    #[test]
    fn test_projection_zero_years() {
        let projections =
            project_revenue(&opportunity(dec!(1000000), dec!(50)), dec!(0.15), dec!(0.02), 0)
                .unwrap();
        assert!(projections.is_empty());
    }

    #[test]
    fn test_projection_rejects_zero_price() {
        let result = project_revenue(&opportunity(dec!(1000000), dec!(0)), dec!(0.15), dec!(0.02), 3);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));
    }

    #[test]
    fn test_timeline_midpoint_is_half_target() {
        let timeline = calculate_penetration_timeline(dec!(1000000), dec!(10), 18).unwrap();
        assert_eq!(timeline.len(), 18);
        let midpoint = &timeline[8];
        assert_eq!(midpoint.month, 9);
        assert!((midpoint.penetration - dec!(5)).abs() < dec!(0.000001));
        // 1_000_000 * 0.05 / 50
        assert_eq!(midpoint.units, 1000);
    }

    #[test]
    fn test_timeline_is_monotonic() {
        let timeline = calculate_penetration_timeline(dec!(1000000), dec!(10), 18).unwrap();
        for pair in timeline.windows(2) {
            assert!(pair[1].penetration >= pair[0].penetration);
            assert!(pair[1].revenue >= pair[0].revenue);
        }
        assert!(timeline[17].penetration < dec!(10));
        assert!(timeline[17].penetration > dec!(9.9));
    }

    #[test]
    fn test_timeline_rejects_zero_months() {
        assert!(calculate_penetration_timeline(dec!(1000000), dec!(10), 0).is_err());
    }

    #[test]
    fn test_projection_rejects_excessive_horizon() {
        let opp = opportunity(dec!(1000000), dec!(50));
        let result = project_revenue(&opp, dec!(0.15), dec!(0.02), u32::MAX);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));

        let at_limit = project_revenue(&opp, dec!(0), dec!(0.02), MAX_PROJECTION_YEARS).unwrap();
        assert_eq!(at_limit.len(), MAX_PROJECTION_YEARS as usize);
    }

    #[test]
    fn test_projection_rejects_negative_inputs() {
        let result = project_revenue(&opportunity(dec!(-1000000), dec!(50)), dec!(0.15), dec!(0.02), 3);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));

        let opp = opportunity(dec!(1000000), dec!(50));
        let result = project_revenue(&opp, dec!(0.15), dec!(-0.02), 3);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));

        let result = project_revenue(&opp, dec!(-1.5), dec!(0.02), 3);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));
    }

    #[test]
    fn test_projection_penetration_overflow() {
        // Units stay within u64 but penetration * 100 exceeds the decimal range
        let opp = opportunity(dec!(0.000000001), dec!(1));
        let result = project_revenue(&opp, dec!(0), Decimal::MAX / dec!(10), 1);
        assert!(matches!(result, Err(FinanceError::Overflow(_))));
    }

    #[test]
    fn test_projection_market_growth_overflow() {
        let opp = opportunity(Decimal::MAX / dec!(2), dec!(1));
        // Tripling the market in year 2 exceeds the decimal range
        let result = project_revenue(&opp, dec!(2), dec!(0), 2);
        assert!(matches!(result, Err(FinanceError::Overflow("market growth"))));
    }

    #[test]
    fn test_projection_units_overflow() {
        let opp = opportunity(dec!(1000000000000000000000000), dec!(1));
        let result = project_revenue(&opp, dec!(0), dec!(0.5), 1);
        assert!(matches!(result, Err(FinanceError::Overflow("projected units"))));
    }

    #[test]
    fn test_timeline_rejects_invalid_inputs() {
        let result = calculate_penetration_timeline(dec!(1000000), dec!(10), u32::MAX);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));
        let result = calculate_penetration_timeline(dec!(-1000000), dec!(10), 18);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));
        let result = calculate_penetration_timeline(dec!(1000000), dec!(-10), 18);
        assert!(matches!(result, Err(FinanceError::InvalidArgument(_))));
    }

    #[test]
    fn test_timeline_units_overflow() {
        let result = calculate_penetration_timeline(Decimal::MAX, dec!(100), 18);
        assert!(matches!(result, Err(FinanceError::Overflow("timeline units"))));
    }
}
