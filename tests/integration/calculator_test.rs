//! Integration tests for the financial model

use productpilot::finance::{
    calculate_break_even, calculate_gross_margin, calculate_penetration_timeline,
    calculate_roi_analysis, estimate_production_costs, perform_sensitivity_analysis,
    project_revenue, Complexity, SensitivityVariables,
};
use productpilot::opportunity::{EaseOfEntry, MarketOpportunity};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn opportunity() -> MarketOpportunity {
    MarketOpportunity {
        id: "opp-3".to_string(),
        name: "Compact Tool Solution".to_string(),
        category: "Power Tools".to_string(),
        description: "Space-saving tools designed for small spaces".to_string(),
        tam: dec!(2000000),
        estimated_cost: dec!(22),
        suggested_price: dec!(40),
        margin: dec!(45),
        competitor_count: 12,
        ease_of_entry: EaseOfEntry::High,
        overall_score: dec!(8),
        pain_points: vec![],
        key_features: vec![],
    }
}

#[test]
fn test_cost_total_matches_components_for_every_tier() {
    let prices = [dec!(0.01), dec!(9.99), dec!(49.99), dec!(1234.5678)];
    let categories = ["Smart Watches", "Home Decor", "Textile", "Automotive", "Toys"];

    for price in prices {
        for category in categories {
            for tier in [Complexity::Low, Complexity::Medium, Complexity::High] {
                let c = estimate_production_costs(price, category, tier);
                let sum = c.material_costs
                    + c.manufacturing_costs
                    + c.logistics_costs
                    + c.marketing_costs
                    + c.overhead_costs;
                assert_eq!(c.total_costs, sum, "{category} {tier:?} {price}");
            }
        }
    }
}

#[test]
fn test_margin_identity_points() {
    for price in [dec!(1), dec!(19.99), dec!(100000)] {
        assert_eq!(calculate_gross_margin(price, price).unwrap(), 0);
        assert_eq!(calculate_gross_margin(price, Decimal::ZERO).unwrap(), 100);
    }
}

#[test]
fn test_projection_feeds_roi() {
    let opp = opportunity();
    let costs = estimate_production_costs(opp.suggested_price, &opp.category, Complexity::Low);
    let projections = project_revenue(&opp, dec!(0.15), dec!(0.02), 3).unwrap();

    assert_eq!(projections.len(), 3);
    assert_eq!(projections[0].projected_units, 1000);

    // Low tier tools cost 0.74 of price: 10.4 profit per unit, 10_400 in year one
    let roi = calculate_roi_analysis(dec!(20000), &projections, &costs, dec!(0.10)).unwrap();
    assert_eq!(roi.initial_investment, dec!(20000));
    assert!(roi.net_present_value > dec!(0));
    assert_eq!(roi.payback_period_months, Some(24));
}

#[test]
fn test_break_even_reference() {
    let result = calculate_break_even(dec!(1000), dec!(5), dec!(10)).unwrap();
    assert_eq!(result.contribution_margin, dec!(5));
    assert_eq!(result.contribution_margin_ratio, dec!(0.5));
    assert_eq!(result.break_even_units, 200);
    assert_eq!(result.break_even_revenue, dec!(2000));
}

#[test]
fn test_unperturbed_sensitivity() {
    let opp = opportunity();
    let result = perform_sensitivity_analysis(&opp, &SensitivityVariables::default()).unwrap();
    assert_eq!(result.adjusted_score, opp.overall_score);
    assert_eq!(
        result.adjusted_margin,
        calculate_gross_margin(opp.suggested_price, opp.estimated_cost).unwrap()
    );
}

#[test]
fn test_timeline_shape() {
    let timeline = calculate_penetration_timeline(dec!(1000000), dec!(10), 18).unwrap();
    assert_eq!(timeline.first().map(|p| p.month), Some(1));
    assert_eq!(timeline.last().map(|p| p.month), Some(18));
    assert!((timeline[8].penetration - dec!(5)).abs() < dec!(0.000001));
    assert!(timeline
        .windows(2)
        .all(|w| w[1].penetration >= w[0].penetration));
}
