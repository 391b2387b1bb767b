//! Offline opportunity generator
//!
//! Produces a fixed set of templated opportunities for any category so the
//! financial pipeline can run without the research model.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{AnalysisInput, EaseOfEntry, MarketOpportunity, OpportunityError, OpportunitySource};
use crate::finance::calculate_gross_margin;

struct Template {
    name: &'static str,
    description: &'static str,
    pain_points: [&'static str; 3],
    key_features: [&'static str; 3],
    tam: Decimal,
    estimated_cost: Decimal,
    suggested_price: Decimal,
    competitor_count: u32,
    ease_of_entry: EaseOfEntry,
    overall_score: Decimal,
}

const TEMPLATES: [Template; 4] = [
    Template {
        name: "Smart {} Controller",
        description: "IoT-enabled controller for {} with app integration",
        pain_points: ["Complex setup", "No remote control", "Limited automation"],
        key_features: ["Mobile app control", "Voice assistant integration", "Scheduling"],
        tam: dec!(150000000),
        estimated_cost: dec!(25),
        suggested_price: dec!(49.99),
        competitor_count: 8,
        ease_of_entry: EaseOfEntry::Medium,
        overall_score: dec!(9),
    },
    Template {
        name: "Eco-Friendly {} Set",
        description: "Sustainable {} made from recycled materials",
        pain_points: ["Environmental concerns", "Poor durability", "High cost"],
        key_features: [
            "100% recycled materials",
            "Carbon neutral shipping",
            "Lifetime warranty",
        ],
        tam: dec!(85000000),
        estimated_cost: dec!(18),
        suggested_price: dec!(34.99),
        competitor_count: 5,
        ease_of_entry: EaseOfEntry::Low,
        overall_score: dec!(7),
    },
    Template {
        name: "Compact {} Solution",
        description: "Space-saving {} designed for small spaces",
        pain_points: ["Takes up too much space", "Not portable", "Limited storage"],
        key_features: ["Foldable design", "Lightweight materials", "Integrated storage"],
        tam: dec!(120000000),
        estimated_cost: dec!(22),
        suggested_price: dec!(39.99),
        competitor_count: 12,
        ease_of_entry: EaseOfEntry::High,
        overall_score: dec!(8),
    },
    Template {
        name: "Professional {} Kit",
        description: "Commercial-grade {} for professional use",
        pain_points: [
            "Not durable enough",
            "Missing professional features",
            "Poor warranty",
        ],
        key_features: [
            "Heavy-duty construction",
            "Professional certifications",
            "5-year warranty",
        ],
        tam: dec!(95000000),
        estimated_cost: dec!(35),
        suggested_price: dec!(79.99),
        competitor_count: 6,
        ease_of_entry: EaseOfEntry::Medium,
        overall_score: dec!(8),
    },
];

/// Deterministic mock opportunity source
#[derive(Debug, Clone, Default)]
pub struct MockSource;

impl MockSource {
    /// Create a new mock source
    pub fn new() -> Self {
        Self
    }

    fn build(category: &str) -> Result<Vec<MarketOpportunity>, OpportunityError> {
        TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, t)| -> Result<MarketOpportunity, OpportunityError> {
                let margin = calculate_gross_margin(t.suggested_price, t.estimated_cost)?;
                Ok(MarketOpportunity {
                    id: format!("opp-{}", index + 1),
                    name: t.name.replace("{}", category),
                    category: category.to_string(),
                    description: t.description.replace("{}", category),
                    tam: t.tam,
                    estimated_cost: t.estimated_cost,
                    suggested_price: t.suggested_price,
                    margin: Decimal::from(margin),
                    competitor_count: t.competitor_count,
                    ease_of_entry: t.ease_of_entry,
                    overall_score: t.overall_score,
                    pain_points: t.pain_points.iter().map(|s| s.to_string()).collect(),
                    key_features: t.key_features.iter().map(|s| s.to_string()).collect(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl OpportunitySource for MockSource {
    async fn fetch(&self, input: &AnalysisInput) -> Result<Vec<MarketOpportunity>, OpportunityError> {
        input.validate()?;
        let opportunities = Self::build(input.category.trim())?;
        tracing::info!(
            category = %input.category,
            count = opportunities.len(),
            "Generated mock opportunities"
        );
        Ok(opportunities)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_opportunities_for_category() {
        let opps = MockSource::new()
            .fetch(&AnalysisInput::new("Garden"))
            .await
            .unwrap();

        assert_eq!(opps.len(), 4);
        assert_eq!(opps[0].id, "opp-1");
        assert_eq!(opps[0].name, "Smart Garden Controller");
        assert_eq!(opps[3].description, "Commercial-grade Garden for professional use");
        // (49.99 - 25) / 49.99 rounds to 50
        assert_eq!(opps[0].margin, dec!(50));
        assert!(opps.iter().all(|o| o.validate().is_ok()));
        assert!(opps
            .iter()
            .all(|o| o.overall_score >= dec!(7) && o.overall_score <= dec!(10)));
    }

    #[tokio::test]
    async fn test_mock_rejects_invalid_input() {
        let result = MockSource::new().fetch(&AnalysisInput::new("")).await;
        assert!(matches!(result, Err(OpportunityError::InvalidInput(_))));
    }
}
