//! Product opportunity module
//!
//! Opportunity records as returned by the research model, input validation,
//! confidence scoring and the sources that supply opportunities

mod confidence;
mod file;
mod mock;
mod types;

pub use confidence::{calculate_confidence, select_opportunities, SelectionOptions};
pub use file::JsonFileSource;
pub use mock::MockSource;
pub use types::{AnalysisInput, OpportunityError};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How hard it is to enter the market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EaseOfEntry {
    Low,
    Medium,
    High,
}

/// A product opportunity in a market category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOpportunity {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Total addressable market in USD
    pub tam: Decimal,
    /// Estimated unit cost
    pub estimated_cost: Decimal,
    /// Suggested retail price
    pub suggested_price: Decimal,
    /// Gross margin percentage
    pub margin: Decimal,
    #[serde(default)]
    pub competitor_count: u32,
    pub ease_of_entry: EaseOfEntry,
    /// Overall attractiveness, 1-10
    pub overall_score: Decimal,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
}

impl MarketOpportunity {
    /// Check field ranges, collecting every problem found
    pub fn validate(&self) -> Result<(), OpportunityError> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("name is required".to_string());
        }
        if self.tam <= Decimal::ZERO {
            problems.push(format!("tam must be positive, got {}", self.tam));
        }
        if self.estimated_cost <= Decimal::ZERO {
            problems.push(format!(
                "estimatedCost must be positive, got {}",
                self.estimated_cost
            ));
        }
        if self.suggested_price <= Decimal::ZERO {
            problems.push(format!(
                "suggestedPrice must be positive, got {}",
                self.suggested_price
            ));
        }
        if self.margin < Decimal::ZERO || self.margin > dec!(100) {
            problems.push(format!("margin must be within 0-100, got {}", self.margin));
        }
        if self.overall_score < dec!(1) || self.overall_score > dec!(10) {
            problems.push(format!(
                "overallScore must be within 1-10, got {}",
                self.overall_score
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(OpportunityError::Invalid {
                id: self.id.clone(),
                problems,
            })
        }
    }
}

/// Trait for opportunity providers
#[async_trait]
pub trait OpportunitySource: Send + Sync {
    /// Fetch opportunities for a category
    async fn fetch(&self, input: &AnalysisInput) -> Result<Vec<MarketOpportunity>, OpportunityError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> MarketOpportunity {
        MarketOpportunity {
            id: "opp-1".to_string(),
            name: "Eco-Friendly Kitchen Set".to_string(),
            category: "Kitchen".to_string(),
            description: "Sustainable kitchen set".to_string(),
            tam: dec!(85000000),
            estimated_cost: dec!(18),
            suggested_price: dec!(34.99),
            margin: dec!(49),
            competitor_count: 5,
            ease_of_entry: EaseOfEntry::Low,
            overall_score: dec!(8),
            pain_points: vec!["Poor durability".to_string()],
            key_features: vec!["Recycled materials".to_string()],
        }
    }

    #[test]
    fn test_valid_opportunity() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let mut opp = valid();
        opp.tam = dec!(0);
        opp.suggested_price = dec!(-1);
        opp.overall_score = dec!(11);

        match opp.validate() {
            Err(OpportunityError::Invalid { id, problems }) => {
                assert_eq!(id, "opp-1");
                assert_eq!(problems.len(), 3);
            }
            other => panic!("expected invalid opportunity, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "opp-7",
            "name": "Smart Pet Feeder",
            "category": "Pet Supplies",
            "tam": 150000000,
            "estimatedCost": 25,
            "suggestedPrice": 49.5,
            "margin": 49,
            "competitorCount": 8,
            "easeOfEntry": "Medium",
            "overallScore": 8,
            "painPoints": ["Complex setup"],
            "keyFeatures": ["Mobile app control"]
        }"#;

        let opp: MarketOpportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.suggested_price, dec!(49.5));
        assert_eq!(opp.ease_of_entry, EaseOfEntry::Medium);
        assert_eq!(opp.pain_points.len(), 1);
        assert!(opp.description.is_empty());
    }
}
