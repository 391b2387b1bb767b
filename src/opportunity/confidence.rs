//! Data-quality confidence scoring and opportunity selection

use rust_decimal_macros::dec;
use serde::Deserialize;

use super::MarketOpportunity;

const BASE_CONFIDENCE: u8 = 70;
const MAX_CONFIDENCE: u8 = 100;

/// Confidence (0-100) that an opportunity record is complete enough to act on
pub fn calculate_confidence(opportunity: &MarketOpportunity) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if opportunity.pain_points.len() >= 3 {
        confidence += 10;
    }
    if opportunity.key_features.len() >= 3 {
        confidence += 10;
    }
    if opportunity.competitor_count > 0 {
        confidence += 5;
    }
    if opportunity.tam > dec!(1000000) {
        confidence += 5;
    }

    confidence.min(MAX_CONFIDENCE)
}

/// Filters applied before analysis
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionOptions {
    /// Drop opportunities below this confidence
    #[serde(default)]
    pub min_confidence: Option<u8>,
    /// Keep only the highest-scoring N
    #[serde(default)]
    pub max_opportunities: Option<usize>,
}

/// Apply confidence filtering, then rank by score and truncate
pub fn select_opportunities(
    mut opportunities: Vec<MarketOpportunity>,
    options: &SelectionOptions,
) -> Vec<MarketOpportunity> {
    if let Some(min) = options.min_confidence {
        let before = opportunities.len();
        opportunities.retain(|o| calculate_confidence(o) >= min);
        tracing::debug!(
            min_confidence = min,
            dropped = before - opportunities.len(),
            "Applied confidence filter"
        );
    }

    if let Some(max) = options.max_opportunities {
        opportunities.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
        opportunities.truncate(max);
    }

    opportunities
}
