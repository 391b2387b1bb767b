//! JSON file opportunity source
//!
//! Reads the research model's saved response. Accepts either a bare array of
//! opportunities or a report object carrying an `opportunities` array.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use super::{AnalysisInput, MarketOpportunity, OpportunityError, OpportunitySource};

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<MarketOpportunity>),
    Report { opportunities: Vec<MarketOpportunity> },
}

/// Loads opportunities from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse and validate opportunity JSON
    pub fn parse(content: &str) -> Result<Vec<MarketOpportunity>, OpportunityError> {
        let mut opportunities = match serde_json::from_str::<Payload>(content)? {
            Payload::List(list) => list,
            Payload::Report { opportunities } => opportunities,
        };

        for (index, opp) in opportunities.iter_mut().enumerate() {
            if opp.id.is_empty() {
                opp.id = format!("opp-{}", index + 1);
            }
            opp.validate()?;
        }

        Ok(opportunities)
    }
}

#[async_trait]
impl OpportunitySource for JsonFileSource {
    async fn fetch(&self, input: &AnalysisInput) -> Result<Vec<MarketOpportunity>, OpportunityError> {
        input.validate_filter()?;
        let content = tokio::fs::read_to_string(&self.path).await?;
        let mut opportunities = Self::parse(&content)?;

        // Empty category means "everything in the file"
        let category = input.category.trim();
        if !category.is_empty() {
            opportunities.retain(|o| o.category.eq_ignore_ascii_case(category));
        }

        tracing::info!(
            path = %self.path.display(),
            count = opportunities.len(),
            "Loaded opportunities"
        );
        Ok(opportunities)
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}
