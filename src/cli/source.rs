//! Shared opportunity source arguments

use clap::Args;
use std::path::PathBuf;

use crate::opportunity::{
    AnalysisInput, JsonFileSource, MarketOpportunity, MockSource, OpportunitySource,
};

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// JSON file with the research model's opportunities (mock data if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Product category to analyze
    #[arg(long, default_value = "")]
    pub category: String,

    /// Extra research keywords
    #[arg(long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

impl SourceArgs {
    /// Source selected by the arguments
    pub fn source(&self) -> Box<dyn OpportunitySource> {
        match &self.input {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(MockSource::new()),
        }
    }

    /// Analysis request described by the arguments
    pub fn input(&self) -> AnalysisInput {
        AnalysisInput::new(self.category.clone()).with_keywords(self.keywords.clone())
    }

    /// Fetch opportunities from the selected source
    pub async fn load(&self) -> anyhow::Result<Vec<MarketOpportunity>> {
        let source = self.source();
        tracing::info!(source = source.name(), category = %self.category, "Fetching opportunities");
        let opportunities = source.fetch(&self.input()).await?;
        if opportunities.is_empty() {
            tracing::warn!(category = %self.category, "No opportunities found");
        }
        Ok(opportunities)
    }
}
