//! Opportunity request and error types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::finance::FinanceError;

/// Longest accepted category, in characters
pub const MAX_CATEGORY_LEN: usize = 100;

/// Opportunity handling errors
#[derive(Debug, Error)]
pub enum OpportunityError {
    /// Opportunity record failed range checks
    #[error("Invalid opportunity '{id}': {}", .problems.join("; "))]
    Invalid { id: String, problems: Vec<String> },
    /// Analysis request failed validation
    #[error("Invalid analysis input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
    /// Reading a source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Source content is not valid opportunity JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Financial calculation failed
    #[error(transparent)]
    Finance(#[from] FinanceError),
}

/// A market research request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub target_price: Option<Decimal>,
}

impl AnalysisInput {
    /// Create a request for a category
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    /// Set the keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Set the target price
    pub fn with_target_price(mut self, price: Decimal) -> Self {
        self.target_price = Some(price);
        self
    }

    /// Validate the request, collecting every error
    pub fn validate(&self) -> Result<(), OpportunityError> {
        self.check(true)
    }

    /// Validate for filtering, where an empty category selects everything
    pub fn validate_filter(&self) -> Result<(), OpportunityError> {
        self.check(false)
    }

    fn check(&self, require_category: bool) -> Result<(), OpportunityError> {
        let mut errors = Vec::new();

        if require_category && self.category.trim().is_empty() {
            errors.push("Category is required".to_string());
        }
        if self.category.chars().count() > MAX_CATEGORY_LEN {
            errors.push(format!(
                "Category must be less than {MAX_CATEGORY_LEN} characters"
            ));
        }
        if matches!(self.target_price, Some(price) if price <= Decimal::ZERO) {
            errors.push("Target price must be positive".to_string());
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            errors.push("Keywords cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(OpportunityError::InvalidInput(errors))
        }
    }
}
