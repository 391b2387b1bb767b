//! End-to-end integration tests

use productpilot::config::Config;
use productpilot::finance::Complexity;
use productpilot::opportunity::{AnalysisInput, MockSource, OpportunitySource};
use productpilot::report::FinancialReport;

#[test]
fn test_config_example_loads() {
    let toml = include_str!("../../config.toml.example");
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.assumptions.years, 3);
    assert_eq!(config.assumptions.complexity, Complexity::Medium);
    assert!(!config.assumptions.scenarios.is_empty());
}

#[tokio::test]
async fn test_pipeline_from_config() {
    let config: Config = toml::from_str(
        r#"
        [assumptions]
        years = 5
        initial_investment = 500000
        complexity = "Low"

        [[assumptions.scenarios]]
        price_change = -10
        tam_change = 25
        "#,
    )
    .unwrap();

    let opps = MockSource::new()
        .fetch(&AnalysisInput::new("Kitchen"))
        .await
        .unwrap();
    let report = FinancialReport::build(&opps[0], &config.assumptions).unwrap();

    assert_eq!(report.projections.len(), 5);
    assert_eq!(report.sensitivity.len(), 1);
    assert_eq!(report.sensitivity[0].scenario, "Price -10%, Cost 0%, TAM 25%");
    assert!(report.break_even.is_some());
    assert!(report.format_table().contains("Smart Kitchen Controller"));
}
