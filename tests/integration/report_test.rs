//! Integration tests for report assembly

use productpilot::config::{AssumptionsConfig, Config};
use productpilot::opportunity::{
    select_opportunities, AnalysisInput, JsonFileSource, MockSource, OpportunitySource,
    SelectionOptions,
};
use productpilot::report::FinancialReport;
use std::io::Write;

#[tokio::test]
async fn test_reports_for_mock_category() {
    let opps = MockSource::new()
        .fetch(&AnalysisInput::new("Home Fitness"))
        .await
        .unwrap();

    let assumptions = AssumptionsConfig::default();
    for opp in &opps {
        let report = FinancialReport::build(opp, &assumptions).unwrap();
        assert_eq!(report.opportunity.id, opp.id);
        assert_eq!(report.projections.len(), assumptions.years as usize);
        assert_eq!(report.timeline.len(), assumptions.ramp_up_months as usize);
    }
}

#[tokio::test]
async fn test_report_serializes_to_camel_case_json() {
    let opps = MockSource::new()
        .fetch(&AnalysisInput::new("Garden"))
        .await
        .unwrap();
    let report = FinancialReport::build(&opps[1], &AssumptionsConfig::default()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("costBreakdown").is_some());
    assert!(json["roi"].get("paybackPeriodMonths").is_some());
    assert_eq!(json["opportunity"]["name"], "Eco-Friendly Garden Set");
}

#[tokio::test]
async fn test_file_source_with_selection() {
    let json = r#"[
        {"name": "A", "category": "Pets", "tam": 5000000, "estimatedCost": 10,
         "suggestedPrice": 30, "margin": 67, "competitorCount": 3,
         "easeOfEntry": "High", "overallScore": 6,
         "painPoints": ["1", "2", "3"], "keyFeatures": ["1", "2", "3"]},
        {"name": "B", "category": "Pets", "tam": 5000000, "estimatedCost": 10,
         "suggestedPrice": 30, "margin": 67, "competitorCount": 3,
         "easeOfEntry": "Low", "overallScore": 9,
         "painPoints": ["1", "2", "3"], "keyFeatures": ["1", "2", "3"]},
        {"name": "C", "category": "Pets", "tam": 500000, "estimatedCost": 10,
         "suggestedPrice": 30, "margin": 67,
         "easeOfEntry": "Medium", "overallScore": 10}
    ]"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config: Config = toml::from_str("[analysis]\nmin_confidence = 90\nmax_opportunities = 1\n")
        .unwrap();
    let opps = JsonFileSource::new(file.path())
        .fetch(&AnalysisInput::new("Pets"))
        .await
        .unwrap();
    let selected = select_opportunities(opps, &config.analysis);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].name, "B");

    let all = select_opportunities(
        JsonFileSource::parse(json).unwrap(),
        &SelectionOptions::default(),
    );
    assert_eq!(all.len(), 3);
}
