//! End-to-end detection tests: train both stages, classify a fragment batch,
//! and check the aggregate report down to the wire format.

use std::sync::Arc;

use umbra::analysis::StandardAnalyzer;
use umbra::detect::{
    Aggregator, ClassificationPipeline, DetectorContext, Label, PatternCategory, PipelineConfig,
    RiskLevel,
};
use umbra::error::Result;
use umbra::ml::TrainingSample;

fn sample(text: &str, label: &str) -> TrainingSample {
    TrainingSample {
        text: text.to_string(),
        label: label.to_string(),
    }
}

/// Training sets with disjoint vocabulary per sample, so predictions on the
/// training phrases themselves are unambiguous.
fn trained_context() -> Result<Arc<DetectorContext>> {
    let presence = vec![
        sample("Only 2 left!", "Dark"),
        sample("Hurry, offer ends soon", "Dark"),
        sample("Add to cart", "Not Dark"),
        sample("View shipping details", "Not Dark"),
    ];
    let category = vec![
        sample("Only 2 left!", "Scarcity"),
        sample("Hurry, offer ends soon", "Urgency"),
    ];

    let context = DetectorContext::train(&presence, &category, Arc::new(StandardAnalyzer::new()))?;
    Ok(Arc::new(context))
}

#[test]
fn test_worked_example() -> Result<()> {
    let context = trained_context()?;
    let pipeline = ClassificationPipeline::new(context, PipelineConfig::default())?;

    let fragments = vec![
        "Only 2 left!".to_string(),
        "Add to cart".to_string(),
        "Hurry, offer ends soon".to_string(),
    ];
    let labels = pipeline.classify(&fragments)?;
    assert_eq!(
        labels,
        vec![
            Label::Pattern(PatternCategory::Scarcity),
            Label::NotDark,
            Label::Pattern(PatternCategory::Urgency),
        ]
    );

    let report = Aggregator::default().aggregate(&fragments, &labels)?;
    assert_eq!(report.total_patterns, 2);
    assert_eq!(report.transparency_score, 90);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(report.risk_color, "#4BE680");
    assert_eq!(report.pattern_counts[&PatternCategory::Scarcity], 1);
    assert_eq!(report.pattern_counts[&PatternCategory::Urgency], 1);
    assert_eq!(report.pattern_counts[&PatternCategory::Sneaking], 0);
    assert_eq!(report.dark_patterns.len(), 2);
    assert_eq!(report.dark_patterns[0].index, 0);
    assert_eq!(report.dark_patterns[0].text, "Only 2 left!");
    assert_eq!(report.dark_patterns[1].index, 2);
    assert_eq!(report.dark_patterns[1].pattern, PatternCategory::Urgency);

    Ok(())
}

#[test]
fn test_idempotent_classification() -> Result<()> {
    let context = trained_context()?;
    let pipeline = ClassificationPipeline::new(context, PipelineConfig::default())?;
    let aggregator = Aggregator::default();

    let fragments = vec![
        "Hurry, offer ends soon".to_string(),
        "View shipping details".to_string(),
    ];

    let first = aggregator.aggregate(&fragments, &pipeline.classify(&fragments)?)?;
    let second = aggregator.aggregate(&fragments, &pipeline.classify(&fragments)?)?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_parallel_pipeline_keeps_input_order() -> Result<()> {
    let context = trained_context()?;
    let sequential =
        ClassificationPipeline::new(Arc::clone(&context), PipelineConfig::default())?;
    let parallel = ClassificationPipeline::new(
        context,
        PipelineConfig {
            parallel: true,
            thread_pool_size: Some(4),
        },
    )?;

    // Repeat the batch so the fan-out actually interleaves
    let mut fragments = Vec::new();
    for _ in 0..8 {
        fragments.push("Only 2 left!".to_string());
        fragments.push("Add to cart".to_string());
        fragments.push("Hurry, offer ends soon".to_string());
    }

    assert_eq!(
        sequential.classify(&fragments)?,
        parallel.classify(&fragments)?
    );

    Ok(())
}

#[test]
fn test_empty_batch() -> Result<()> {
    let context = trained_context()?;
    let pipeline = ClassificationPipeline::new(context, PipelineConfig::default())?;

    let labels = pipeline.classify(&[])?;
    let report = Aggregator::default().aggregate(&[], &labels)?;

    assert!(report.result.is_empty());
    assert!(report.dark_patterns.is_empty());
    assert_eq!(report.total_patterns, 0);
    assert_eq!(report.transparency_score, 100);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert_eq!(report.pattern_counts.len(), 7);

    Ok(())
}

#[test]
fn test_report_wire_format() -> Result<()> {
    let context = trained_context()?;
    let pipeline = ClassificationPipeline::new(context, PipelineConfig::default())?;

    let fragments = vec!["Only 2 left!".to_string(), "Add to cart".to_string()];
    let labels = pipeline.classify(&fragments)?;
    let report = Aggregator::default().aggregate(&fragments, &labels)?;

    let value = serde_json::to_value(&report)?;
    for field in [
        "result",
        "dark_patterns",
        "transparency_score",
        "risk_level",
        "risk_color",
        "pattern_counts",
        "total_patterns",
    ] {
        assert!(value.get(field).is_some(), "missing field: {field}");
    }

    assert_eq!(value["result"][0], "Scarcity");
    assert_eq!(value["result"][1], "Not Dark");
    assert_eq!(value["pattern_counts"].as_object().unwrap().len(), 7);

    Ok(())
}
