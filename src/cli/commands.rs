//! Command implementations for the Umbra CLI.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::StandardAnalyzer;
use crate::cli::args::*;
use crate::cli::output::output_report;
use crate::detect::{
    Aggregator, ClassificationPipeline, DetectorContext, PipelineConfig, ScoringConfig,
};
use crate::error::Result;
use crate::ml::load_training_data;

/// Execute a CLI command.
pub fn execute_command(args: UmbraArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
    }
}

/// Classify a batch of fragments and print the transparency report.
fn analyze(args: AnalyzeArgs, cli_args: &UmbraArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!(
            "Training presence stage from: {}",
            args.presence_data.display()
        );
        println!(
            "Training category stage from: {}",
            args.category_data.display()
        );
    }

    // Models are built once, then shared read-only by the pipeline.
    let presence_samples = load_training_data(&args.presence_data)?;
    let category_samples = load_training_data(&args.category_data)?;
    let analyzer = Arc::new(StandardAnalyzer::new());
    let context = Arc::new(DetectorContext::train(
        &presence_samples,
        &category_samples,
        analyzer,
    )?);

    let fragments = read_fragments(args.input.as_deref())?;
    if cli_args.verbosity() > 1 {
        println!("Classifying {} fragments", fragments.len());
    }

    let pipeline = ClassificationPipeline::new(
        context,
        PipelineConfig {
            parallel: args.parallel,
            thread_pool_size: args.threads,
        },
    )?;
    let labels = pipeline.classify(&fragments)?;

    let aggregator = Aggregator::new(ScoringConfig {
        pattern_penalty: args.pattern_penalty,
        low_risk_threshold: args.low_risk_threshold,
        medium_risk_threshold: args.medium_risk_threshold,
    });
    let report = aggregator.aggregate(&fragments, &labels)?;

    output_report(&report, cli_args)
}

/// Read the fragment batch: a JSON array of strings, from a file or stdin.
///
/// Anything other than an array of strings is rejected here, before any
/// classification runs.
fn read_fragments(path: Option<&Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let fragments: Vec<String> = serde_json::from_str(&content)?;
    Ok(fragments)
}
