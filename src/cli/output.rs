//! Output formatting for CLI commands.

use crate::cli::args::{OutputFormat, UmbraArgs};
use crate::detect::AggregateReport;
use crate::error::Result;

/// Print a report in the requested output format.
pub fn output_report(report: &AggregateReport, cli_args: &UmbraArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{json}");
        }
        OutputFormat::Human => print_human(report),
    }

    Ok(())
}

/// Render a report for terminal reading.
fn print_human(report: &AggregateReport) {
    println!(
        "Transparency score: {}/100 ({:?} risk)",
        report.transparency_score, report.risk_level
    );
    println!("Total patterns: {}", report.total_patterns);

    println!("Pattern counts:");
    for (category, count) in &report.pattern_counts {
        println!("  {category}: {count}");
    }

    if !report.dark_patterns.is_empty() {
        println!("Detected patterns:");
        for detected in &report.dark_patterns {
            println!(
                "  [{}] {}: {:?}",
                detected.index, detected.pattern, detected.text
            );
        }
    }
}
