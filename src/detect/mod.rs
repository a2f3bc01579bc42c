//! Dark pattern detection core.
//!
//! This module implements the two-stage classification-and-aggregation
//! pipeline:
//!
//! 1. **Presence stage**: each fragment is classified as manipulative
//!    (`"Dark"`) or benign (`"Not Dark"`).
//! 2. **Category stage**: fragments flagged as manipulative are assigned one
//!    of the seven manipulation categories.
//! 3. **Aggregation**: the complete label sequence is folded into per-category
//!    counts, a transparency score, a risk level, and the list of detected
//!    patterns.
//!
//! # Architecture
//!
//! - [`Label`] / [`PatternCategory`]: the closed label space shared by the
//!   classifier contract and the aggregator
//! - [`DetectorContext`]: the four model capabilities, loaded once and passed
//!   explicitly
//! - [`ClassificationPipeline`]: per-fragment two-stage classification
//! - [`Aggregator`]: deterministic report construction
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use umbra::analysis::StandardAnalyzer;
//! use umbra::detect::{Aggregator, ClassificationPipeline, DetectorContext, PipelineConfig};
//! use umbra::ml::load_training_data;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let presence = load_training_data("presence.json")?;
//! let category = load_training_data("category.json")?;
//! let analyzer = Arc::new(StandardAnalyzer::new());
//! let context = Arc::new(DetectorContext::train(&presence, &category, analyzer)?);
//!
//! let pipeline = ClassificationPipeline::new(context, PipelineConfig::default())?;
//! let fragments = vec!["Only 2 left!".to_string(), "Add to cart".to_string()];
//! let labels = pipeline.classify(&fragments)?;
//!
//! let report = Aggregator::default().aggregate(&fragments, &labels)?;
//! println!("{}", report.transparency_score);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod context;
pub mod label;
pub mod pipeline;

pub use aggregate::{AggregateReport, Aggregator, DetectedPattern, RiskLevel, ScoringConfig};
pub use context::DetectorContext;
pub use label::{Label, PatternCategory};
pub use pipeline::{ClassificationPipeline, PipelineConfig};
