//! The two-stage classification pipeline.
//!
//! Each fragment is handled independently: the presence stage decides whether
//! it is manipulative at all, and only flagged fragments reach the category
//! stage. Fragments have no data dependency on each other, so the pipeline
//! can fan out over a thread pool; output stays aligned with input order
//! either way.

use std::sync::Arc;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::detect::context::DetectorContext;
use crate::detect::label::{self, Label, PatternCategory};
use crate::error::{Result, UmbraError};

/// Configuration for the classification pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Classify fragments in parallel.
    pub parallel: bool,
    /// Thread pool size for parallel classification. Defaults to the number
    /// of logical CPUs.
    pub thread_pool_size: Option<usize>,
}

/// Classifies an ordered sequence of fragments into an order-aligned sequence
/// of labels.
pub struct ClassificationPipeline {
    /// The model capabilities, shared read-only.
    context: Arc<DetectorContext>,
    /// Thread pool for parallel classification, if enabled.
    thread_pool: Option<Arc<ThreadPool>>,
}

impl ClassificationPipeline {
    /// Create a new pipeline over the given context.
    pub fn new(context: Arc<DetectorContext>, config: PipelineConfig) -> Result<Self> {
        let thread_pool = if config.parallel {
            let size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
            let pool = ThreadPoolBuilder::new()
                .num_threads(size)
                .thread_name(|i| format!("umbra-classify-{i}"))
                .build()
                .map_err(|e| UmbraError::internal(format!("Failed to create thread pool: {e}")))?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Self {
            context,
            thread_pool,
        })
    }

    /// Classify a batch of fragments, one label per fragment, in input order.
    ///
    /// The batch is atomic: any capability failure or contract violation
    /// fails the whole call, never a partially labeled result.
    pub fn classify(&self, fragments: &[String]) -> Result<Vec<Label>> {
        match &self.thread_pool {
            Some(pool) => pool.install(|| {
                fragments
                    .par_iter()
                    .map(|fragment| self.classify_fragment(fragment))
                    .collect()
            }),
            None => fragments
                .iter()
                .map(|fragment| self.classify_fragment(fragment))
                .collect(),
        }
    }

    /// Classify a single fragment through both stages.
    pub fn classify_fragment(&self, text: &str) -> Result<Label> {
        let input = [text.to_owned()];

        let features = self.context.presence_vectorizer().transform(&input)?;
        let features = expect_single(features, "presence vectorizer output")?;
        let predictions = self
            .context
            .presence_classifier()
            .predict(std::slice::from_ref(&features))?;
        // The prediction comes back as a one-element container; unwrap the
        // decision value itself before comparing.
        let decision = expect_single(predictions, "presence classifier output")?;

        match decision.as_str() {
            label::DARK => {
                let features = self.context.category_vectorizer().transform(&input)?;
                let features = expect_single(features, "category vectorizer output")?;
                let predictions = self
                    .context
                    .category_classifier()
                    .predict(std::slice::from_ref(&features))?;
                let category = expect_single(predictions, "category classifier output")?;

                PatternCategory::parse(&category)
                    .map(Label::Pattern)
                    .ok_or_else(|| UmbraError::UnknownLabel(category))
            }
            label::NOT_DARK => Ok(Label::NotDark),
            _ => Err(UmbraError::UnknownLabel(decision)),
        }
    }
}

impl std::fmt::Debug for ClassificationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationPipeline")
            .field("context", &self.context)
            .field("parallel", &self.thread_pool.is_some())
            .finish()
    }
}

/// Unwrap a container that must hold exactly one element.
///
/// Capabilities return collection-wrapped scalars for single-row calls; an
/// empty or multi-element container is a contract violation, not something to
/// truthiness-check around.
fn expect_single<T>(values: Vec<T>, what: &str) -> Result<T> {
    let count = values.len();
    let mut iter = values.into_iter();
    match (iter.next(), iter.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(UmbraError::contract(format!(
            "{what}: expected exactly one element, got {count}"
        ))),
    }
}
