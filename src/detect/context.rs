//! The detector context: the four model capabilities behind the pipeline.
//!
//! The two vectorizer/classifier pairs are loaded (or trained) once at
//! startup and shared read-only across requests. The context is passed
//! explicitly into the pipeline rather than held as ambient global state.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::detect::label::{self, PatternCategory};
use crate::error::{Result, UmbraError};
use crate::ml::{CentroidClassifier, Classifier, TfIdfVectorizer, TrainingSample, Vectorizer};

/// The four capabilities the classification pipeline depends on.
///
/// Construct once at process start; cheap to share via `Arc` and safe for
/// unsynchronized concurrent reads.
pub struct DetectorContext {
    presence_vectorizer: Arc<dyn Vectorizer>,
    presence_classifier: Arc<dyn Classifier>,
    category_vectorizer: Arc<dyn Vectorizer>,
    category_classifier: Arc<dyn Classifier>,
}

impl DetectorContext {
    /// Create a context from four externally provided capabilities.
    pub fn new(
        presence_vectorizer: Arc<dyn Vectorizer>,
        presence_classifier: Arc<dyn Classifier>,
        category_vectorizer: Arc<dyn Vectorizer>,
        category_classifier: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            presence_vectorizer,
            presence_classifier,
            category_vectorizer,
            category_classifier,
        }
    }

    /// Train both stages from labeled samples.
    ///
    /// Presence samples must be labeled `"Dark"` or `"Not Dark"`; category
    /// samples must carry one of the seven category wire strings. Any other
    /// label fails fast here rather than surfacing later as a bad prediction.
    pub fn train(
        presence_samples: &[TrainingSample],
        category_samples: &[TrainingSample],
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        for sample in presence_samples {
            if sample.label != label::DARK && sample.label != label::NOT_DARK {
                return Err(UmbraError::unknown_label(format!(
                    "presence training label: {}",
                    sample.label
                )));
            }
        }
        for sample in category_samples {
            if PatternCategory::parse(&sample.label).is_none() {
                return Err(UmbraError::unknown_label(format!(
                    "category training label: {}",
                    sample.label
                )));
            }
        }

        let (presence_vectorizer, presence_classifier) =
            fit_stage(presence_samples, Arc::clone(&analyzer))?;
        let (category_vectorizer, category_classifier) = fit_stage(category_samples, analyzer)?;

        Ok(Self {
            presence_vectorizer: Arc::new(presence_vectorizer),
            presence_classifier: Arc::new(presence_classifier),
            category_vectorizer: Arc::new(category_vectorizer),
            category_classifier: Arc::new(category_classifier),
        })
    }

    /// The presence-stage vectorizer.
    pub fn presence_vectorizer(&self) -> &dyn Vectorizer {
        self.presence_vectorizer.as_ref()
    }

    /// The presence-stage classifier.
    pub fn presence_classifier(&self) -> &dyn Classifier {
        self.presence_classifier.as_ref()
    }

    /// The category-stage vectorizer.
    pub fn category_vectorizer(&self) -> &dyn Vectorizer {
        self.category_vectorizer.as_ref()
    }

    /// The category-stage classifier.
    pub fn category_classifier(&self) -> &dyn Classifier {
        self.category_classifier.as_ref()
    }
}

impl std::fmt::Debug for DetectorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorContext")
            .field("presence_vectorizer", &self.presence_vectorizer.name())
            .field("presence_classifier", &self.presence_classifier.name())
            .field("category_vectorizer", &self.category_vectorizer.name())
            .field("category_classifier", &self.category_classifier.name())
            .finish()
    }
}

/// Fit one classification stage: a TF-IDF vectorizer over the sample texts,
/// then a centroid classifier over the transformed features.
fn fit_stage(
    samples: &[TrainingSample],
    analyzer: Arc<dyn Analyzer>,
) -> Result<(TfIdfVectorizer, CentroidClassifier)> {
    let texts: Vec<String> = samples.iter().map(|s| s.text.clone()).collect();
    let labels: Vec<String> = samples.iter().map(|s| s.label.clone()).collect();

    let mut vectorizer = TfIdfVectorizer::new(analyzer);
    vectorizer.fit(&texts)?;
    let features = vectorizer.transform(&texts)?;
    let classifier = CentroidClassifier::fit(features, labels)?;

    Ok((vectorizer, classifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    fn sample(text: &str, label: &str) -> TrainingSample {
        TrainingSample {
            text: text.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_train_builds_both_stages() {
        let presence = vec![
            sample("hurry offer ends soon", "Dark"),
            sample("add to cart", "Not Dark"),
        ];
        let category = vec![
            sample("hurry offer ends soon", "Urgency"),
            sample("only two left", "Scarcity"),
        ];

        let context =
            DetectorContext::train(&presence, &category, Arc::new(StandardAnalyzer::new()))
                .unwrap();
        assert_eq!(context.presence_vectorizer().name(), "tfidf");
        assert_eq!(context.category_classifier().name(), "centroid");
    }

    #[test]
    fn test_train_rejects_bad_presence_label() {
        let presence = vec![sample("hurry", "Maybe Dark")];
        let category = vec![sample("hurry", "Urgency")];

        let result =
            DetectorContext::train(&presence, &category, Arc::new(StandardAnalyzer::new()));
        assert!(matches!(result, Err(UmbraError::UnknownLabel(_))));
    }

    #[test]
    fn test_train_rejects_bad_category_label() {
        let presence = vec![sample("hurry", "Dark")];
        let category = vec![sample("hurry", "Pressure")];

        let result =
            DetectorContext::train(&presence, &category, Arc::new(StandardAnalyzer::new()));
        assert!(matches!(result, Err(UmbraError::UnknownLabel(_))));
    }
}
