//! Classifier capability trait.

use crate::error::Result;

use super::vectorizer::FeatureVector;

/// Classifier trait.
///
/// A classifier maps feature vectors to label strings. `predict` is
/// batch-shaped: it returns exactly one label per input row, in input order,
/// so a single-row call yields a single-element container that the caller
/// must unwrap explicitly.
///
/// Implementations are pretrained and read-only; `predict` must be pure and
/// side-effect-free.
pub trait Classifier: Send + Sync {
    /// Predict a label for each feature vector in the batch.
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<String>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
