//! Vectorizer capability trait.

use crate::error::Result;

/// A fixed-length numeric feature representation of one text.
pub type FeatureVector = Vec<f64>;

/// Vectorizer trait.
///
/// A vectorizer converts raw texts into fixed-length feature vectors
/// consumable by its paired classifier. Implementations are pre-fit and
/// read-only: `transform` must be pure so one instance can serve many
/// concurrent requests.
pub trait Vectorizer: Send + Sync {
    /// Transform a batch of texts into feature vectors, one per input text,
    /// in input order.
    fn transform(&self, texts: &[String]) -> Result<Vec<FeatureVector>>;

    /// Get the name of this vectorizer for debugging and logging.
    fn name(&self) -> &str;
}
