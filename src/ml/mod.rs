//! Machine learning capabilities for dark pattern classification.
//!
//! This module provides the two capability contracts the detection pipeline
//! is built on, plus concrete implementations:
//!
//! - `Vectorizer` trait: batch text-to-features transformation
//! - `Classifier` trait: batch features-to-label prediction
//! - `TfIdfVectorizer`: TF-IDF feature extraction
//! - `CentroidClassifier`: prototype-based classification using cosine similarity
//! - `TrainingSample`: labeled training data structure
//!
//! Both capabilities are pure and side-effect-free once constructed, so a
//! single instance can be shared read-only across concurrent requests.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use umbra::analysis::StandardAnalyzer;
//! use umbra::ml::{CentroidClassifier, Classifier, TfIdfVectorizer, TrainingSample, Vectorizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let samples = vec![
//!     TrainingSample {
//!         text: "hurry offer ends soon".to_string(),
//!         label: "Dark".to_string(),
//!     },
//!     TrainingSample {
//!         text: "add to cart".to_string(),
//!         label: "Not Dark".to_string(),
//!     },
//! ];
//!
//! let analyzer = Arc::new(StandardAnalyzer::new());
//! let texts: Vec<String> = samples.iter().map(|s| s.text.clone()).collect();
//! let labels: Vec<String> = samples.iter().map(|s| s.label.clone()).collect();
//!
//! let mut vectorizer = TfIdfVectorizer::new(analyzer);
//! vectorizer.fit(&texts)?;
//! let features = vectorizer.transform(&texts)?;
//! let classifier = CentroidClassifier::fit(features, labels)?;
//!
//! let query = vectorizer.transform(&["hurry up".to_string()])?;
//! let predictions = classifier.predict(&query)?;
//! assert_eq!(predictions.len(), 1);
//! # Ok(())
//! # }
//! ```

mod centroid;
mod classifier;
mod tfidf;
mod training;
mod vectorizer;

// Public exports
pub use centroid::CentroidClassifier;
pub use classifier::Classifier;
pub use tfidf::TfIdfVectorizer;
pub use training::{TrainingSample, load_training_data};
pub use vectorizer::{FeatureVector, Vectorizer};
