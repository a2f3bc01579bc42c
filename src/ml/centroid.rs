//! Prototype-based classifier using cosine similarity.

use crate::error::{Result, UmbraError};

use super::classifier::Classifier;
use super::vectorizer::FeatureVector;

/// Prototype-based classifier.
///
/// Stores the training feature vectors grouped by label and predicts the
/// label whose prototypes have the highest average cosine similarity to the
/// query vector. Labels are kept in first-seen order so ties break
/// deterministically.
#[derive(Debug)]
pub struct CentroidClassifier {
    /// Training data: label -> feature vectors, in first-seen label order.
    prototypes: Vec<(String, Vec<FeatureVector>)>,
}

impl CentroidClassifier {
    /// Fit a classifier from aligned feature vectors and label strings.
    pub fn fit(features: Vec<FeatureVector>, labels: Vec<String>) -> Result<Self> {
        if features.is_empty() {
            return Err(UmbraError::classification(
                "Training samples cannot be empty",
            ));
        }
        if features.len() != labels.len() {
            return Err(UmbraError::classification(format!(
                "Feature/label length mismatch: {} features, {} labels",
                features.len(),
                labels.len()
            )));
        }

        let mut prototypes: Vec<(String, Vec<FeatureVector>)> = Vec::new();
        for (feature, label) in features.into_iter().zip(labels) {
            match prototypes.iter_mut().find(|(l, _)| *l == label) {
                Some((_, vectors)) => vectors.push(feature),
                None => prototypes.push((label, vec![feature])),
            }
        }

        Ok(Self { prototypes })
    }

    /// Predict the label for a single feature vector.
    fn predict_one(&self, features: &FeatureVector) -> Result<String> {
        let mut best: Option<(&str, f64)> = None;

        for (label, prototypes) in &self.prototypes {
            let mut total_similarity = 0.0;
            for prototype in prototypes {
                total_similarity += Self::cosine_similarity(features, prototype);
            }
            let avg_similarity = total_similarity / prototypes.len() as f64;

            match best {
                Some((_, score)) if avg_similarity <= score => {}
                _ => best = Some((label.as_str(), avg_similarity)),
            }
        }

        best.map(|(label, _)| label.to_string())
            .ok_or_else(|| UmbraError::classification("Classifier has no trained labels"))
    }

    /// Calculate cosine similarity between two vectors.
    fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            0.0
        } else {
            dot_product / (magnitude_a * magnitude_b)
        }
    }

    /// Number of distinct labels seen during fitting.
    pub fn label_count(&self) -> usize {
        self.prototypes.len()
    }
}

impl Classifier for CentroidClassifier {
    fn predict(&self, features: &[FeatureVector]) -> Result<Vec<String>> {
        features.iter().map(|row| self.predict_one(row)).collect()
    }

    fn name(&self) -> &str {
        "centroid"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;
    use crate::ml::tfidf::TfIdfVectorizer;
    use crate::ml::vectorizer::Vectorizer;

    fn fit_stage(samples: &[(&str, &str)]) -> (TfIdfVectorizer, CentroidClassifier) {
        let texts: Vec<String> = samples.iter().map(|(t, _)| t.to_string()).collect();
        let labels: Vec<String> = samples.iter().map(|(_, l)| l.to_string()).collect();

        let analyzer = Arc::new(StandardAnalyzer::new());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&texts).unwrap();
        let features = vectorizer.transform(&texts).unwrap();
        let classifier = CentroidClassifier::fit(features, labels).unwrap();
        (vectorizer, classifier)
    }

    #[test]
    fn test_centroid_classifier() {
        let (vectorizer, classifier) = fit_stage(&[
            ("hurry offer ends soon", "Dark"),
            ("only two left in stock", "Dark"),
            ("add item to cart", "Not Dark"),
            ("view shipping details", "Not Dark"),
        ]);

        let query = vectorizer
            .transform(&["hurry offer ends soon".to_string()])
            .unwrap();
        let predictions = classifier.predict(&query).unwrap();
        assert_eq!(predictions, vec!["Dark".to_string()]);

        let query = vectorizer
            .transform(&["add item to cart".to_string()])
            .unwrap();
        let predictions = classifier.predict(&query).unwrap();
        assert_eq!(predictions, vec!["Not Dark".to_string()]);
    }

    #[test]
    fn test_one_prediction_per_row() {
        let (vectorizer, classifier) = fit_stage(&[
            ("countdown timer running", "Urgency"),
            ("hidden cost at checkout", "Sneaking"),
        ]);

        let queries = vectorizer
            .transform(&[
                "countdown timer running".to_string(),
                "hidden cost at checkout".to_string(),
            ])
            .unwrap();
        let predictions = classifier.predict(&queries).unwrap();
        assert_eq!(
            predictions,
            vec!["Urgency".to_string(), "Sneaking".to_string()]
        );
    }

    #[test]
    fn test_empty_training_fails() {
        let result = CentroidClassifier::fit(Vec::new(), Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_length_mismatch_fails() {
        let result = CentroidClassifier::fit(vec![vec![1.0]], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_label_count() {
        let (_, classifier) = fit_stage(&[
            ("a b c", "Dark"),
            ("d e f", "Dark"),
            ("g h i", "Not Dark"),
        ]);
        assert_eq!(classifier.label_count(), 2);
    }
}
