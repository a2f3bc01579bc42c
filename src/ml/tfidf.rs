//! TF-IDF vectorizer for text feature extraction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

use super::vectorizer::{FeatureVector, Vectorizer};

/// TF-IDF vectorizer for text feature extraction.
pub struct TfIdfVectorizer {
    /// Vocabulary: word -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency for each word.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut vocabulary = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        // Build vocabulary and count document frequencies
        for doc in documents {
            let tokens = Self::tokenize_with_analyzer(doc, &self.analyzer)?;
            let unique_tokens: std::collections::HashSet<_> = tokens.into_iter().collect();

            for token in unique_tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token, idx);
                }
            }
        }

        // Calculate IDF for each term
        let mut idf = vec![0.0; vocabulary.len()];
        for (word, idx) in &vocabulary {
            let df = document_frequency.get(word).unwrap_or(&0);
            // IDF = log((N + 1) / (df + 1)) + 1
            idf[*idx] = ((self.n_documents as f64 + 1.0) / (*df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a single document into a TF-IDF feature vector.
    fn transform_one(&self, document: &str) -> Result<FeatureVector> {
        let tokens = Self::tokenize_with_analyzer(document, &self.analyzer)?;
        let mut tf = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Tokenize a document using the provided analyzer.
    fn tokenize_with_analyzer(text: &str, analyzer: &Arc<dyn Analyzer>) -> Result<Vec<String>> {
        let tokens: Vec<String> = analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn transform(&self, texts: &[String]) -> Result<Vec<FeatureVector>> {
        texts.iter().map(|text| self.transform_one(text)).collect()
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::StandardAnalyzer;

    #[test]
    fn test_tfidf_vectorizer() {
        let documents = vec![
            "hurry offer ends soon".to_string(),
            "only 2 left in stock".to_string(),
            "add to cart".to_string(),
        ];

        let analyzer = Arc::new(StandardAnalyzer::new());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents).unwrap();
        assert!(vectorizer.vocabulary_size() > 0);

        let features = vectorizer
            .transform(&["hurry to cart".to_string()])
            .unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].len(), vectorizer.vocabulary_size());
    }

    #[test]
    fn test_transform_batch_order() {
        let documents = vec!["limited offer".to_string(), "sign in".to_string()];

        let analyzer = Arc::new(StandardAnalyzer::new());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents).unwrap();

        let features = vectorizer.transform(&documents).unwrap();
        assert_eq!(features.len(), 2);
        // Each row matches its own single-document transform
        for (text, row) in documents.iter().zip(&features) {
            let single = vectorizer.transform(std::slice::from_ref(text)).unwrap();
            assert_eq!(&single[0], row);
        }
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let documents = vec!["hurry offer".to_string()];

        let analyzer = Arc::new(StandardAnalyzer::new());
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents).unwrap();

        let features = vectorizer
            .transform(&["completely unrelated".to_string()])
            .unwrap();
        assert!(features[0].iter().all(|&v| v == 0.0));
    }
}
