//! Training data types and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Labeled training sample for a classification stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Fragment text.
    pub text: String,
    /// Label string, e.g. `"Dark"`, `"Not Dark"`, or a category name.
    pub label: String,
}

/// Load training samples from a JSON file.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
    Ok(samples)
}
