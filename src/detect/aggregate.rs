//! Aggregation of per-fragment labels into a transparency report.
//!
//! Aggregation is deterministic and runs once per request, after every
//! fragment has been labeled: counts per category, a 0-100 transparency
//! score, a risk band with its display color, and the ordered list of
//! detected patterns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::detect::label::{Label, PatternCategory};
use crate::error::{Result, UmbraError};

/// Scoring policy: per-pattern penalty and risk thresholds.
///
/// Defaults match the established policy (5 points per detection, bands at
/// 80 and 50); they are configurable but should not be changed casually,
/// since published scores would no longer be comparable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Transparency points deducted per detected pattern.
    pub pattern_penalty: u32,
    /// Scores at or above this are low risk.
    pub low_risk_threshold: u32,
    /// Scores at or above this (but below the low threshold) are medium risk.
    pub medium_risk_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pattern_penalty: 5,
            low_risk_threshold: 80,
            medium_risk_threshold: 50,
        }
    }
}

/// Discrete risk banding of the transparency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score at or above the low-risk threshold.
    Low,
    /// Score between the medium- and low-risk thresholds.
    Medium,
    /// Score below the medium-risk threshold.
    High,
}

impl RiskLevel {
    /// The display color hint for this risk level. Static lookup, one color
    /// per level.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4BE680",
            RiskLevel::Medium => "#FFA500",
            RiskLevel::High => "#FF4444",
        }
    }
}

/// One detected manipulative fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPattern {
    /// The fragment text.
    pub text: String,
    /// The manipulation category. Never benign.
    pub pattern: PatternCategory,
    /// The fragment's ordinal position in the input sequence.
    pub index: usize,
}

/// The aggregate transparency assessment for one batch of fragments.
///
/// Field names are the wire format consumed by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Per-fragment labels, aligned to input order.
    pub result: Vec<Label>,
    /// Detected patterns, in input order.
    pub dark_patterns: Vec<DetectedPattern>,
    /// Transparency score in [0, 100].
    pub transparency_score: u32,
    /// Risk banding of the transparency score.
    pub risk_level: RiskLevel,
    /// Display color hint for the risk level.
    pub risk_color: String,
    /// Detection count per category. All seven categories are always
    /// present, even at zero.
    pub pattern_counts: BTreeMap<PatternCategory, u64>,
    /// Total number of detected patterns.
    pub total_patterns: u64,
}

/// Folds an aligned (fragment, label) sequence into an [`AggregateReport`].
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: ScoringConfig,
}

impl Aggregator {
    /// Create an aggregator with the given scoring policy.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Build the report for one labeled batch.
    ///
    /// `fragments` and `labels` must be the same length and order-aligned;
    /// a mismatch is a caller bug and fails the request.
    pub fn aggregate(&self, fragments: &[String], labels: &[Label]) -> Result<AggregateReport> {
        if fragments.len() != labels.len() {
            return Err(UmbraError::invalid_argument(format!(
                "fragment/label length mismatch: {} fragments, {} labels",
                fragments.len(),
                labels.len()
            )));
        }

        let mut pattern_counts: BTreeMap<PatternCategory, u64> =
            PatternCategory::ALL.iter().map(|&c| (c, 0)).collect();
        let mut dark_patterns = Vec::new();

        for (index, (fragment, label)) in fragments.iter().zip(labels).enumerate() {
            if let Label::Pattern(category) = label {
                dark_patterns.push(DetectedPattern {
                    text: fragment.clone(),
                    pattern: *category,
                    index,
                });
                *pattern_counts
                    .get_mut(category)
                    .ok_or_else(|| UmbraError::internal("category missing from count map"))? += 1;
            }
        }

        let total_patterns = dark_patterns.len() as u64;
        let transparency_score = self.transparency_score(total_patterns);
        let risk_level = self.risk_level(transparency_score);

        Ok(AggregateReport {
            result: labels.to_vec(),
            dark_patterns,
            transparency_score,
            risk_level,
            risk_color: risk_level.color().to_string(),
            pattern_counts,
            total_patterns,
        })
    }

    /// The transparency score for a given detection count: a flat penalty
    /// per pattern, floored at zero.
    pub fn transparency_score(&self, total_patterns: u64) -> u32 {
        let penalty = self.config.pattern_penalty as u64 * total_patterns;
        100u64.saturating_sub(penalty) as u32
    }

    /// The risk band for a transparency score. Bands are evaluated
    /// highest-threshold-first and cover the whole score range.
    pub fn risk_level(&self, score: u32) -> RiskLevel {
        if score >= self.config.low_risk_threshold {
            RiskLevel::Low
        } else if score >= self.config.medium_risk_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
