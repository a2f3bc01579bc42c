//! The closed label space for dark pattern classification.
//!
//! The category set is defined once here and referenced by both the
//! classification pipeline and the aggregator, so the two cannot drift.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Wire string for the presence-stage manipulative decision.
pub const DARK: &str = "Dark";

/// Wire string for the presence-stage benign decision.
pub const NOT_DARK: &str = "Not Dark";

/// One of the seven fixed manipulation categories.
///
/// Variants are declared in wire order, which also fixes the iteration order
/// of category counts in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternCategory {
    /// Artificial time pressure ("Hurry, offer ends soon").
    Urgency,
    /// Hidden costs or items sneaked into the basket.
    Sneaking,
    /// Visual or wording tricks steering the user's choice.
    Misdirection,
    /// Fabricated or pressuring activity notices ("12 people bought this").
    SocialProof,
    /// Artificial stock or availability limits ("Only 2 left!").
    Scarcity,
    /// Making cancellation or opt-out needlessly hard.
    Obstruction,
    /// Forcing an unrelated action to complete a task.
    ForcedAction,
}

impl PatternCategory {
    /// All categories, in wire order.
    pub const ALL: [PatternCategory; 7] = [
        PatternCategory::Urgency,
        PatternCategory::Sneaking,
        PatternCategory::Misdirection,
        PatternCategory::SocialProof,
        PatternCategory::Scarcity,
        PatternCategory::Obstruction,
        PatternCategory::ForcedAction,
    ];

    /// The wire string for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Urgency => "Urgency",
            PatternCategory::Sneaking => "Sneaking",
            PatternCategory::Misdirection => "Misdirection",
            PatternCategory::SocialProof => "Social Proof",
            PatternCategory::Scarcity => "Scarcity",
            PatternCategory::Obstruction => "Obstruction",
            PatternCategory::ForcedAction => "Forced Action",
        }
    }

    /// Parse a wire string into a category. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Urgency" => Some(PatternCategory::Urgency),
            "Sneaking" => Some(PatternCategory::Sneaking),
            "Misdirection" => Some(PatternCategory::Misdirection),
            "Social Proof" => Some(PatternCategory::SocialProof),
            "Scarcity" => Some(PatternCategory::Scarcity),
            "Obstruction" => Some(PatternCategory::Obstruction),
            "Forced Action" => Some(PatternCategory::ForcedAction),
            _ => None,
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PatternCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PatternCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PatternCategory::parse(&s)
            .ok_or_else(|| de::Error::custom(format!("unrecognized pattern category: {s}")))
    }
}

/// The per-fragment classification outcome: benign, or one manipulation
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The fragment is benign.
    NotDark,
    /// The fragment is manipulative, with its category.
    Pattern(PatternCategory),
}

impl Label {
    /// The wire string for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::NotDark => NOT_DARK,
            Label::Pattern(category) => category.as_str(),
        }
    }

    /// Parse a wire string into a label. Returns `None` for anything outside
    /// the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        if s == NOT_DARK {
            Some(Label::NotDark)
        } else {
            PatternCategory::parse(s).map(Label::Pattern)
        }
    }

    /// The category, if this label is a detection.
    pub fn category(&self) -> Option<PatternCategory> {
        match self {
            Label::NotDark => None,
            Label::Pattern(category) => Some(*category),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Label::parse(&s).ok_or_else(|| de::Error::custom(format!("unrecognized label: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_strings_round_trip() {
        for category in PatternCategory::ALL {
            assert_eq!(PatternCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_multi_word_wire_strings() {
        assert_eq!(PatternCategory::SocialProof.as_str(), "Social Proof");
        assert_eq!(PatternCategory::ForcedAction.as_str(), "Forced Action");
        assert_eq!(
            PatternCategory::parse("Social Proof"),
            Some(PatternCategory::SocialProof)
        );
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert_eq!(PatternCategory::parse("Persuasion"), None);
        assert_eq!(PatternCategory::parse("urgency"), None);
        assert_eq!(PatternCategory::parse("Not Dark"), None);
    }

    #[test]
    fn test_label_parse() {
        assert_eq!(Label::parse("Not Dark"), Some(Label::NotDark));
        assert_eq!(
            Label::parse("Scarcity"),
            Some(Label::Pattern(PatternCategory::Scarcity))
        );
        // The presence-stage "Dark" decision is not itself a final label
        assert_eq!(Label::parse("Dark"), None);
    }

    #[test]
    fn test_label_category() {
        assert_eq!(Label::NotDark.category(), None);
        assert_eq!(
            Label::Pattern(PatternCategory::Urgency).category(),
            Some(PatternCategory::Urgency)
        );
    }

    #[test]
    fn test_label_serde() {
        let json = serde_json::to_string(&Label::Pattern(PatternCategory::ForcedAction)).unwrap();
        assert_eq!(json, "\"Forced Action\"");

        let json = serde_json::to_string(&Label::NotDark).unwrap();
        assert_eq!(json, "\"Not Dark\"");

        let label: Label = serde_json::from_str("\"Social Proof\"").unwrap();
        assert_eq!(label, Label::Pattern(PatternCategory::SocialProof));

        assert!(serde_json::from_str::<Label>("\"Nagging\"").is_err());
    }

    #[test]
    fn test_all_has_seven_distinct_categories() {
        let mut seen: Vec<&str> = PatternCategory::ALL.iter().map(|c| c.as_str()).collect();
        seen.dedup();
        assert_eq!(seen.len(), 7);
    }
}
