//! Feature set module
//!
//! A `FeatureSet` is the fixed collection of numeric signals the extractor
//! pulls out of a piece of text. Counts are kept as integers and flags as
//! booleans; [`FeatureSet::pairs`] gives the flat name → number view.

/// Signals extracted from a single piece of text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    /// Number of certainty markers present
    pub certainty_count: usize,
    /// certainty_count / max(word_count, 1)
    pub certainty_ratio: f64,
    /// Number of hedging markers present
    pub hedging_count: usize,
    /// hedging_count / max(word_count, 1)
    pub hedging_ratio: f64,
    /// Any digit sequence present
    pub has_numbers: bool,
    /// Any standalone 4-digit token present
    pub has_dates: bool,
    /// Number of digit sequences
    pub number_count: usize,
    /// Capitalized-word tokens (proper noun proxy)
    pub proper_noun_count: usize,
    /// proper_noun_count / max(word_count, 1)
    pub proper_noun_ratio: f64,
    /// Number of citation phrases present
    pub citation_indicators: usize,
    /// citation_indicators > 0
    pub has_citation: bool,
    /// Whitespace-delimited token count
    pub word_count: usize,
    /// Mean token length in characters
    pub avg_word_length: f64,
}

impl FeatureSet {
    /// Feature names in reporting order
    pub const NAMES: [&'static str; 13] = [
        "certainty_count",
        "certainty_ratio",
        "hedging_count",
        "hedging_ratio",
        "has_numbers",
        "has_dates",
        "number_count",
        "proper_noun_count",
        "proper_noun_ratio",
        "citation_indicators",
        "has_citation",
        "word_count",
        "avg_word_length",
    ];

    /// Flat name → value view; flags are reported as 0.0 / 1.0
    pub fn pairs(&self) -> [(&'static str, f64); 13] {
        let values = [
            self.certainty_count as f64,
            self.certainty_ratio,
            self.hedging_count as f64,
            self.hedging_ratio,
            flag(self.has_numbers),
            flag(self.has_dates),
            self.number_count as f64,
            self.proper_noun_count as f64,
            self.proper_noun_ratio,
            self.citation_indicators as f64,
            flag(self.has_citation),
            self.word_count as f64,
            self.avg_word_length,
        ];

        std::array::from_fn(|i| (Self::NAMES[i], values[i]))
    }

    /// Look up a single feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.pairs()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

/// Boolean flag as a numeric feature value
pub fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let features = FeatureSet::default();
        assert!(features.pairs().iter().all(|(_, v)| *v == 0.0));
    }

    #[test]
    fn test_pairs_order_matches_names() {
        let features = FeatureSet::default();
        let names: Vec<&str> = features.pairs().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, FeatureSet::NAMES.to_vec());
    }

    #[test]
    fn test_flags_reported_as_numbers() {
        let features = FeatureSet {
            has_numbers: true,
            has_citation: true,
            word_count: 7,
            ..Default::default()
        };
        assert_eq!(features.get("has_numbers"), Some(1.0));
        assert_eq!(features.get("has_dates"), Some(0.0));
        assert_eq!(features.get("has_citation"), Some(1.0));
        assert_eq!(features.get("word_count"), Some(7.0));
        assert_eq!(features.get("nonexistent"), None);
    }
}
