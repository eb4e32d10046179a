//! Fixed vocabularies and patterns used by the extractor and sub-models.
//!
//! All word lists are matched as case-insensitive substrings of the whole
//! text, not as tokens, so "all" also fires inside "tall".

/// Strong-assertion vocabulary
pub const CERTAINTY_MARKERS: [&str; 6] = [
    "definitely",
    "certainly",
    "always",
    "never",
    "proven",
    "confirmed",
];

/// Uncertainty vocabulary
pub const HEDGING_MARKERS: [&str; 7] = [
    "maybe",
    "possibly",
    "perhaps",
    "might",
    "could",
    "allegedly",
    "supposedly",
];

/// Phrases that suggest a cited source
pub const CITATION_PHRASES: [&str; 7] = [
    "according to",
    "research shows",
    "study found",
    "reported",
    "published",
    "journal",
    "university",
];

/// Word pairs that contradict each other when both appear
pub const CONTRADICTION_PAIRS: [(&str, &str); 5] = [
    ("never", "sometimes"),
    ("always", "occasionally"),
    ("impossible", "possible"),
    ("everyone", "nobody"),
    ("all", "none"),
];

/// Overstated phrasing
pub const EXAGGERATION_PHRASES: [&str; 6] = [
    "1000%",
    "always works",
    "never fails",
    "everyone agrees",
    "nobody knows",
    "completely impossible",
];

/// Markers of an authoritative source
pub const AUTHORITY_KEYWORDS: [&str; 10] = [
    "university",
    "research",
    "study",
    "journal",
    "published",
    "professor",
    "scientist",
    "institute",
    "laboratory",
    "peer-reviewed",
];

/// Physically implausible claims, matched against lowercased text.
///
/// The third entry is an alternation of "flies" and "floats in the air".
pub const ABSURD_PATTERNS: [&str; 4] = [
    r"made of (chocolate|candy|gold)",
    r"melts every (summer|winter)",
    r"flies|floats in the air",
    r"\d{4,} (meters|feet) tall",
];

/// Any digit run
pub const DIGITS_PATTERN: &str = r"\d+";

/// A standalone four-digit token (year proxy)
pub const YEAR_PATTERN: &str = r"\b\d{4}\b";

/// Integer or decimal number
pub const NUMBER_PATTERN: &str = r"\b\d+(\.\d+)?\b";

/// Capitalized word (proper noun / location proxy)
pub const CAPITALIZED_PATTERN: &str = r"\b[A-Z][a-z]+\b";

/// Number of vocabulary entries that occur in `haystack`.
///
/// `haystack` must already be lowercased.
pub fn count_present(haystack: &str, vocabulary: &[&str]) -> usize {
    vocabulary
        .iter()
        .filter(|term| haystack.contains(*term))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_present_is_per_term() {
        // Repeats of one term count once
        assert_eq!(count_present("maybe maybe maybe", &HEDGING_MARKERS), 1);
        assert_eq!(count_present("maybe it could be", &HEDGING_MARKERS), 2);
    }

    #[test]
    fn test_count_present_substring() {
        assert_eq!(count_present("the tower is tall", &["all"]), 1);
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        let all = CERTAINTY_MARKERS
            .iter()
            .chain(HEDGING_MARKERS.iter())
            .chain(CITATION_PHRASES.iter())
            .chain(EXAGGERATION_PHRASES.iter())
            .chain(AUTHORITY_KEYWORDS.iter());
        for term in all {
            assert_eq!(*term, term.to_lowercase());
        }
    }
}
