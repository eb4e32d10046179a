//! Sentence-level claim segmentation

/// Candidate sentence delimiters, in priority order.
///
/// Only the first one present in the text is used to split it.
pub const SENTENCE_DELIMITERS: [&str; 6] = [". ", "! ", "? ", ".\n", "!\n", "?\n"];

/// Splits text into sentence-like candidate claims
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimSegmenter;

impl ClaimSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Segment `text` into trimmed, non-empty parts.
    ///
    /// Splits on the first delimiter of [`SENTENCE_DELIMITERS`] that occurs in
    /// the text. Without any delimiter the trimmed text is the only segment.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let delimiter = SENTENCE_DELIMITERS.iter().find(|d| text.contains(*d));

        let segments: Vec<String> = match delimiter {
            Some(delimiter) => text
                .split(delimiter)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        if segments.is_empty() {
            vec![text.trim().to_string()]
        } else {
            segments
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiter_single_segment() {
        let segments = ClaimSegmenter::new().segment("  A single statement without a stop  ");
        assert_eq!(segments, vec!["A single statement without a stop"]);
    }

    #[test]
    fn test_split_on_period_space() {
        let segments = ClaimSegmenter::new().segment("First claim here. Second claim here. Third.");
        assert_eq!(segments, vec!["First claim here", "Second claim here", "Third."]);
    }

    #[test]
    fn test_first_present_delimiter_wins() {
        // ". " is present, so "! " is never used to split
        let segments = ClaimSegmenter::new().segment("Wow! Really. Yes");
        assert_eq!(segments, vec!["Wow! Really", "Yes"]);
    }

    #[test]
    fn test_exclamation_delimiter() {
        let segments = ClaimSegmenter::new().segment("It works! It is fast! Done");
        assert_eq!(segments, vec!["It works", "It is fast", "Done"]);
    }

    #[test]
    fn test_newline_delimiter() {
        let segments = ClaimSegmenter::new().segment("Line one.\nLine two.\n");
        assert_eq!(segments, vec!["Line one", "Line two"]);
    }

    #[test]
    fn test_empty_parts_dropped() {
        let segments = ClaimSegmenter::new().segment("One. . Two");
        assert_eq!(segments, vec!["One", "Two"]);
    }

    #[test]
    fn test_order_preserved() {
        let text = (1..=15)
            .map(|i| format!("Sentence number {}", i))
            .collect::<Vec<_>>()
            .join(". ");
        let segments = ClaimSegmenter::new().segment(&text);
        assert_eq!(segments.len(), 15);
        assert_eq!(segments[0], "Sentence number 1");
        assert_eq!(segments[14], "Sentence number 15");
    }
}
