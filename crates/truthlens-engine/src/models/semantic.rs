//! Semantic sub-model: internal consistency of the text.

use std::collections::HashSet;

use crate::lexicon::{CONTRADICTION_PAIRS, EXAGGERATION_PHRASES};

use super::clamp_unit;

const BASE_SCORE: f64 = 0.6;
const CONTRADICTION_PENALTY: f64 = 0.25;
const EXAGGERATION_PENALTY: f64 = 0.20;
const DIVERSITY_PIVOT: f64 = 0.5;
const DIVERSITY_WEIGHT: f64 = 0.2;

/// Penalizes contradictions, exaggeration and repetitive wording
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticModel;

impl SemanticModel {
    /// Score raw text
    pub fn score(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut score = BASE_SCORE;

        // Every contradicting pair found costs the full penalty
        let contradictions = CONTRADICTION_PAIRS
            .iter()
            .filter(|(a, b)| lower.contains(a) && lower.contains(b))
            .count();
        score -= contradictions as f64 * CONTRADICTION_PENALTY;

        // Exaggeration is charged at most once
        if EXAGGERATION_PHRASES.iter().any(|p| lower.contains(p)) {
            score -= EXAGGERATION_PENALTY;
        }

        if let Some(ratio) = unique_ratio(&lower) {
            score += (ratio - DIVERSITY_PIVOT) * DIVERSITY_WEIGHT;
        }

        clamp_unit(score)
    }
}

/// Distinct tokens / total tokens, `None` for text with no tokens
fn unique_ratio(lower: &str) -> Option<f64> {
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    Some(distinct.len() as f64 / tokens.len() as f64)
}
