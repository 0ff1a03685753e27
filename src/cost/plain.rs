//! Unit-cost model.

use crate::cost::LetterCost;

/// Unit costs: every mismatch, insertion and deletion costs `1`.
///
/// Used by Levenshtein and, over already encoded keys, by the Soundex and
/// Caverphone algorithms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl LetterCost for Plain {
    fn substitution_cost(&self, a: char, b: char) -> f64 {
        if a == b { 0.0 } else { 1.0 }
    }

    fn deletion_cost(&self, _a: char, _b: char) -> f64 {
        1.0
    }

    fn base_cost(&self) -> f64 {
        1.0
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
