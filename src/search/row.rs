//! DP rows for edit distance against a fixed query key.
//!
//! A row holds, for the path walked so far on the word side, the distance to
//! every prefix of the query (`row[0]` is the empty prefix). Extending the
//! path by one letter produces the next row from the previous one only.

use crate::cost::LetterCost;

/// Query-side state shared by every row computed for one query.
#[derive(Debug, Clone)]
pub struct QueryAxis {
    letters: Vec<char>,
    // skip[i] is the cost of skipping query letter i (1-based); skip[0] is unused
    skip: Vec<f64>,
}

impl QueryAxis {
    /// Prepare the axis for `key` under `cost`.
    pub fn new<C: LetterCost + ?Sized>(key: &str, cost: &C) -> Self {
        let letters: Vec<char> = key.chars().collect();
        let mut skip = Vec::with_capacity(letters.len() + 1);
        skip.push(0.0);
        for i in 1..=letters.len() {
            skip.push(if i == 1 {
                cost.base_cost()
            } else {
                cost.deletion_cost(letters[i - 2], letters[i - 1])
            });
        }

        QueryAxis { letters, skip }
    }

    /// Number of letters in the query key.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the query key is empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Distances from the empty word path to every query prefix.
    pub fn initial_row(&self) -> Vec<f64> {
        let mut row = Vec::with_capacity(self.skip.len());
        row.push(0.0);
        for i in 1..self.skip.len() {
            row.push(row[i - 1] + self.skip[i]);
        }
        row
    }

    /// Extend `previous` by `letter`, which follows `previous_letter` on the
    /// word side (`None` for the first letter of a word).
    pub fn next_row<C: LetterCost + ?Sized>(
        &self,
        cost: &C,
        previous: &[f64],
        previous_letter: Option<char>,
        letter: char,
    ) -> Vec<f64> {
        let skip_letter = match previous_letter {
            Some(previous_letter) => cost.deletion_cost(previous_letter, letter),
            None => cost.base_cost(),
        };

        let mut row = Vec::with_capacity(previous.len());
        row.push(previous[0] + skip_letter);

        for i in 1..previous.len() {
            let value = (previous[i] + skip_letter) // skip the word letter
                .min(row[i - 1] + self.skip[i]) // skip the query letter
                .min(previous[i - 1] + cost.substitution_cost(letter, self.letters[i - 1])); // align
            row.push(value);
        }

        row
    }
}

/// Smallest value in a row.
pub fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}
