//! Pairwise distances between two keys.
//!
//! These compute one distance at a time, without the trie. They define the
//! distance the trie search must reproduce and are handy for comparing two
//! words directly.

use std::cmp::min;

use crate::cost::LetterCost;
use crate::search::QueryAxis;

/// Distance from `word_key` to `query_key` under `cost`.
///
/// Uses the same recurrence as the trie search, walking `word_key` one
/// letter at a time.
pub fn edit_distance<C: LetterCost + ?Sized>(cost: &C, query_key: &str, word_key: &str) -> f64 {
    let axis = QueryAxis::new(query_key, cost);
    let mut row = axis.initial_row();
    let mut previous = None;

    for letter in word_key.chars() {
        row = axis.next_row(cost, &row, previous, letter);
        previous = Some(letter);
    }

    row[axis.len()]
}

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}
