//! Bounded edit-distance search over the trie.
//!
//! Instead of computing the distance between the query and every indexed
//! key, the search walks the trie once and extends one DP row per edge.
//! Every key below a node shares the row of that node, and because costs
//! are never negative a row whose smallest value exceeds the bound can only
//! grow from there: the whole subtree is skipped.
//!
//! The walk keeps an explicit stack with one frame per depth (the edge
//! iterator of a node plus the node's row), so memory is proportional to
//! query length times the depth of the current path, and long keys cannot
//! exhaust the call stack.
//!
//! # Examples
//!
//! ```
//! use spellwise::cost::Plain;
//! use spellwise::search::TrieSearch;
//! use spellwise::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("spelling", "spelling");
//! trie.insert("checker", "checker");
//!
//! let suggestions = TrieSearch::new(&trie, &Plain).search("speling", 2.0);
//! assert_eq!(suggestions.len(), 1);
//! assert_eq!(suggestions[0].word, "spelling");
//! assert_eq!(suggestions[0].distance, 1.0);
//! ```

pub mod row;

pub use row::{QueryAxis, row_min};

use crate::cost::LetterCost;
use crate::suggest::Suggestion;
use crate::trie::{Edges, Trie};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Trie edges for which a row was computed.
    pub visited_nodes: usize,
    /// Subtrees skipped because their row exceeded the bound.
    pub pruned_subtrees: usize,
    /// Suggestions produced.
    pub emitted: usize,
}

struct Frame<'t> {
    edges: Edges<'t>,
    letter: Option<char>,
    row: Vec<f64>,
}

/// A read-only search over a trie with a given cost model.
#[derive(Debug, Clone, Copy)]
pub struct TrieSearch<'a, C: ?Sized> {
    trie: &'a Trie,
    cost: &'a C,
}

impl<'a, C: LetterCost + ?Sized> TrieSearch<'a, C> {
    /// Create a search borrowing `trie` and `cost`.
    pub fn new(trie: &'a Trie, cost: &'a C) -> Self {
        TrieSearch { trie, cost }
    }

    /// Every indexed word whose key is within `max_distance` of `query_key`.
    ///
    /// The result is in traversal order, which is unspecified; callers rank it.
    pub fn search(&self, query_key: &str, max_distance: f64) -> Vec<Suggestion> {
        self.search_with_stats(query_key, max_distance).0
    }

    /// Like [`search`](Self::search), also returning traversal counters.
    pub fn search_with_stats(
        &self,
        query_key: &str,
        max_distance: f64,
    ) -> (Vec<Suggestion>, SearchStats) {
        let axis = QueryAxis::new(query_key, self.cost);
        let last = axis.len();
        let mut suggestions = Vec::new();
        let mut stats = SearchStats::default();

        let mut stack = vec![Frame {
            edges: self.trie.root().edges(),
            letter: None,
            row: axis.initial_row(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some((&letter, child)) = frame.edges.next() else {
                stack.pop();
                continue;
            };

            let row = axis.next_row(self.cost, &frame.row, frame.letter, letter);
            stats.visited_nodes += 1;

            let distance = row[last];
            if distance <= max_distance
                && let Some(words) = child.words()
            {
                suggestions.extend(
                    words
                        .iter()
                        .map(|word| Suggestion::new(word.clone(), distance)),
                );
                stats.emitted += words.len();
            }

            if row_min(&row) <= max_distance {
                if !child.children().is_empty() {
                    stack.push(Frame {
                        edges: child.edges(),
                        letter: Some(letter),
                        row,
                    });
                }
            } else {
                stats.pruned_subtrees += 1;
            }
        }

        log::trace!(
            "query {query_key:?} (max {max_distance}): visited {} nodes, pruned {}, emitted {}",
            stats.visited_nodes,
            stats.pruned_subtrees,
            stats.emitted
        );

        (suggestions, stats)
    }
}
