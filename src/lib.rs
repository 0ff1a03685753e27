//! # Spellwise
//!
//! Word suggestions over a prefix tree, under interchangeable phonetic and
//! edit-distance algorithms.
//!
//! ## Features
//!
//! - One trie walk per query, with a DP row extended per edge
//! - Subtrees pruned as soon as no key below them can be close enough
//! - Editex and Typox letter-class costs
//! - Soundex and Caverphone 1.0 / 2.0 phonetic keys
//! - Parallel batch queries
//!
//! ## Example
//!
//! ```
//! use spellwise::prelude::*;
//!
//! let mut suggester = Suggester::new(Algorithm::Soundex);
//! suggester.add_words(["Robert", "Rupert", "Rubin"]);
//!
//! let suggestions = suggester.get_suggestions("robert");
//! assert_eq!(suggestions.len(), 2);
//! assert!(suggestions.iter().all(|s| s.distance == 0.0));
//! ```

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod cost;
pub mod distance;
pub mod error;
pub mod preprocess;
pub mod search;
pub mod suggest;
pub mod trie;

pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::config::SuggesterConfig;
    pub use crate::cost::{Editex, LetterCost, Plain, Typox};
    pub use crate::error::{Result, SpellwiseError};
    pub use crate::preprocess::{CaverphoneOne, CaverphoneTwo, Lowercase, Preprocessor, Soundex};
    pub use crate::search::TrieSearch;
    pub use crate::suggest::{SortOrder, Suggester, Suggestion};
    pub use crate::trie::Trie;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
