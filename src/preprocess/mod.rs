//! Pre-processors turning raw words into trie keys.
//!
//! The same pre-processor runs over indexed words and over queries, so two
//! words are compared through their keys only. Every implementation is a
//! pure function of its input and never fails: characters outside ASCII
//! `a-z` (after lowercasing) are dropped.
//!
//! # Available Implementations
//!
//! - [`Lowercase`] - the filtered word itself (edit-distance algorithms)
//! - [`CaverphoneOne`] / [`CaverphoneTwo`] - fixed-width phonetic codes
//! - [`Soundex`] - four character phonetic codes
//!
//! # Examples
//!
//! ```
//! use spellwise::preprocess::{Preprocessor, Soundex};
//!
//! assert_eq!(Soundex.process("Robert"), "R163");
//! assert_eq!(Soundex.process("Rupert"), "R163");
//! ```

pub mod caverphone;
pub mod soundex;

use std::fmt::Debug;

pub use caverphone::{CaverphoneOne, CaverphoneTwo};
pub use soundex::Soundex;

/// Trait for word pre-processors.
pub trait Preprocessor: Send + Sync + Debug {
    /// Transform a raw word into its key.
    fn process(&self, word: &str) -> String;

    /// Get the name of this pre-processor.
    fn name(&self) -> &'static str;
}

/// Lowercased word restricted to ASCII letters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Preprocessor for Lowercase {
    fn process(&self, word: &str) -> String {
        ascii_letters(word)
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Lowercase `word` and keep only `a-z`.
pub(crate) fn ascii_letters(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
