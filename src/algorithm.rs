//! The suggestion algorithms and the parts they are built from.
//!
//! Every algorithm is a pairing of a [`Preprocessor`] (how words become
//! trie keys) with a [`LetterCost`] model (how keys are compared).

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cost::{Editex, LetterCost, Plain, Typox};
use crate::error::{Result, SpellwiseError};
use crate::preprocess::{CaverphoneOne, CaverphoneTwo, Lowercase, Preprocessor, Soundex};

/// Available suggestion algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Plain edit distance over lowercase words
    #[default]
    Levenshtein,
    /// Edit distance with phonetic letter classes
    Editex,
    /// Edit distance with QWERTY neighbour classes
    Typox,
    /// Exact-width Soundex codes
    Soundex,
    /// Caverphone 1.0 codes
    CaverphoneOne,
    /// Caverphone 2.0 codes
    CaverphoneTwo,
}

impl Algorithm {
    /// All algorithms, in a stable order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Levenshtein,
        Algorithm::Editex,
        Algorithm::Typox,
        Algorithm::Soundex,
        Algorithm::CaverphoneOne,
        Algorithm::CaverphoneTwo,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::Editex => "editex",
            Algorithm::Typox => "typox",
            Algorithm::Soundex => "soundex",
            Algorithm::CaverphoneOne => "caverphone-one",
            Algorithm::CaverphoneTwo => "caverphone-two",
        }
    }

    /// Whether the algorithm compares fixed-width phonetic codes.
    pub fn is_phonetic_code(&self) -> bool {
        matches!(
            self,
            Algorithm::Soundex | Algorithm::CaverphoneOne | Algorithm::CaverphoneTwo
        )
    }

    /// Whether the algorithm's cost model takes group costs.
    pub fn uses_group_costs(&self) -> bool {
        matches!(self, Algorithm::Editex | Algorithm::Typox)
    }

    /// Bound used when none is configured: exact code matches for the
    /// phonetic-code algorithms, two edits otherwise.
    pub fn default_max_distance(&self) -> f64 {
        if self.is_phonetic_code() { 0.0 } else { 2.0 }
    }

    /// The pre-processor turning words into keys.
    pub fn preprocessor(&self) -> Box<dyn Preprocessor> {
        match self {
            Algorithm::Levenshtein | Algorithm::Editex | Algorithm::Typox => Box::new(Lowercase),
            Algorithm::Soundex => Box::new(Soundex),
            Algorithm::CaverphoneOne => Box::new(CaverphoneOne),
            Algorithm::CaverphoneTwo => Box::new(CaverphoneTwo),
        }
    }

    /// The cost model with default group costs.
    pub fn default_cost_model(&self) -> Box<dyn LetterCost> {
        match self {
            Algorithm::Editex => Box::new(Editex::default()),
            Algorithm::Typox => Box::new(Typox::default()),
            _ => Box::new(Plain),
        }
    }

    /// The cost model comparing keys. Group costs are validated even for
    /// algorithms that ignore them.
    pub fn cost_model(&self, group_cost: f64, non_group_cost: f64) -> Result<Box<dyn LetterCost>> {
        Ok(match self {
            Algorithm::Editex => Box::new(Editex::new(group_cost, non_group_cost)?),
            Algorithm::Typox => Box::new(Typox::new(group_cost, non_group_cost)?),
            _ => {
                crate::cost::GroupCosts::new(group_cost, non_group_cost)?;
                Box::new(Plain)
            }
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SpellwiseError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| SpellwiseError::invalid_argument(format!("unknown algorithm: {s}")))
    }
}
