//! Letter-cost models for the bounded edit-distance search.
//!
//! A cost model answers two questions about a pair of single characters:
//! what it costs to align them ([`LetterCost::substitution_cost`]) and what
//! it costs to skip the second one after the first
//! ([`LetterCost::deletion_cost`]). The same deletion cost is used on both
//! axes of the DP table, because the trie walk only advances one side at a
//! time.
//!
//! # Available Implementations
//!
//! - [`Plain`] - unit costs (Levenshtein and the phonetic-code algorithms)
//! - [`Editex`] - phonetic letter classes with a silent `h`/`w` rule
//! - [`Typox`] - QWERTY neighbour clusters

pub mod editex;
pub mod plain;
pub mod typox;

use std::fmt::Debug;

pub use editex::Editex;
pub use plain::Plain;
pub use typox::Typox;

use crate::error::{Result, SpellwiseError};

/// Default cost for letters sharing a class.
pub const DEFAULT_GROUP_COST: f64 = 1.0;

/// Default cost for letters with no class in common.
pub const DEFAULT_NON_GROUP_COST: f64 = 2.0;

/// Trait for per-letter cost models.
///
/// Implementations must return `0.0` from `substitution_cost(a, a)` and must
/// never return a negative cost; the search prunes on the assumption that DP
/// values never decrease along a path.
pub trait LetterCost: Send + Sync + Debug {
    /// Cost of aligning `a` with `b`.
    fn substitution_cost(&self, a: char, b: char) -> f64;

    /// Cost of skipping `b` when the preceding letter on the same axis is `a`.
    fn deletion_cost(&self, a: char, b: char) -> f64;

    /// Cost charged at the first position of either axis, where there is no
    /// preceding letter.
    fn base_cost(&self) -> f64;

    /// Get the name of this cost model.
    fn name(&self) -> &'static str;
}

/// Costs shared by the letter-class models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupCosts {
    group_cost: f64,
    non_group_cost: f64,
}

impl GroupCosts {
    /// Validate and create a pair of costs. Both must be finite and positive.
    pub fn new(group_cost: f64, non_group_cost: f64) -> Result<Self> {
        Ok(GroupCosts {
            group_cost: validate_cost("group_cost", group_cost)?,
            non_group_cost: validate_cost("non_group_cost", non_group_cost)?,
        })
    }

    /// Cost for letters sharing a class.
    pub fn group_cost(&self) -> f64 {
        self.group_cost
    }

    /// Cost for letters with no class in common.
    pub fn non_group_cost(&self) -> f64 {
        self.non_group_cost
    }

    fn pick(&self, a: char, b: char, related: bool) -> f64 {
        if a == b {
            0.0
        } else if related {
            self.group_cost
        } else {
            self.non_group_cost
        }
    }
}

impl Default for GroupCosts {
    fn default() -> Self {
        GroupCosts {
            group_cost: DEFAULT_GROUP_COST,
            non_group_cost: DEFAULT_NON_GROUP_COST,
        }
    }
}

fn validate_cost(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SpellwiseError::invalid_config(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Overlapping letter classes packed as one bit per class.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LetterGroups {
    masks: [u32; 26],
}

impl LetterGroups {
    /// Build the class table. Groups hold lowercase ASCII letters only and
    /// there may be at most 32 of them.
    pub(crate) const fn new(groups: &[&str]) -> Self {
        let mut masks = [0u32; 26];
        let mut g = 0;
        while g < groups.len() {
            let letters = groups[g].as_bytes();
            let mut i = 0;
            while i < letters.len() {
                masks[(letters[i] - b'a') as usize] |= 1 << g;
                i += 1;
            }
            g += 1;
        }
        LetterGroups { masks }
    }

    fn mask(&self, letter: char) -> u32 {
        if letter.is_ascii_lowercase() {
            self.masks[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Whether `a` and `b` belong to at least one common class.
    pub(crate) fn share_group(&self, a: char, b: char) -> bool {
        self.mask(a) & self.mask(b) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_costs_validation() {
        assert!(GroupCosts::new(1.0, 2.0).is_ok());
        assert!(GroupCosts::new(0.5, 0.5).is_ok());
        assert!(GroupCosts::new(0.0, 2.0).is_err());
        assert!(GroupCosts::new(1.0, -2.0).is_err());
        assert!(GroupCosts::new(f64::NAN, 2.0).is_err());
        assert!(GroupCosts::new(1.0, f64::INFINITY).is_err());

        let err = GroupCosts::new(-1.0, 2.0).unwrap_err();
        assert!(matches!(err, SpellwiseError::InvalidConfig(_)));
    }

    #[test]
    fn test_letter_groups() {
        const GROUPS: LetterGroups = LetterGroups::new(&["ab", "bc", "xyz"]);

        assert!(GROUPS.share_group('a', 'b'));
        assert!(GROUPS.share_group('b', 'c'));
        assert!(!GROUPS.share_group('a', 'c'));
        assert!(GROUPS.share_group('x', 'z'));
        assert!(!GROUPS.share_group('d', 'd'));
        assert!(!GROUPS.share_group('A', 'b'));
        assert!(!GROUPS.share_group('1', '1'));
    }

    #[test]
    fn test_substitution_of_equal_letters_is_free() {
        let models: Vec<Box<dyn LetterCost>> = vec![
            Box::new(Plain),
            Box::new(Editex::default()),
            Box::new(Typox::default()),
        ];

        for model in &models {
            for letter in ('a'..='z').chain(['A', 'T', '1', '0']) {
                assert_eq!(
                    model.substitution_cost(letter, letter),
                    0.0,
                    "{} {letter}",
                    model.name()
                );
            }
        }
    }

    #[test]
    fn test_costs_are_never_negative() {
        let models: Vec<Box<dyn LetterCost>> = vec![
            Box::new(Plain),
            Box::new(Editex::default()),
            Box::new(Typox::default()),
        ];

        for model in &models {
            assert!(model.base_cost() > 0.0);
            for a in 'a'..='z' {
                for b in 'a'..='z' {
                    assert!(model.substitution_cost(a, b) >= 0.0);
                    assert!(model.deletion_cost(a, b) >= 0.0);
                }
            }
        }
    }
}
