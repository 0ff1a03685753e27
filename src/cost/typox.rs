//! Keyboard-aware typo cost model.
//!
//! Same cost shape as Editex, but the letter classes are clusters of
//! physically adjacent keys on a QWERTY keyboard. Hitting a neighbouring key
//! is a cheap substitution; dropping a letter typed next to its neighbour is
//! a cheap deletion.

use crate::cost::{GroupCosts, LetterCost, LetterGroups};
use crate::error::Result;

// Each top-row key with the key below it and its right neighbour, then the
// same for the home row, then the bottom row pairs. The `hni` cluster is
// kept as published, so `h` reaches `i` rather than `j`.
const KEYBOARD_GROUPS: LetterGroups = LetterGroups::new(&[
    "qaw", "wse", "edr", "rft", "tgy", "yhu", "uji", "iko", "olp", "azs", "sxd", "dcf", "fvg",
    "gbh", "hni", "jmk", "kl", "zx", "xc", "cv", "vb", "bn", "nm",
]);

/// QWERTY neighbour costs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Typox {
    costs: GroupCosts,
}

impl Typox {
    /// Create a Typox model with custom costs.
    pub fn new(group_cost: f64, non_group_cost: f64) -> Result<Self> {
        Ok(Typox {
            costs: GroupCosts::new(group_cost, non_group_cost)?,
        })
    }

    /// The configured costs.
    pub fn costs(&self) -> GroupCosts {
        self.costs
    }

    /// Whether `a` and `b` sit in a common keyboard cluster.
    pub fn nearby_keys(a: char, b: char) -> bool {
        KEYBOARD_GROUPS.share_group(a, b)
    }
}

impl LetterCost for Typox {
    fn substitution_cost(&self, a: char, b: char) -> f64 {
        self.costs.pick(a, b, Self::nearby_keys(a, b))
    }

    fn deletion_cost(&self, a: char, b: char) -> f64 {
        self.costs.pick(a, b, Self::nearby_keys(a, b))
    }

    fn base_cost(&self) -> f64 {
        self.costs.non_group_cost()
    }

    fn name(&self) -> &'static str {
        "typox"
    }
}
