//! Editex phonetic cost model.
//!
//! Letters are grouped into overlapping phonetic classes; substituting or
//! dropping a letter within a class is cheaper than across classes. A
//! silent `h` or `w` is also cheap to drop.

use crate::cost::{GroupCosts, LetterCost, LetterGroups};
use crate::error::Result;

const EDITEX_GROUPS: LetterGroups = LetterGroups::new(&[
    "aeiouy", "bp", "ckq", "dt", "lr", "mn", "gj", "fpv", "xsz", "csz",
]);

/// Editex letter costs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Editex {
    costs: GroupCosts,
}

impl Editex {
    /// Create an Editex model with custom costs.
    pub fn new(group_cost: f64, non_group_cost: f64) -> Result<Self> {
        Ok(Editex {
            costs: GroupCosts::new(group_cost, non_group_cost)?,
        })
    }

    /// The configured costs.
    pub fn costs(&self) -> GroupCosts {
        self.costs
    }

    /// Whether `a` and `b` share a phonetic class.
    pub fn letters_in_group(a: char, b: char) -> bool {
        EDITEX_GROUPS.share_group(a, b)
    }
}

impl LetterCost for Editex {
    fn substitution_cost(&self, a: char, b: char) -> f64 {
        self.costs.pick(a, b, Self::letters_in_group(a, b))
    }

    fn deletion_cost(&self, a: char, b: char) -> f64 {
        let silent = matches!(a, 'h' | 'w');
        self.costs.pick(a, b, silent || Self::letters_in_group(a, b))
    }

    fn base_cost(&self) -> f64 {
        self.costs.non_group_cost()
    }

    fn name(&self) -> &'static str {
        "editex"
    }
}
