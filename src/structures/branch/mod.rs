//! Branches, aka. a collection of literals, interpreted as the conjunction of those literals.
//!
//! A branch is one disjunct of a formula: the formula is true just in case some branch is
//! true, and a branch is true just in case every literal in the branch is true.
//!
//! The canonical representation of a branch is as a *set* of literals, the [CBranch]
//! structure. Set semantics are load-bearing:
//! - Membership collapses repeated literals on insertion.
//! - Structural equality of branches makes exact-duplicate branches identical, and so a set
//!   of branches collapses duplicates for free.
//! - The backing [BTreeSet](std::collections::BTreeSet) iterates literals sorted by item and
//!   then polarity, which keeps every observable ordering canonical.
//!
//! ```rust
//! # use sleuth::structures::branch::{Branch, CBranch};
//! # use sleuth::structures::literal::{CLiteral, Literal};
//! let mut branch = CBranch::default();
//! branch.insert(CLiteral::new(23, true));
//! branch.insert(CLiteral::new(4, false));
//! branch.insert(CLiteral::new(23, true));
//!
//! assert_eq!(branch.size(), 2);
//! assert!(!branch.contradictory());
//!
//! branch.insert(CLiteral::new(23, false));
//! assert!(branch.contradictory());
//! ```
//!
//! - The empty branch is always true (a conjunction over nothing).
//! - A branch containing an item with both polarities is unsatisfiable, and such branches are
//!   never resident in a settled formula.

#[doc(hidden)]
mod c_branch;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::structures::{item::ItemId, literal::CLiteral};

/// The branch trait.
pub trait Branch {
    /// An iterator over all literals in the branch, sorted by item and then polarity.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// An iterator over all items in the branch, order following [literals](Branch::literals).
    fn items(&self) -> impl Iterator<Item = ItemId>;

    /// The number of literals in the branch.
    fn size(&self) -> usize;

    /// Whether some item occurs in the branch with both polarities.
    fn contradictory(&self) -> bool;

    /// The branch in its canonical form.
    fn canonical(self) -> CBranch;
}

/// The implementation of a branch as a set of literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CBranch {
    /// The literals of the branch.
    literals: BTreeSet<CLiteral>,
}
