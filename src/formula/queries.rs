//! Read-only queries over the resident branches.
//!
//! All queries are pure functions of the current branch collection, and every observable
//! ordering is canonical: literals by item then polarity, residues lexicographically.

use std::collections::BTreeSet;

use crate::structures::{
    branch::Branch,
    item::ItemId,
    literal::{CLiteral, Literal},
};

use super::Formula;

impl Formula {
    /// The literals present in every resident branch --- the facts entailed by the formula
    /// regardless of how the remaining disjunctions resolve.
    ///
    /// The empty set, if there are no resident branches.
    pub fn common_elements(&self) -> BTreeSet<CLiteral> {
        let mut branches = self.branches.iter();

        let Some(first) = branches.next() else {
            return BTreeSet::default();
        };

        let mut common: BTreeSet<CLiteral> = first.literals().copied().collect();
        for branch in branches {
            common.retain(|literal| branch.contains(literal));
        }
        common
    }

    /// The items known to be held: the positive common elements, projected to bare ids.
    pub fn pos_elements(&self) -> BTreeSet<ItemId> {
        self.common_elements()
            .iter()
            .filter(|literal| literal.polarity())
            .map(|literal| literal.item())
            .collect()
    }

    /// The items known to be absent: the negative common elements, projected to bare ids.
    pub fn neg_elements(&self) -> BTreeSet<ItemId> {
        self.common_elements()
            .iter()
            .filter(|literal| !literal.polarity())
            .map(|literal| literal.item())
            .collect()
    }

    /// The remaining points of disjunctive uncertainty.
    ///
    /// For each resident branch, the residue after subtracting the common elements, projected
    /// to ids. Empty residues are skipped, each residue is sorted ascending, and the outer
    /// collection is sorted lexicographically.
    ///
    /// Each residue reads as "one of these is the resolution of this branch" --- though the
    /// formula does not track which items occur together across residues.
    pub fn possibles(&self) -> Vec<Vec<ItemId>> {
        let common = self.common_elements();

        let mut residues: Vec<Vec<ItemId>> = Vec::with_capacity(self.branches.len());

        for branch in &self.branches {
            // Branch literals arrive sorted by item, so the projection is sorted already.
            let residue: Vec<ItemId> = branch
                .literals()
                .filter(|literal| !common.contains(literal))
                .map(|literal| literal.item())
                .collect();

            if !residue.is_empty() {
                residues.push(residue);
            }
        }

        residues.sort_unstable();
        residues
    }

    /// Whether some item of `ids` is known to be held.
    ///
    /// Equivalent to a non-empty intersection of [pos_elements](Formula::pos_elements) and
    /// `ids` --- used so a caller holding the true assignment can short-circuit a yes/no
    /// question without prompting.
    pub fn contains_any(&self, ids: &[ItemId]) -> bool {
        let held = self.pos_elements();
        ids.iter().any(|id| held.contains(id))
    }
}
