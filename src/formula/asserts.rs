//! The two mutators, and the settling pass which follows each of them.

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        branch::{Branch, CBranch},
        item::ItemId,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::Formula;

impl Formula {
    /// Assert "at least one of `ids` is held".
    ///
    /// The disjunction is distributed over the resident branches (AND-over-OR distribution):
    /// - With zero resident branches the result is one singleton positive branch per id.
    /// - Otherwise, every resident branch is paired with every id, giving the branch extended
    ///   with the positive literal of the id.
    ///
    /// Distribution materialises branches × ids candidates before settling shrinks the
    /// collection back down, and an assertion which would exceed the configured branch bound
    /// fails up front, leaving the formula unchanged.
    ///
    /// Ids are not validated against any universe.
    pub fn assert_disjunction(&mut self, ids: &[ItemId]) -> Result<(), err::FormulaError> {
        if ids.is_empty() {
            return Err(err::FormulaError::EmptyAssertion);
        }

        let required = std::cmp::max(self.branches.len(), 1) * ids.len();
        if required > self.config.branch_bound {
            return Err(err::FormulaError::BranchBound {
                required,
                bound: self.config.branch_bound,
            });
        }

        let mut candidates: Vec<CBranch> = Vec::with_capacity(required);

        if self.branches.is_empty() {
            for id in ids {
                candidates.push(CBranch::from_iter([CLiteral::new(*id, true)]));
            }
        } else {
            for branch in &self.branches {
                for id in ids {
                    candidates.push(branch.extended(CLiteral::new(*id, true)));
                }
            }
        }

        self.settle(candidates);
        self.asserted = true;

        log::trace!(
            target: targets::FORMULA,
            "Disjunction over {} ids settled to {} branches.",
            ids.len(),
            self.branches.len()
        );

        Ok(())
    }

    /// Assert "every one of `ids` is absent".
    ///
    /// A conjunction, and so merged into every resident branch rather than distributed:
    /// - With zero resident branches the result is a single branch of every negative literal.
    /// - Otherwise, every resident branch is extended with every negative literal, one-to-one.
    ///
    /// Ids are not validated against any universe.
    pub fn assert_negation(&mut self, ids: &[ItemId]) -> Result<(), err::FormulaError> {
        if ids.is_empty() {
            return Err(err::FormulaError::EmptyAssertion);
        }

        let candidates: Vec<CBranch> = if self.branches.is_empty() {
            vec![ids.iter().map(|id| CLiteral::new(*id, false)).collect()]
        } else {
            self.branches
                .iter()
                .map(|branch| {
                    let mut fresh = branch.clone();
                    for id in ids {
                        fresh.insert(CLiteral::new(*id, false));
                    }
                    fresh
                })
                .collect()
        };

        self.settle(candidates);
        self.asserted = true;

        log::trace!(
            target: targets::FORMULA,
            "Negation over {} ids settled to {} branches.",
            ids.len(),
            self.branches.len()
        );

        Ok(())
    }

    /// Settle a collection of candidate branches as the resident branches.
    ///
    /// Three passes, in order:
    /// 1. Prune: a candidate containing an item with both polarities is unsatisfiable, and
    ///    dropping it from the disjunction preserves the truth of the formula.
    /// 2. Deduplicate: exact-duplicate candidates collapse through the set container.
    /// 3. Subsume: a branch properly contained in another is dropped in favour of the larger
    ///    branch, which records how the open disjunctions may resolve.
    fn settle(&mut self, candidates: Vec<CBranch>) {
        let mut distinct: BTreeSet<CBranch> = BTreeSet::default();

        for candidate in candidates {
            if candidate.contradictory() {
                log::trace!(target: targets::PRUNE, "Pruned contradictory branch {candidate}.");
                continue;
            }
            distinct.insert(candidate);
        }

        self.branches = distinct
            .iter()
            .filter(|branch| {
                let subsumed = distinct.iter().any(|other| branch.proper_subset_of(other));
                if subsumed {
                    log::trace!(target: targets::PRUNE, "Dropped subsumed branch {branch}.");
                }
                !subsumed
            })
            .cloned()
            .collect();
    }
}
