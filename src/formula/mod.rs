/*!
The formula --- against which evidence is asserted and from which facts are derived.

A formula holds a set of [branches](crate::structures::branch) interpreted as their
disjunction: each branch is one way the evidence asserted so far may be consistent with the
unknown assignment being tracked.

Evidence arrives in two shapes, and each is folded into the resident branches by the matching
mutator:
- [assert_disjunction](Formula::assert_disjunction) --- "at least one of these items is held".
- [assert_negation](Formula::assert_negation) --- "every one of these items is absent".

Each mutator settles the formula before returning: candidate branches containing an item with
both polarities are pruned as unsatisfiable, exact-duplicate branches collapse through the set
container, and a branch properly contained in another resident branch is dropped in favour of
the larger branch.
There is no observable intermediate state.

Derived facts are read through pure queries: [common_elements](Formula::common_elements),
[pos_elements](Formula::pos_elements), [neg_elements](Formula::neg_elements),
[possibles](Formula::possibles), and [contains_any](Formula::contains_any).

# Example

```rust
# use sleuth::formula::Formula;
let mut hand = Formula::default();

assert!(hand.assert_disjunction(&[1, 2, 3]).is_ok());
assert!(hand.assert_negation(&[2, 3]).is_ok());

// Only branches keeping item 1 survive.
assert_eq!(hand.pos_elements().into_iter().collect::<Vec<_>>(), vec![1]);
assert!(hand.possibles().is_empty());
```

# The empty formula

Zero resident branches is both the initial state and the state reached when evidence prunes
every branch.
The queries cannot distinguish the two, so the formula additionally records whether any
assertion was ever made: [ever_asserted](Formula::ever_asserted) together with
[branch_count](Formula::branch_count) lets a caller separate "no evidence yet" from "the
evidence is unsatisfiable" ([is_collapsed](Formula::is_collapsed)), and the engine itself
never picks a meaning.
*/

mod asserts;
mod queries;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{config::FormulaConfig, structures::branch::CBranch};

/// A set of branches interpreted as their disjunction, together with a record of whether any
/// evidence was asserted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Formula {
    /// The resident branches.
    ///
    /// The set container is load-bearing: structural equality of branches collapses exact
    /// duplicates, and iteration order is canonical.
    branches: BTreeSet<CBranch>,

    /// Whether either mutator was ever called, regardless of outcome.
    asserted: bool,

    /// Formula specific configuration parameters.
    config: FormulaConfig,
}

impl Formula {
    /// An empty formula with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty formula with the given configuration.
    pub fn from_config(config: FormulaConfig) -> Self {
        Formula {
            branches: BTreeSet::default(),
            asserted: false,
            config,
        }
    }

    /// The count of resident branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Whether either mutator was ever called.
    pub fn ever_asserted(&self) -> bool {
        self.asserted
    }

    /// Whether evidence was asserted and pruning removed every branch.
    ///
    /// In other words, whether the asserted evidence is unsatisfiable.
    pub fn is_collapsed(&self) -> bool {
        self.asserted && self.branches.is_empty()
    }

    /// An iterator over the resident branches, in canonical order.
    ///
    /// The read surface for persisting a formula --- branches carry no behaviour, and a
    /// formula may be rebuilt from any structured serialisation of them.
    pub fn branches(&self) -> impl Iterator<Item = &CBranch> {
        self.branches.iter()
    }
}
