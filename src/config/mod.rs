/*!
Configuration of a formula.

All configuration for a formula is contained within the formula, set at construction via
[from_config](crate::formula::Formula::from_config).
*/

use serde::{Deserialize, Serialize};

/// The primary configuration structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormulaConfig {
    /// An upper bound on the count of branches materialised by a single assertion, checked
    /// before distribution.
    ///
    /// Distributing a disjunction multiplies the resident branch count by the count of
    /// asserted ids, and the bound keeps a caller with an oversized universe from exhausting
    /// memory. An assertion which would exceed the bound fails with
    /// [BranchBound](crate::types::err::FormulaError::BranchBound) and leaves the formula
    /// unchanged.
    pub branch_bound: usize,
}

impl Default for FormulaConfig {
    /// The default bound is far beyond anything reachable by the intended scale of a few
    /// dozen items and a few hundred updates.
    fn default() -> Self {
        FormulaConfig {
            branch_bound: 1 << 16,
        }
    }
}
