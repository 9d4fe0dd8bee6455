/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing
issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [formula](crate::formula) mutation.
    pub const FORMULA: &str = "formula";

    /// Logs related to the removal of contradictory and redundant branches.
    pub const PRUNE: &str = "prune";

    /// Logs related to the [game](crate::game) layer.
    pub const GAME: &str = "game";

    /// Logs related to [simulated games](crate::game::automate).
    pub const AUTOMATE: &str = "automate";
}
