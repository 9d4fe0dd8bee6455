//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Contradictory evidence is *not* an error --- a self-contradictory branch is silently
//!   pruned, and a formula driven to zero branches reports as such through
//!   [is_collapsed](crate::formula::Formula::is_collapsed) rather than through an error.

/// Noted errors from mutating a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// An assertion was made over an empty collection of ids.
    ///
    /// Both assertions require a non-empty collection --- an empty disjunction is false, and
    /// distributing it would (incorrectly) erase every resident branch.
    EmptyAssertion,

    /// Distributing an assertion would exceed the configured branch bound.
    ///
    /// The formula is unchanged.
    BranchBound {
        /// The count of branches the assertion would have materialised.
        required: usize,

        /// The configured bound.
        bound: usize,
    },
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAssertion => write!(f, "An assertion requires at least one id"),
            Self::BranchBound { required, bound } => {
                write!(f, "{required} branches required, bound by {bound}")
            }
        }
    }
}

impl std::error::Error for FormulaError {}

/// Noted errors from the game layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameError {
    /// An error from the formula of some player.
    Formula(FormulaError),

    /// The deck is too small to deal the requested hands.
    ShortDeck {
        /// The count of cards the hands require.
        required: usize,

        /// The count of cards available once the solution is set aside.
        available: usize,
    },
}

impl From<FormulaError> for GameError {
    fn from(e: FormulaError) -> Self {
        GameError::Formula(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formula(e) => write!(f, "{e}"),
            Self::ShortDeck {
                required,
                available,
            } => {
                write!(f, "{required} cards required, {available} available")
            }
        }
    }
}

impl std::error::Error for GameError {}
