//! A library for tracking propositional knowledge about hidden hands in deduction games.
//!
//! sleuth maintains, for one unknown boolean assignment over a fixed finite universe of item
//! identifiers, a logically equivalent formula in disjunctive normal form, built incrementally
//! from two kinds of evidence:
//!
//! - *Disjunctions* --- "at least one item in this set is held", and:
//! - *Negations* --- "every item in this set is absent".
//!
//! From the formula it is possible to read the items definitely held, the items definitely
//! absent, and the groups of items which remain in unresolved disjunctive uncertainty.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [formula](crate::formula::Formula).
//!
//! A formula is a set of [branches](crate::structures::branch), each branch a conjunction of
//! [literals](crate::structures::literal) over [items](crate::structures::item), interpreted
//! together as the disjunction of those branches.
//! Evidence is folded into the formula through two mutators, with each mutation followed
//! (synchronously, before the mutator returns) by the removal of self-contradictory branches
//! and the collapse of redundant branches.
//!
//! Useful starting points:
//! - The [formula module](crate::formula) for the mutators and the derived-fact queries.
//! - The [structures] to familiarise yourself with the elements of a formula and their
//!   representation (items, literals, branches).
//! - The [game module](crate::game) for a consumer of the engine: players, cross-player
//!   inference, and a randomised game simulation for Clue-style games.
//!
//! # Examples
//!
//! + Track a hand through a sequence of evidence.
//!
//! ```rust
//! # use sleuth::formula::Formula;
//! let mut hand = Formula::default();
//!
//! // At least one of items 1, 2, 3 is held, and likewise for 4, 5, 6.
//! assert!(hand.assert_disjunction(&[1, 2, 3]).is_ok());
//! assert!(hand.assert_disjunction(&[4, 5, 6]).is_ok());
//!
//! // Items 1, 5, and 6 are certainly absent.
//! assert!(hand.assert_negation(&[1, 5, 6]).is_ok());
//!
//! // It follows that item 4 is held, and that one of 2 or 3 is held.
//! assert!(hand.pos_elements().contains(&4));
//! assert!(hand.neg_elements().contains(&5));
//! assert_eq!(hand.possibles(), vec![vec![2], vec![3]]);
//! assert!(hand.contains_any(&[4, 9]));
//! ```
//!
//! + Distinguish a collapsed formula from one which has seen no evidence.
//!
//! ```rust
//! # use sleuth::formula::Formula;
//! let mut hand = Formula::default();
//! assert!(!hand.ever_asserted());
//!
//! assert!(hand.assert_disjunction(&[7]).is_ok());
//! assert!(hand.assert_negation(&[7]).is_ok());
//!
//! // Contradictory evidence pruned every branch, and the flag records that evidence was given.
//! assert_eq!(hand.branch_count(), 0);
//! assert!(hand.is_collapsed());
//! ```
//!
//! # Guiding principles
//!
//! ## Modularity
//!
//! + Interaction between parts happens through documented access points. For example:
//!   - Branches are resident in a formula as a set, and the internal structure of the set is
//!     private --- the derived-fact queries are the supported read surface, together with a
//!     read-only iterator over branches for persistence.
//!   - Literals and branches are defined first as traits whose canonical instantiations are
//!     used when there is 'good reason' to do so.
//!   - Use of external crates is limited to crates which help support modularity, such as
//!     [log](https://docs.rs/log/latest/log/) and [serde](https://docs.rs/serde/latest/serde/).
//!
//! ## Simple efficiency
//!
//! + Distributing a disjunction over the resident branches costs O(branches × ids) before
//!   pruning, and this growth is the known cost of the design --- the engine suits universes
//!   of a few dozen items and a few hundred updates, and a configurable
//!   [branch bound](crate::config::FormulaConfig) guards against larger demands.
//!
//! # Logs
//!
//! Calls to [log!](log) are made with a variety of targets to help narrow output to relevant
//! parts of the library. The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/),
//! logs related to branch pruning can be filtered with `RUST_LOG=prune …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod formula;
pub mod structures;
pub mod types;

pub mod game;

pub mod misc;
