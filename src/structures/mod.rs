//! Key structures, such as literals and branches.
//!
//! Most structures are made of a trait to capture the key features of the structure and a
//! 'canonical' implementation of the trait.
//! Use of a trait or its canonical implementation within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [branches](branch), interpreted as the disjunction of those
//! branches (and so is a disjunction of conjunctions over literals --- disjunctive normal
//! form).
//!
//! The disjunction of branches resident in a [formula](crate::formula::Formula) is always
//! equivalent to the conjunction of the evidence asserted against the formula --- though the
//! resident branches may differ from a naive distribution of that evidence due to the removal
//! of contradictory and redundant branches.
//!
//! ## Universes
//!
//! A *universe* is some finite set of [items](item) about which evidence may be asserted.
//! Universes do not have an implementation.
//! Instead, a caller maps whatever it reasons about (cards, categories, etc.) onto a
//! contiguous range of item identifiers, and is responsible for keeping assertions within
//! that range --- the engine does not validate identifiers against any universe.

pub mod branch;
pub mod item;
pub mod literal;
