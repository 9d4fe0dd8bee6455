//! Literals are items paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an item and a polarity (and a few
//! other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [CLiteral] structure, made of
//! an item and a boolean.
//!
//! An example:
//!
//! ```rust
//! # use sleuth::structures::literal::CLiteral;
//! # use sleuth::structures::literal::Literal;
//! let item = 79;
//! let polarity = true;
//! let literal = CLiteral::new(item, polarity);
//!
//! assert!(literal.polarity());
//! assert!(literal.item().cmp(&79).is_eq());
//! assert!(literal.negate().polarity().cmp(&false).is_eq());
//!
//! assert!(literal.cmp(&CLiteral::new(79, !false)).is_eq());
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals are ordered by item and then polarity, with the (Rust default) ordering of
//!     'false' being (strictly) less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as
//!     members of sets, indices of maps, etc.

#[doc(hidden)]
mod c_literal;

use serde::{Deserialize, Serialize};

use crate::structures::item::ItemId;

/// Something which has methods for returning an item and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an item with a boolean.
    fn new(item: ItemId, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The item of the literal.
    fn item(&self) -> ItemId;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its 'canonical' form of an item paired with a boolean.
    fn canonical(&self) -> CLiteral;
}

/// The representation of a literal as an item paired with a boolean.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CLiteral {
    /// The item of the literal.
    item: ItemId,

    /// The polarity of the literal.
    polarity: bool,
}
