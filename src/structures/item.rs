/*!
(The internal representation of) an item, e.g. a card in a deck.

Items are things to which assigning a (boolean) value --- held or absent --- is of interest.
An item is an opaque index into some externally defined finite universe: the engine attaches
no meaning to an identifier beyond equality and order, and a caller is responsible for the
mapping between identifiers and whatever is being reasoned about.

Each item is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an item.

That is, the items of a universe are [0..*m*) for some *m*.

This representation allows items to be used as the indices of a structure, e.g. `names[i]`,
without taking too much space.

# Notes
- Out-of-universe identifiers are never detected by the engine. Validation, if desired,
  belongs to the caller (see [Deck](crate::game::deck::Deck) for an example).
*/

/// An item, an opaque index into an externally defined universe.
pub type ItemId = u32;
