/*!
A consumer of the engine: deduction for Clue-style games.

The game layer tracks one [formula](crate::formula::Formula) per [player](player::Player),
mapping the cards of a [deck](deck::Deck) onto the engine's item identifiers.
Everything here is layered on the four engine operations --- the two assertions and the
derived-fact queries --- and never on formula internals.

- [deck] --- the three card categories and their mapping onto a contiguous id space.
- [player] --- a tracked hand, updated from suggestion responses.
- [solution] --- inference across the player table: synchronisation, and likely/definite
  solution cards.
- [automate] --- a randomised game simulation, deterministic under a seeded rng.
*/

pub mod automate;
pub mod deck;
pub mod player;
pub mod solution;
