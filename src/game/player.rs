//! A player whose hand is tracked through a formula.
//!
//! Updates mirror the response protocol of a suggestion round:
//! - A player who passes on a suggestion holds none of the suggested cards ---
//!   [passed](Player::passed), a negation.
//! - A player who shows an unseen card holds at least one of the suggested cards ---
//!   [showed_unknown](Player::showed_unknown), a disjunction.
//! - A player who shows a card face up holds exactly that card ---
//!   [saw_card](Player::saw_card), a singleton disjunction.

use serde::{Deserialize, Serialize};

use crate::{
    formula::Formula,
    misc::log::targets::{self},
    structures::item::ItemId,
    types::err::{self},
};

use super::deck::Deck;

/// A player in a Clue-style game, with a tracked hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    /// The display name of the player.
    pub name: String,

    /// The count of cards the player was dealt.
    pub card_count: usize,

    /// Whether this player is the one the assistant plays for.
    ///
    /// The CPU player's own hand is fully known, and responses shown to the CPU player are
    /// seen face up.
    pub is_cpu: bool,

    /// Everything known about the hand.
    pub hand: Formula,

    /// The actual hand, if one was dealt --- used only by simulation.
    pub true_hand: Option<Vec<ItemId>>,
}

impl Player {
    /// A player about whose hand nothing is known.
    pub fn new(name: impl Into<String>, card_count: usize) -> Self {
        Player {
            name: name.into(),
            card_count,
            is_cpu: false,
            hand: Formula::default(),
            true_hand: None,
        }
    }

    /// The CPU player, whose own cards are known up front.
    ///
    /// The hand is primed with a positive singleton per known card and the negation of the
    /// rest of the deck.
    pub fn cpu(
        name: impl Into<String>,
        knowns: &[ItemId],
        deck: &Deck,
    ) -> Result<Self, err::FormulaError> {
        let mut player = Player::new(name, knowns.len());
        player.is_cpu = true;

        let absent: Vec<ItemId> = deck
            .all_ids()
            .into_iter()
            .filter(|id| !knowns.contains(id))
            .collect();

        player.hand.assert_negation(&absent)?;
        for known in knowns {
            player.hand.assert_disjunction(&[*known])?;
        }

        Ok(player)
    }

    /// The player passed on a suggestion: none of the suggested cards are held.
    pub fn passed(&mut self, query: &[ItemId]) -> Result<(), err::FormulaError> {
        log::info!(target: targets::GAME, "{} passed on {query:?}.", self.name);
        self.hand.assert_negation(query)
    }

    /// The player showed a card without it being seen: at least one suggested card is held.
    pub fn showed_unknown(&mut self, query: &[ItemId]) -> Result<(), err::FormulaError> {
        log::info!(target: targets::GAME, "{} showed a card from {query:?}.", self.name);
        self.hand.assert_disjunction(query)
    }

    /// The player showed `card` face up: the card is held.
    pub fn saw_card(&mut self, card: ItemId) -> Result<(), err::FormulaError> {
        log::info!(target: targets::GAME, "{} showed card {card}.", self.name);
        self.hand.assert_disjunction(&[card])
    }

    /// Whether the player is known to hold some card of `query`.
    pub fn holds_any(&self, query: &[ItemId]) -> bool {
        self.hand.contains_any(query)
    }

    /// The unresolved disjunctive groups of the hand.
    pub fn possibles(&self) -> Vec<Vec<ItemId>> {
        self.hand.possibles()
    }
}
