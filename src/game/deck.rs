//! The deck --- three card categories mapped onto a contiguous id space.
//!
//! A suggestion in a Clue-style game names one card from each category: a suspect, a weapon,
//! and a room.
//! The engine reasons over bare [ItemId]s, so the deck owns the mapping: suspects occupy
//! `[0, suspects)`, weapons the ids after the suspects, and rooms the ids after the weapons.
//!
//! ```rust
//! # use sleuth::game::deck::Deck;
//! let deck = Deck::default();
//! assert_eq!(deck.size(), 21);
//! assert_eq!(deck.name(0), Some("Colonel Mustard"));
//!
//! // The second weapon and the first room, as absolute ids.
//! let query = deck.absolute(3, 1, 0);
//! assert_eq!(deck.name(query[1]), Some("candlestick"));
//! assert_eq!(deck.name(query[2]), Some("hall"));
//! ```

use serde::{Deserialize, Serialize};

use crate::structures::item::ItemId;

/// The category of a card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

/// A deck of named cards in three categories, identified with the ids `[0, size)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// The suspect cards, occupying the first ids.
    suspects: Vec<String>,

    /// The weapon cards, occupying the ids after the suspects.
    weapons: Vec<String>,

    /// The room cards, occupying the ids after the weapons.
    rooms: Vec<String>,
}

impl Default for Deck {
    /// The standard 21-card deck.
    fn default() -> Self {
        let own = |names: &[&str]| names.iter().map(|name| name.to_string()).collect();

        Deck {
            suspects: own(&[
                "Colonel Mustard",
                "Mr. Green",
                "Professor Plum",
                "Miss Scarlet",
                "Ms White",
                "Mrs. Peacock",
            ]),
            weapons: own(&["lead pipe", "candlestick", "rope", "knife", "wrench", "pistol"]),
            rooms: own(&[
                "hall",
                "conservatory",
                "library",
                "dining room",
                "kitchen",
                "billiard room",
                "study",
                "lounge",
                "ball room",
            ]),
        }
    }
}

impl Deck {
    /// The count of cards in the deck.
    pub fn size(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }

    /// The count of suspect cards.
    pub fn suspect_count(&self) -> usize {
        self.suspects.len()
    }

    /// The count of weapon cards.
    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    /// The count of room cards.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Every id of the deck, ascending.
    pub fn all_ids(&self) -> Vec<ItemId> {
        (0..self.size() as ItemId).collect()
    }

    /// The name of the card at `id`, if the id is within the deck.
    pub fn name(&self, id: ItemId) -> Option<&str> {
        let mut index = id as usize;

        for category in [&self.suspects, &self.weapons, &self.rooms] {
            match category.get(index) {
                Some(name) => return Some(name.as_str()),
                None => index -= category.len(),
            }
        }

        None
    }

    /// The names of the cards at `ids`, skipping ids outside the deck.
    pub fn names(&self, ids: &[ItemId]) -> Vec<&str> {
        ids.iter().filter_map(|id| self.name(*id)).collect()
    }

    /// The category of the card at `id`, if the id is within the deck.
    pub fn category(&self, id: ItemId) -> Option<Category> {
        let id = id as usize;
        if id < self.suspects.len() {
            Some(Category::Suspect)
        } else if id < self.suspects.len() + self.weapons.len() {
            Some(Category::Weapon)
        } else if id < self.size() {
            Some(Category::Room)
        } else {
            None
        }
    }

    /// A suggestion triple of per-category indices as absolute ids.
    ///
    /// Indices are not checked against category sizes --- an oversized index lands in a later
    /// category, as with the ids the engine itself never validates.
    pub fn absolute(&self, suspect: usize, weapon: usize, room: usize) -> [ItemId; 3] {
        [
            suspect as ItemId,
            (self.suspects.len() + weapon) as ItemId,
            (self.suspects.len() + self.weapons.len() + room) as ItemId,
        ]
    }
}
