//! Simulated games: random, or scripted for tests.
//!
//! A game runs as a sequence of suggestion rounds over a table of players with dealt (true)
//! hands. Suggesters rotate through the table. Each responder after the suggester is checked
//! in turn: a responder holding none of the suggested cards passes, the first responder
//! holding one shows it --- face up when the suggester is the CPU player, unseen otherwise
//! --- and the round ends. Trackers update from each response, and the game stops once the
//! solution is determined or the suggestions run out.
//!
//! [automate] deals a hidden solution and random hands, then drives random suggestions; it is
//! deterministic under a seeded rng:
//!
//! ```rust
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use sleuth::game::{automate::automate, deck::Deck, player::Player};
//! let deck = Deck::default();
//! let table = || {
//!     let mut players = vec![
//!         Player::new("Ada", 6),
//!         Player::new("Ben", 6),
//!         Player::new("Cy", 6),
//!     ];
//!     players[0].is_cpu = true;
//!     players
//! };
//!
//! let mut players_a = table();
//! let mut players_b = table();
//!
//! let outcome_a = automate(&mut players_a, &deck, &mut StdRng::seed_from_u64(23), 100).unwrap();
//! let outcome_b = automate(&mut players_b, &deck, &mut StdRng::seed_from_u64(23), 100).unwrap();
//!
//! assert_eq!(outcome_a.true_solution, outcome_b.true_solution);
//! assert_eq!(outcome_a.suggestions_used, outcome_b.suggestions_used);
//! ```
//!
//! [run_script] replays a fixed deal and a fixed sequence of suggestions.

use rand::{seq::SliceRandom, Rng};

use crate::{
    misc::log::targets::{self},
    structures::item::ItemId,
    types::err::{self},
};

use super::{
    deck::Deck,
    player::Player,
    solution::{definite_solution, found_solution},
};

use std::collections::BTreeSet;

/// The result of a simulated game.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// The solution triple hidden during the deal.
    pub true_solution: [ItemId; 3],

    /// The solution cards the trackers determined.
    pub deduced: BTreeSet<ItemId>,

    /// The count of suggestions made.
    pub suggestions_used: usize,
}

/// A fixed game: hands, solution, and suggestions to replay.
#[derive(Clone, Debug)]
pub struct Script {
    /// A true hand per player, ordered as the player table.
    pub true_hands: Vec<Vec<ItemId>>,

    /// The hidden solution, as per-category indices (suspect, weapon, room).
    pub true_solution: [usize; 3],

    /// Suggestions as (suggester index, per-category indices).
    pub suggestions: Vec<(usize, [usize; 3])>,
}

/// Deal a hidden solution and random hands, then drive random suggestions until the solution
/// is found or `suggestion_budget` suggestions have been made.
pub fn automate(
    players: &mut [Player],
    deck: &Deck,
    rng: &mut impl Rng,
    suggestion_budget: usize,
) -> Result<Outcome, err::GameError> {
    let true_solution = deal(players, deck, rng)?;
    log::info!(target: targets::AUTOMATE, "Dealt, solution {true_solution:?}.");

    let mut suggestions_used = 0;

    for round in 0..suggestion_budget {
        let suggester = round % players.len();
        let query = deck.absolute(
            rng.random_range(0..deck.suspect_count()),
            rng.random_range(0..deck.weapon_count()),
            rng.random_range(0..deck.room_count()),
        );
        suggestions_used = round + 1;

        suggestion_round(players, suggester, query)?;

        if found_solution(players) {
            break;
        }
    }

    Ok(Outcome {
        true_solution,
        deduced: definite_solution(players),
        suggestions_used,
    })
}

/// Replay a scripted game until the solution is found or the script runs out.
///
/// The script's hands are taken as dealt --- any CPU player is expected to have been
/// constructed with its scripted hand as knowns.
pub fn run_script(
    players: &mut [Player],
    deck: &Deck,
    script: &Script,
) -> Result<Outcome, err::GameError> {
    for (player, hand) in players.iter_mut().zip(&script.true_hands) {
        player.true_hand = Some(hand.clone());
    }

    let [suspect, weapon, room] = script.true_solution;
    let true_solution = deck.absolute(suspect, weapon, room);

    let mut suggestions_used = 0;

    for (suggester, triple) in &script.suggestions {
        let query = deck.absolute(triple[0], triple[1], triple[2]);
        suggestions_used += 1;

        suggestion_round(players, *suggester, query)?;

        if found_solution(players) {
            break;
        }
    }

    Ok(Outcome {
        true_solution,
        deduced: definite_solution(players),
        suggestions_used,
    })
}

/// One suggestion round: responses from the players after `suggester`, in table order, with
/// every tracker updated from the response seen.
fn suggestion_round(
    players: &mut [Player],
    suggester: usize,
    query: [ItemId; 3],
) -> Result<(), err::GameError> {
    log::info!(
        target: targets::AUTOMATE,
        "{} suggested {query:?}.",
        players[suggester].name
    );

    let suggester_is_cpu = players[suggester].is_cpu;

    for offset in 1..players.len() {
        let responder = &mut players[(suggester + offset) % players.len()];

        let shown = responder
            .true_hand
            .as_ref()
            .and_then(|hand| query.iter().find(|card| hand.contains(*card)))
            .copied();

        match shown {
            None => responder.passed(&query)?,

            Some(card) => {
                if suggester_is_cpu {
                    responder.saw_card(card)?;
                } else {
                    responder.showed_unknown(&query)?;
                }
                break;
            }
        }
    }

    Ok(())
}

/// Set aside a random solution triple and deal the remaining cards.
///
/// Every player receives `card_count` cards as a true hand, and a CPU player's tracker is
/// primed from its dealt hand. Cards beyond the players' needs stay undealt, matching a
/// physical game with leftover cards face down.
fn deal(
    players: &mut [Player],
    deck: &Deck,
    rng: &mut impl Rng,
) -> Result<[ItemId; 3], err::GameError> {
    let solution = deck.absolute(
        rng.random_range(0..deck.suspect_count()),
        rng.random_range(0..deck.weapon_count()),
        rng.random_range(0..deck.room_count()),
    );

    let mut undealt: Vec<ItemId> = deck
        .all_ids()
        .into_iter()
        .filter(|id| !solution.contains(id))
        .collect();

    let required: usize = players.iter().map(|player| player.card_count).sum();
    if required > undealt.len() {
        return Err(err::GameError::ShortDeck {
            required,
            available: undealt.len(),
        });
    }

    undealt.shuffle(rng);

    for player in players.iter_mut() {
        let hand: Vec<ItemId> = undealt.drain(..player.card_count).collect();

        if player.is_cpu {
            // A CPU player sees its own cards, so its tracker starts fully resolved.
            player.hand = Player::cpu(player.name.clone(), &hand, deck)?.hand;
        }

        player.true_hand = Some(hand);
    }

    Ok(solution)
}
