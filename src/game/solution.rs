//! Inference across the player table.
//!
//! The solution of a Clue-style game is the triple of cards held by no player, so everything
//! here reads the definite facts of every tracked hand side by side.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    misc::log::targets::{self},
    structures::item::ItemId,
    types::err::{self},
};

use super::player::Player;

/// The count of cards in a solution: a suspect, a weapon, and a room.
pub const SOLUTION_SIZE: usize = 3;

/// Propagate definite holdings across the table: if a player definitely holds a card, every
/// other player definitely does not.
///
/// One pass over ordered pairs of players, as a held card is definite and never retracted.
pub fn sync_players(players: &mut [Player]) -> Result<(), err::FormulaError> {
    for holder in 0..players.len() {
        let held = players[holder].hand.pos_elements();
        if held.is_empty() {
            continue;
        }

        for other in 0..players.len() {
            if other == holder {
                continue;
            }

            let known_absent = players[other].hand.neg_elements();
            let fresh: Vec<ItemId> = held
                .iter()
                .filter(|id| !known_absent.contains(id))
                .copied()
                .collect();

            if !fresh.is_empty() {
                log::info!(
                    target: targets::GAME,
                    "Sync: {} lacks {fresh:?}, held by {}.",
                    players[other].name,
                    players[holder].name
                );
                players[other].hand.assert_negation(&fresh)?;
            }
        }
    }

    Ok(())
}

/// Candidate solution cards, ranked.
///
/// Every card some player is known to lack, paired with the count of players known to lack
/// it, most-lacked first --- excluding cards some player is known to hold.
pub fn likely_solution(players: &[Player]) -> Vec<(ItemId, usize)> {
    let mut lack_counts: BTreeMap<ItemId, usize> = BTreeMap::default();
    for player in players {
        for id in player.hand.neg_elements() {
            *lack_counts.entry(id).or_default() += 1;
        }
    }

    let held: BTreeSet<ItemId> = players
        .iter()
        .flat_map(|player| player.hand.pos_elements())
        .collect();

    let mut candidates: Vec<(ItemId, usize)> = lack_counts
        .into_iter()
        .filter(|(id, _)| !held.contains(id))
        .collect();

    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    candidates
}

/// The solution cards, as far as they are settled.
///
/// If exactly [SOLUTION_SIZE] candidates remain they are the solution.
/// Otherwise, the cards every player is known to lack --- a subset of the solution once every
/// hand is resolved.
pub fn definite_solution(players: &[Player]) -> BTreeSet<ItemId> {
    let candidates = likely_solution(players);
    if candidates.len() == SOLUTION_SIZE {
        return candidates.into_iter().map(|(id, _)| id).collect();
    }

    let mut table = players.iter();

    let Some(first) = table.next() else {
        return BTreeSet::default();
    };

    let mut absent_everywhere = first.hand.neg_elements();
    for player in table {
        let absent = player.hand.neg_elements();
        absent_everywhere.retain(|id| absent.contains(id));
    }
    absent_everywhere
}

/// Whether the solution is fully determined.
pub fn found_solution(players: &[Player]) -> bool {
    definite_solution(players).len() == SOLUTION_SIZE
}
