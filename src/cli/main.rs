//! An interactive assistant for Clue-style deduction games.
//!
//! One tracked hand per player, updated from the suggestions and responses entered at the
//! menu. The engine does the reasoning; this binary only maps cards to ids and ids back to
//! names.

use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};

use sleuth::game::{
    automate::automate,
    deck::Deck,
    player::Player,
    solution::{definite_solution, likely_solution, sync_players},
};
use sleuth::types::err::GameError;

use menu::{get_bool, get_number, pause, prompt};

mod menu;
mod persist;

#[derive(Parser)]
#[command(name = "sleuth", about = "An assistant for Clue-style deduction games.")]
struct Args {
    /// Load a saved player table before opening the menu.
    #[arg(long)]
    load: Option<PathBuf>,

    /// The path used by save and load at the menu.
    #[arg(long, default_value = "clue.json")]
    table: PathBuf,

    /// Seed for simulated games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let deck = Deck::default();

    let mut players: Vec<Player> = Vec::new();

    if let Some(path) = &args.load {
        match persist::load_players(path) {
            Ok(table) => players = table,
            Err(e) => {
                println!("Failed to load {path:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    loop {
        println!();
        println!("Clue");
        println!(" 1 Add suggestion");
        println!(" 2 Sync players");
        println!(" 3 Player hands");
        println!(" 4 Player possibles");
        println!(" 5 Likely solution cards");
        println!(" 6 Definite solution cards");
        println!(" 7 Automate");
        println!(" 8 Add player");
        println!(" 9 Delete player");
        println!(" s Save   l Load   q Quit");

        match prompt("> ").as_str() {
            "1" => {
                if let Err(e) = add_suggestion(&mut players, &deck) {
                    pause(&format!("The current suggestion was aborted. Cause: {e}"));
                }
            }

            "2" => match sync_players(&mut players) {
                Ok(()) => pause("Players synchronised."),
                Err(e) => pause(&format!("Sync failed: {e}")),
            },

            "3" => show_hands(&players, &deck),

            "4" => show_possibles(&players, &deck),

            "5" => {
                for (id, count) in likely_solution(&players) {
                    if let Some(name) = deck.name(id) {
                        println!("{name}: {count} player(s) without");
                    }
                }
                pause("");
            }

            "6" => {
                let deduced: Vec<_> = definite_solution(&players).into_iter().collect();
                pause(&format!("Definite solution: {:?}", deck.names(&deduced)));
            }

            "7" => run_automate(&mut players, &deck, args.seed),

            "8" => add_player(&mut players, &deck),

            "9" => delete_player(&mut players),

            "s" => match persist::save_players(&args.table, &players) {
                Ok(()) => pause(&format!("Saved to {:?}", args.table)),
                Err(e) => pause(&format!("Save failed: {e}")),
            },

            "l" => match persist::load_players(&args.table) {
                Ok(table) => {
                    players = table;
                    pause(&format!("Loaded from {:?}", args.table));
                }
                Err(e) => pause(&format!("Load failed: {e}")),
            },

            "q" => break,

            _ => {}
        }
    }
}

/// Enter a suggestion made by a player, along with the responses of the other players.
fn add_suggestion(players: &mut [Player], deck: &Deck) -> Result<(), GameError> {
    if players.is_empty() {
        pause("No players.");
        return Ok(());
    }

    for (index, player) in players.iter().enumerate() {
        println!("{} {}", index + 1, player.name);
    }
    let Some(suggester) = get_number("Enter the suggester", 1, players.len()) else {
        return Ok(());
    };
    let suggester = suggester - 1;

    print_categories(deck);
    let Some(suspect) = get_number("Suspect", 1, deck.suspect_count()) else {
        return Ok(());
    };
    let Some(weapon) = get_number("Weapon", 1, deck.weapon_count()) else {
        return Ok(());
    };
    let Some(room) = get_number("Room", 1, deck.room_count()) else {
        return Ok(());
    };

    let query = deck.absolute(suspect - 1, weapon - 1, room - 1);
    if !get_bool(
        &format!("Suggestion is {:?}. OK?", deck.names(&query)),
        Some(true),
    ) {
        return Ok(());
    }

    let suggester_is_cpu = players[suggester].is_cpu;

    for offset in 1..players.len() {
        let index = (suggester + offset) % players.len();

        if players[index].is_cpu {
            // The CPU player's hand is fully known, so no prompt is needed.
            if players[index].holds_any(&query) {
                pause("The CPU player showed a card.");
                break;
            }
            continue;
        }

        println!();
        println!("Response from {}", players[index].name);

        if !get_bool("Was a card shown?", None) {
            players[index].passed(&query)?;
            continue;
        }

        if suggester_is_cpu {
            for (position, card) in query.iter().enumerate() {
                if let Some(name) = deck.name(*card) {
                    println!("{} {name}", position + 1);
                }
            }
            match get_number("Which card was shown?", 1, query.len()) {
                Some(position) => players[index].saw_card(query[position - 1])?,
                None => return Ok(()),
            }
        } else {
            players[index].showed_unknown(&query)?;
        }
        break;
    }

    Ok(())
}

fn show_hands(players: &[Player], deck: &Deck) {
    for player in players {
        println!("{}", player.name);

        let held: Vec<_> = player.hand.pos_elements().into_iter().collect();
        if !held.is_empty() {
            println!("In hand: {}", deck.names(&held).join(", "));
        }

        let absent: Vec<_> = player.hand.neg_elements().into_iter().collect();
        if !absent.is_empty() {
            println!("Not in hand: {}", deck.names(&absent).join(", "));
        }
        println!();
    }
    pause("");
}

fn show_possibles(players: &[Player], deck: &Deck) {
    for player in players {
        println!("{}", player.name);
        for group in player.possibles() {
            println!("  one of {:?}", deck.names(&group));
        }
        println!();
    }
    pause("");
}

fn run_automate(players: &mut [Player], deck: &Deck, seed: Option<u64>) {
    if players.is_empty() {
        pause("No players.");
        return;
    }

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    println!("Simulating with seed {seed}.");

    match automate(players, deck, &mut rng, 100) {
        Ok(outcome) => {
            println!("True solution: {:?}", deck.names(&outcome.true_solution));
            let deduced: Vec<_> = outcome.deduced.into_iter().collect();
            println!("Deduced:       {:?}", deck.names(&deduced));
            pause(&format!("Suggestions used: {}", outcome.suggestions_used));
        }
        Err(e) => pause(&format!("Simulation failed: {e}")),
    }
}

fn add_player(players: &mut Vec<Player>, deck: &Deck) {
    let name = prompt("Player name: ");
    if name.is_empty() {
        return;
    }

    let Some(card_count) = get_number("Number of cards", 1, 9) else {
        return;
    };

    let cpu_allowed = !players.iter().any(|player| player.is_cpu);
    let is_cpu = cpu_allowed && get_bool("Is this player the CPU?", Some(false));

    if !is_cpu {
        players.push(Player::new(name, card_count));
        return;
    }

    print_all_cards(deck);
    let Some(cards) = menu::get_numbers("Enter card numbers", card_count, 1, deck.size()) else {
        return;
    };
    let knowns: Vec<_> = cards
        .iter()
        .map(|card| (card - 1) as sleuth::structures::item::ItemId)
        .collect();

    match Player::cpu(name, &knowns, deck) {
        Ok(player) => players.push(player),
        Err(e) => pause(&format!("Adding the player was aborted. Cause: {e}")),
    }
}

fn delete_player(players: &mut Vec<Player>) {
    if players.is_empty() {
        pause("No players.");
        return;
    }

    for (index, player) in players.iter().enumerate() {
        println!("{} {}", index + 1, player.name);
    }

    if let Some(index) = get_number("Delete which player?", 1, players.len()) {
        if get_bool(
            &format!("Are you sure you want to delete {}?", players[index - 1].name),
            Some(true),
        ) {
            players.remove(index - 1);
        }
    }
}

fn print_categories(deck: &Deck) {
    let mut id = 0;
    for count in [deck.suspect_count(), deck.weapon_count(), deck.room_count()] {
        for position in 0..count {
            if let Some(name) = deck.name(id) {
                println!("{} {name}", position + 1);
            }
            id += 1;
        }
        println!();
    }
}

fn print_all_cards(deck: &Deck) {
    for (position, id) in deck.all_ids().into_iter().enumerate() {
        if let Some(name) = deck.name(id) {
            println!("{} {name}", position + 1);
        }
    }
}
