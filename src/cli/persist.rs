//! Saving and loading the player table.
//!
//! The table is the whole game state: each player carries its tracked hand, and branches
//! carry no behaviour, so a JSON rendering of the players round-trips everything.

use std::{fs::File, io::BufReader, path::Path};

use sleuth::game::player::Player;

/// Write the player table to `path` as JSON.
pub fn save_players(path: &Path, players: &[Player]) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, players)?;
    Ok(())
}

/// Read a player table from `path`.
pub fn load_players(path: &Path) -> Result<Vec<Player>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let players = serde_json::from_reader(BufReader::new(file))?;
    Ok(players)
}
