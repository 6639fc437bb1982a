//! Main entry point for the block-rolling puzzle.
//!
//! Loads the bundled level catalog, builds the initial game state, and runs
//! the interactive terminal loop.

use std::error::Error;

pub mod config;
mod game;

use game::game_loop::run_game_loop;
use game::maps::load_catalog;
use game::state::GameState;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Every bundled level is validated here, before the game starts.
    let catalog = load_catalog()?;
    let mut game_state = GameState::new(catalog)?;

    run_game_loop(&mut game_state)
}
