//! Interactive game loop for the terminal.
//!
//! Reads arrow keys from stdin, applies moves to the rules core and reacts
//! to the turn outcome.

use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::game::FALL_RESTART_DELAY_MS;
use crate::game::state::{GameState, TurnOutcome};
use crate::game::systems::{print_block_state, print_level};
use crate::game::types::Direction;

enum Input {
    Move(Direction),
    Restart,
    Quit,
}

/// Prompt the user for the next input.
fn get_player_input() -> io::Result<Option<Input>> {
    print!("Enter direction (← ↑ ↓ →), r to restart, q to quit, then press Enter: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(match input.trim() {
        "\x1b[A" => Some(Input::Move(Direction::Up)),
        "\x1b[B" => Some(Input::Move(Direction::Down)),
        "\x1b[D" => Some(Input::Move(Direction::Left)),
        "\x1b[C" => Some(Input::Move(Direction::Right)),
        "r" => Some(Input::Restart),
        "q" => Some(Input::Quit),
        _ => None,
    })
}

fn print_level_intro(game_state: &GameState) {
    println!("{}\n", game_state.level_text());
    print_level(&game_state.level, &game_state.block);
}

/// Run the game from the first catalog level to the last.
pub fn run_game_loop(game_state: &mut GameState) -> Result<(), Box<dyn Error>> {
    print_level_intro(game_state);

    loop {
        let direction = match get_player_input()? {
            Some(Input::Move(d)) => d,
            Some(Input::Restart) => {
                game_state.restart_level()?;
                print_level_intro(game_state);
                continue;
            }
            Some(Input::Quit) => break,
            None => continue,
        };

        // Dropped inputs (block busy) just re-prompt.
        if game_state.begin_move(direction).is_none() {
            continue;
        }

        match game_state.resolve_turn() {
            TurnOutcome::Continue => {
                print_block_state(&game_state.block, game_state.nb_turn);
                print_level(&game_state.level, &game_state.block);
            }
            TurnOutcome::Fell => {
                print_level(&game_state.level, &game_state.block);
                println!("The block tumbled into the void!");
                thread::sleep(Duration::from_millis(FALL_RESTART_DELAY_MS));
                game_state.restart_level()?;
                print_level_intro(game_state);
            }
            TurnOutcome::LevelComplete => {
                println!("Level cleared!\n");
                game_state.advance_level()?;
                print_level_intro(game_state);
            }
            TurnOutcome::GameComplete => {
                println!(
                    "All levels cleared in {} turns. Well played!",
                    game_state.nb_turn
                );
                break;
            }
        }
    }

    Ok(())
}
