//! Terminal rendering system.
//!
//! Prints the level grid and block state for the interactive demo loop.

use crate::game::entities::Block;
use crate::game::level::{Level, TileKind};
use crate::game::systems::rules::occupied_cells;
use crate::game::types::{BlockPos, BlockState};

/// Print the grid with the block footprint overlaid.
pub fn print_level(level: &Level, block: &Block) {
    let footprint = occupied_cells(block.pos, block.state);
    for i in 0..level.rows() {
        for j in 0..level.cols() {
            let here = BlockPos {
                hi: i as i32 * 2,
                hj: j as i32 * 2,
            };
            let symbol = if !block.is_falling && footprint.contains(&here) {
                "[]".to_string()
            } else {
                match level.tile(i as i32, j as i32) {
                    None => "  ".to_string(),
                    Some(t) if !t.visible => "··".to_string(),
                    Some(t) => match t.kind {
                        TileKind::Normal => "██".to_string(),
                        TileKind::Start => "▒▒".to_string(),
                        TileKind::Finish => "▚▚".to_string(),
                        TileKind::Switch { .. } => "◉◉".to_string(),
                        TileKind::Teleporter { .. } => "◍◍".to_string(),
                    },
                }
            };
            print!("{:<3}", symbol);
        }
        println!("\n");
    }
}

/// Print the block position, state and turn counter.
pub fn print_block_state(block: &Block, nb_turn: u32) {
    let state = match block.state {
        BlockState::Standing => "standing",
        BlockState::CrouchedWidth => "lying sideways",
        BlockState::CrouchedHeight => "lying lengthwise",
    };
    println!(
        "Turn {} | {} at ({}, {}), height {}",
        nb_turn,
        state,
        block.pos.hi as f32 / 2.0,
        block.pos.hj as f32 / 2.0,
        block.height()
    );
    println!();
}
