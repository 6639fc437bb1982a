use log::{debug, info};

use crate::game::entities::Block;
use crate::game::level::{Level, TileKind};
use crate::game::state::{GameState, TurnOutcome};
use crate::game::types::{BlockPos, BlockState, GridPos};

/// Footprint cell centers in half-tile units: one cell standing, two cells
/// at one half-step either side of the center along the crouch axis.
pub fn occupied_cells(pos: BlockPos, state: BlockState) -> Vec<BlockPos> {
    match state {
        BlockState::Standing => vec![pos],
        BlockState::CrouchedHeight => vec![
            BlockPos {
                hi: pos.hi - 1,
                hj: pos.hj,
            },
            BlockPos {
                hi: pos.hi + 1,
                hj: pos.hj,
            },
        ],
        BlockState::CrouchedWidth => vec![
            BlockPos {
                hi: pos.hi,
                hj: pos.hj - 1,
            },
            BlockPos {
                hi: pos.hi,
                hj: pos.hj + 1,
            },
        ],
    }
}

/// The existing tiles under the block (0, 1 or 2). Empty while a move is in
/// flight. A footprint cell that is off-grid, over a hole, or not
/// tile-aligned contributes nothing.
pub fn tiles_under(level: &Level, block: &Block) -> Vec<GridPos> {
    if block.is_moving {
        return Vec::new();
    }
    occupied_cells(block.pos, block.state)
        .into_iter()
        .filter_map(|hp| hp.to_tile())
        .filter(|&p| level.tile_at(p).is_some())
        .collect()
}

/// True iff every footprint cell rests on an existing, visible tile.
/// A block mid-move is always considered on ground.
pub fn is_on_ground(level: &Level, block: &Block) -> bool {
    if block.is_moving {
        return true;
    }
    occupied_cells(block.pos, block.state).into_iter().all(|hp| {
        hp.to_tile()
            .and_then(|p| level.tile_at(p))
            .is_some_and(|t| t.visible)
    })
}

/// True iff the block stands upright on the finish tile.
pub fn is_on_finish(level: &Level, block: &Block) -> bool {
    if block.is_moving || block.is_falling || block.state != BlockState::Standing {
        return false;
    }
    block.pos == BlockPos::from_tile(level.finish)
}

/// Run the on-step action of the tile at `at`: switches toggle their linked
/// tiles, teleporters move the block's planar center (state and height are
/// untouched). Everything else is a no-op.
pub fn apply_tile_action(level: &mut Level, block: &mut Block, at: GridPos) {
    let Some(tile) = level.tile_at(at) else {
        return;
    };
    match tile.kind.clone() {
        TileKind::Switch { linked } => {
            for pos in &linked {
                level.toggle_visible(*pos);
            }
            debug!(
                "[Game] switch at ({}, {}) toggled {} tile(s)",
                at.i,
                at.j,
                linked.len()
            );
        }
        TileKind::Teleporter { destination } => {
            block.pos = BlockPos::from_tile(destination);
            debug!(
                "[Game] teleported to ({}, {})",
                destination.i, destination.j
            );
        }
        TileKind::Normal | TileKind::Start | TileKind::Finish => {}
    }
}

/// Resolve a completed move: close the movement window, dispatch the tile
/// action when exactly one tile underlies the block, then check for a fall
/// or the finish. The action runs first, so a switch can open the floor
/// under the block and a teleporter can drop it over a hole.
pub fn resolve_turn(game_state: &mut GameState) -> TurnOutcome {
    game_state.block.is_moving = false;
    game_state.nb_turn += 1;

    let under = tiles_under(&game_state.level, &game_state.block);
    if under.len() == 1 {
        apply_tile_action(&mut game_state.level, &mut game_state.block, under[0]);
    }

    if !is_on_ground(&game_state.level, &game_state.block) {
        game_state.block.is_falling = true;
        info!("[Game] block fell on turn {}", game_state.nb_turn);
        return TurnOutcome::Fell;
    }

    if is_on_finish(&game_state.level, &game_state.block) {
        if game_state.current_level + 1 >= game_state.levels.len() {
            info!("[Game] last level cleared in {} turns", game_state.nb_turn);
            return TurnOutcome::GameComplete;
        }
        info!(
            "[Game] level {} cleared on turn {}",
            game_state.current_level, game_state.nb_turn
        );
        return TurnOutcome::LevelComplete;
    }

    TurnOutcome::Continue
}
