use serde::{Deserialize, Serialize};

use crate::game::types::{BlockPos, BlockState, GridPos};

/// The player-controlled block.
///
/// `is_moving` is set while a tip is logically in flight (between
/// `begin_move` and `resolve_turn`); `is_falling` once the block has left the
/// floor. Input received while either flag is set is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub pos: BlockPos,
    pub state: BlockState,
    pub is_moving: bool,
    pub is_falling: bool,
}

impl Block {
    pub fn new(start: GridPos) -> Self {
        Self {
            pos: BlockPos::from_tile(start),
            state: BlockState::Standing,
            is_moving: false,
            is_falling: false,
        }
    }

    /// Put the block back upright on the given start tile.
    pub fn reset(&mut self, start: GridPos) {
        self.pos = BlockPos::from_tile(start);
        self.state = BlockState::Standing;
        self.is_moving = false;
        self.is_falling = false;
    }

    /// True while a move or a fall is in progress; new input must be dropped.
    pub fn is_busy(&self) -> bool {
        self.is_moving || self.is_falling
    }

    /// Resting height of the block center above the floor, in world units.
    pub fn height(&self) -> f32 {
        match self.state {
            BlockState::Standing => 1.0,
            BlockState::CrouchedWidth | BlockState::CrouchedHeight => 0.5,
        }
    }
}
