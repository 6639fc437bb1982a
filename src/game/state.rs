use log::info;
use serde::{Deserialize, Serialize};

use crate::game::entities::Block;
use crate::game::level::{Level, LevelError};
use crate::game::maps::LevelDef;
use crate::game::systems::{begin_move, resolve_turn};
use crate::game::types::{Direction, MoveProfile};

/// What a completed move led to. Returned synchronously from
/// `resolve_turn`; the caller decides what to do next (restart after a fall,
/// advance after a cleared level).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Continue,
    /// The block left the floor. Restart the level (after whatever delay the
    /// presentation layer wants).
    Fell,
    /// Standing on the finish tile; more levels remain.
    LevelComplete,
    /// Standing on the finish tile of the last level.
    GameComplete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub levels: Vec<LevelDef>,
    pub current_level: usize,
    pub level: Level,
    pub block: Block,
    pub nb_turn: u32,
}

impl GameState {
    /// Create a new game on the first level of the catalog.
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, LevelError> {
        let level = levels
            .first()
            .map(|def| def.build())
            .unwrap_or(Err(LevelError::EmptyMatrix))?;
        let block = Block::new(level.start);
        Ok(GameState {
            levels,
            current_level: 0,
            level,
            block,
            nb_turn: 0,
        })
    }

    /// Discard the current grid, rebuild the level at `index` from its
    /// matrix, and put the block back on its start tile.
    pub fn start_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.level = self.levels[index].build()?;
        self.current_level = index;
        self.block.reset(self.level.start);
        info!("[Game] level {} started", index);
        Ok(())
    }

    pub fn restart_level(&mut self) -> Result<(), LevelError> {
        self.start_level(self.current_level)
    }

    /// Move on to the next level of the catalog.
    pub fn advance_level(&mut self) -> Result<(), LevelError> {
        self.start_level(self.current_level + 1)
    }

    /// Apply one directional input. Returns the advisory move profile, or
    /// `None` when the block is busy and the input was dropped.
    pub fn begin_move(&mut self, direction: Direction) -> Option<MoveProfile> {
        begin_move(&mut self.block, direction)
    }

    /// Resolve the move started by `begin_move`.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        resolve_turn(self)
    }

    pub fn level_text(&self) -> &str {
        &self.levels[self.current_level].text
    }
}
