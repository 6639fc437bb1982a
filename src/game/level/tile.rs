use serde::{Deserialize, Serialize};

use crate::game::types::GridPos;

/// Matrix code for an empty cell.
pub const CODE_EMPTY: i32 = 0;
/// Matrix code for plain floor.
pub const CODE_NORMAL: i32 = 1;
/// Matrix code for the start cell.
pub const CODE_START: i32 = 2;
/// Matrix code for the finish cell.
pub const CODE_FINISH: i32 = 3;

/// A switch code is in `10..20`; a teleporter code is `>= 20`. A cell valued
/// at the negation of a code is paired with that switch/teleporter.
pub fn is_switch_code(code: i32) -> bool {
    (10..20).contains(&code)
}

pub fn is_teleporter_code(code: i32) -> bool {
    code >= 20
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Normal,
    Start,
    Finish,
    /// Stepping on it toggles the visibility of every linked tile.
    Switch { linked: Vec<GridPos> },
    /// Stepping on it moves the block's planar center to the destination.
    Teleporter { destination: GridPos },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: GridPos,
    pub kind: TileKind,
    /// Whether the block can stand on this tile. Tiles linked to a switch
    /// start invisible until the switch opens them.
    pub visible: bool,
}

impl Tile {
    pub fn new(pos: GridPos, kind: TileKind) -> Self {
        Self {
            pos,
            kind,
            visible: true,
        }
    }
}
