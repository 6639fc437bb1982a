use serde::{Deserialize, Serialize};

/// A tile coordinate on the level grid. `i` is the row, `j` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub i: usize,
    pub j: usize,
}

impl GridPos {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// The planar center of the block, in half-tile units.
///
/// Tile `(i, j)` has its center at `(2i, 2j)`. A standing block sits on even
/// coordinates; a crouched block has an odd coordinate on its crouch axis
/// (a `±0.5` tile offset, kept exact in integers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub hi: i32,
    pub hj: i32,
}

impl BlockPos {
    pub fn from_tile(pos: GridPos) -> Self {
        Self {
            hi: pos.i as i32 * 2,
            hj: pos.j as i32 * 2,
        }
    }

    /// The tile this half-unit point sits on, if it is tile-aligned.
    /// Off-center points (odd coordinates) lie on a tile boundary.
    pub fn to_tile(self) -> Option<GridPos> {
        if self.hi >= 0 && self.hj >= 0 && self.hi % 2 == 0 && self.hj % 2 == 0 {
            Some(GridPos::new(self.hi as usize / 2, self.hj as usize / 2))
        } else {
            None
        }
    }
}

/// How the block currently rests on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockState {
    /// Upright, footprint 1x1.
    Standing,
    /// Lying along the column axis, footprint 2 wide.
    CrouchedWidth,
    /// Lying along the row axis, footprint 2 long.
    CrouchedHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit sign of the move on the (row, column) axes.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// True for moves along the column axis.
    pub fn is_lateral(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Advisory values for a presentation layer animating one tip of the block:
/// how far the center travels (world units) and the height it rests at after
/// the move (0.5 lying, 1.0 upright).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveProfile {
    pub distance: f32,
    pub height: f32,
}
