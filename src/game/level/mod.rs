//! Level grid: tiles laid out from an integer matrix, with switch and
//! teleporter wiring resolved at construction time.

pub mod tile;

pub use tile::*;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::game::types::GridPos;

/// Malformed level data. Raised once, at construction; grid lookups at play
/// time never fail (a missing cell is just "no tile").
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("level matrix is empty")]
    EmptyMatrix,
    #[error("level matrix row {row} has {len} cells, expected {expected}")]
    RaggedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("level has no start cell")]
    MissingStart,
    #[error("level has no finish cell")]
    MissingFinish,
    #[error("level has more than one start cell")]
    DuplicateStart,
    #[error("level has more than one finish cell")]
    DuplicateFinish,
    #[error("switch {code} at ({i}, {j}) has no paired cell")]
    UnmatchedSwitch { code: i32, i: usize, j: usize },
    #[error("teleporter {code} at ({i}, {j}) has no destination cell")]
    UnmatchedTeleporter { code: i32, i: usize, j: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    rows: usize,
    cols: usize,
    tiles: Vec<Vec<Option<Tile>>>,
    pub start: GridPos,
    pub finish: GridPos,
}

impl Level {
    /// Build a level from a rectangular matrix of type codes.
    ///
    /// First pass lays down floor tiles (paired cells, valued at a negated
    /// code, are plain floor at this point) and records the start, finish,
    /// switch and teleporter cells. Second pass wires every switch to the
    /// tiles valued at its negation (hiding them) and every teleporter to
    /// its destination cell.
    pub fn from_matrix(matrix: &[Vec<i32>]) -> Result<Self, LevelError> {
        let rows = matrix.len();
        if rows == 0 || matrix[0].is_empty() {
            return Err(LevelError::EmptyMatrix);
        }
        let cols = matrix[0].len();
        for (row, r) in matrix.iter().enumerate() {
            if r.len() != cols {
                return Err(LevelError::RaggedMatrix {
                    row,
                    len: r.len(),
                    expected: cols,
                });
            }
        }

        let mut tiles: Vec<Vec<Option<Tile>>> = vec![vec![None; cols]; rows];
        let mut start = None;
        let mut finish = None;
        // Switch and teleporter cells are wired in the second pass.
        let mut switches: Vec<(GridPos, i32)> = Vec::new();
        let mut teleporters: Vec<(GridPos, i32)> = Vec::new();

        for (i, row) in matrix.iter().enumerate() {
            for (j, &code) in row.iter().enumerate() {
                let pos = GridPos::new(i, j);
                if is_switch_code(code) {
                    switches.push((pos, code));
                } else if is_teleporter_code(code) {
                    teleporters.push((pos, code));
                } else {
                    match code {
                        CODE_EMPTY => {}
                        CODE_START => {
                            if start.replace(pos).is_some() {
                                return Err(LevelError::DuplicateStart);
                            }
                            tiles[i][j] = Some(Tile::new(pos, TileKind::Start));
                        }
                        CODE_FINISH => {
                            if finish.replace(pos).is_some() {
                                return Err(LevelError::DuplicateFinish);
                            }
                            tiles[i][j] = Some(Tile::new(pos, TileKind::Finish));
                        }
                        CODE_NORMAL => tiles[i][j] = Some(Tile::new(pos, TileKind::Normal)),
                        // Paired cells (negative codes) are plain floor until wired.
                        _ => tiles[i][j] = Some(Tile::new(pos, TileKind::Normal)),
                    }
                }
            }
        }

        let start = start.ok_or(LevelError::MissingStart)?;
        let finish = finish.ok_or(LevelError::MissingFinish)?;

        for &(pos, code) in &switches {
            let mut linked = Vec::new();
            for (i, row) in matrix.iter().enumerate() {
                for (j, &c) in row.iter().enumerate() {
                    if c == -code {
                        linked.push(GridPos::new(i, j));
                    }
                }
            }
            if linked.is_empty() {
                return Err(LevelError::UnmatchedSwitch {
                    code,
                    i: pos.i,
                    j: pos.j,
                });
            }
            // Linked tiles stay closed until the switch is stepped on.
            for &p in &linked {
                if let Some(t) = tiles[p.i][p.j].as_mut() {
                    t.visible = false;
                }
            }
            debug!(
                "[Level] switch {} at ({}, {}) linked to {} tile(s)",
                code,
                pos.i,
                pos.j,
                linked.len()
            );
            tiles[pos.i][pos.j] = Some(Tile::new(pos, TileKind::Switch { linked }));
        }

        for &(pos, code) in &teleporters {
            let mut destination = None;
            for (i, row) in matrix.iter().enumerate() {
                for (j, &c) in row.iter().enumerate() {
                    if c == -code {
                        // Last match in scan order wins.
                        destination = Some(GridPos::new(i, j));
                    }
                }
            }
            let destination = destination.ok_or(LevelError::UnmatchedTeleporter {
                code,
                i: pos.i,
                j: pos.j,
            })?;
            tiles[pos.i][pos.j] = Some(Tile::new(pos, TileKind::Teleporter { destination }));
        }

        Ok(Self {
            rows,
            cols,
            tiles,
            start,
            finish,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The tile at `(i, j)`, if the coordinates are in bounds and a tile
    /// exists there. Out-of-range lookups are "no tile", not an error.
    pub fn tile(&self, i: i32, j: i32) -> Option<&Tile> {
        if i < 0 || j < 0 || i as usize >= self.rows || j as usize >= self.cols {
            return None;
        }
        self.tiles[i as usize][j as usize].as_ref()
    }

    pub fn tile_at(&self, pos: GridPos) -> Option<&Tile> {
        self.tile(pos.i as i32, pos.j as i32)
    }

    /// Flip the visibility of the tile at `pos`, if one exists.
    pub fn toggle_visible(&mut self, pos: GridPos) {
        if pos.i < self.rows && pos.j < self.cols {
            if let Some(t) = self.tiles[pos.i][pos.j].as_mut() {
                t.visible = !t.visible;
            }
        }
    }
}
