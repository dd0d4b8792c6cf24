//! The 3×3 tile grid.
//!
//! Positions are row-major: position `i` sits at row `i / 3`, column
//! `i % 3`. Tile `8` is the blank. A board is always a permutation of
//! `0..=8`; the only ways to build one are [`Board::goal`] and the
//! validating [`Board::from_tiles`], and the only mutation is a slide of
//! the blank into a neighbouring cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Direction;
use super::error::PuzzleError;

/// Grid width and height.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Tile identifier used for the blank.
pub const BLANK: u8 = (CELLS - 1) as u8;

/// Solved tile order, blank last.
pub const GOAL: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Directions that currently move the blank. At most four, usually two or three.
pub type LegalDirections = SmallVec<[Direction; Direction::COUNT]>;

/// A permutation of tiles `0..=8` over the nine grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 9]", into = "[u8; 9]")]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// The solved board.
    #[must_use]
    pub const fn goal() -> Self {
        Self { tiles: GOAL }
    }

    /// Build a board from explicit tiles, rejecting anything that is not a
    /// permutation of `0..=8`.
    ///
    /// ```
    /// use sliding_puzzle_env::core::Board;
    ///
    /// let board = Board::from_tiles([0, 1, 2, 3, 4, 8, 6, 7, 5]).unwrap();
    /// assert_eq!(board.blank(), 5);
    ///
    /// assert!(Board::from_tiles([0, 0, 2, 3, 4, 5, 6, 7, 8]).is_err());
    /// ```
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for (pos, &tile) in tiles.iter().enumerate() {
            let slot = seen.get_mut(usize::from(tile)).ok_or_else(|| {
                PuzzleError::InvalidBoard(format!("tile {} at position {} is out of range", tile, pos))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidBoard(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
            *slot = true;
        }
        Ok(Self { tiles })
    }

    /// Tiles in row-major order.
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Position of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        // A permutation always contains the blank.
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .unwrap_or(CELLS - 1)
    }

    /// Whether the tiles are in goal order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles == GOAL
    }

    /// Cell the blank would move into, or `None` if `direction` runs off
    /// the edge of the grid.
    #[must_use]
    pub fn target(&self, direction: Direction) -> Option<usize> {
        let blank = self.blank();
        let (row, col) = ((blank / SIDE) as i8, (blank % SIDE) as i8);
        let (dr, dc) = direction.delta();
        let (row, col) = (row + dr, col + dc);
        let side = SIDE as i8;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            Some(row as usize * SIDE + col as usize)
        } else {
            None
        }
    }

    /// Slide the blank in `direction`.
    ///
    /// Returns `false` and leaves the board untouched when the blank sits
    /// on the edge the move would cross.
    pub fn slide(&mut self, direction: Direction) -> bool {
        match self.target(direction) {
            Some(target) => {
                let blank = self.blank();
                self.tiles.swap(blank, target);
                true
            }
            None => false,
        }
    }

    /// Directions that move the blank from its current cell.
    #[must_use]
    pub fn legal_directions(&self) -> LegalDirections {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.target(d).is_some())
            .collect()
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(SIDE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = PuzzleError;

    fn try_from(tiles: [u8; CELLS]) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for [u8; CELLS] {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if tile == BLANK {
                    f.write_str(".")?;
                } else {
                    // Tiles are shown 1-based so the blank is the only gap.
                    write!(f, "{}", tile + 1)?;
                }
            }
        }
        Ok(())
    }
}
