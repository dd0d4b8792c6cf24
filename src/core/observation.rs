//! What the agent sees after each reset and step.
//!
//! The flat encoding is the nine tiles followed by the previous action code,
//! with [`NO_PREV_ACTION`] standing in right after a reset.

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::board::{Board, CELLS};

/// Encoded previous action immediately after a reset.
pub const NO_PREV_ACTION: i64 = -10;

/// Length of the flat observation vector.
pub const OBSERVATION_LEN: usize = CELLS + 1;

/// Board plus the action that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub board: Board,
    pub prev_action: Option<Direction>,
}

impl Observation {
    #[must_use]
    pub fn new(board: Board, prev_action: Option<Direction>) -> Self {
        Self { board, prev_action }
    }

    /// Previous action code, or the sentinel when there is none.
    #[must_use]
    pub fn prev_action_code(&self) -> i64 {
        self.prev_action.map_or(NO_PREV_ACTION, i64::from)
    }

    /// Flat `[tile0, ..., tile8, prev_action]` encoding.
    ///
    /// ```
    /// use sliding_puzzle_env::core::{Board, Observation};
    ///
    /// let obs = Observation::new(Board::goal(), None);
    /// assert_eq!(obs.to_array(), [0, 1, 2, 3, 4, 5, 6, 7, 8, -10]);
    /// ```
    #[must_use]
    pub fn to_array(&self) -> [i64; OBSERVATION_LEN] {
        let mut out = [0i64; OBSERVATION_LEN];
        for (slot, &tile) in out.iter_mut().zip(self.board.tiles()) {
            *slot = i64::from(tile);
        }
        out[CELLS] = self.prev_action_code();
        out
    }
}
