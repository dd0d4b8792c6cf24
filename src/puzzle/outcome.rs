//! Step outcome classification.

use serde::{Deserialize, Serialize};

use crate::core::{Observation, RewardConfig};

/// How a step resolved, in reward priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Board is in goal order after the move.
    Solved,
    /// Blank was against the edge; board unchanged.
    Illegal,
    /// Legal move that undid the previous action.
    Reversal,
    /// Any other legal move.
    Normal,
}

impl MoveOutcome {
    /// Classify a step. Earlier checks win.
    #[must_use]
    pub fn classify(solved: bool, moved: bool, reversal: bool) -> Self {
        if solved {
            MoveOutcome::Solved
        } else if !moved {
            MoveOutcome::Illegal
        } else if reversal {
            MoveOutcome::Reversal
        } else {
            MoveOutcome::Normal
        }
    }

    /// Reward for this outcome under `rewards`.
    #[must_use]
    pub fn reward(self, rewards: &RewardConfig) -> f64 {
        match self {
            MoveOutcome::Solved => rewards.solved,
            MoveOutcome::Illegal => rewards.illegal,
            MoveOutcome::Reversal => rewards.reversal,
            MoveOutcome::Normal => rewards.step,
        }
    }

    /// Whether the move counts toward the shuffle depth.
    #[must_use]
    pub fn is_productive(self) -> bool {
        !matches!(self, MoveOutcome::Illegal | MoveOutcome::Reversal)
    }
}

/// Result of applying one action to the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub outcome: MoveOutcome,
}
