//! Puzzle configuration.
//!
//! - `RewardConfig`: Reward paid for each kind of step outcome
//! - `PuzzleConfig`: Shuffle depth plus rewards
//!
//! The grid is always 3×3; only reward shaping and scramble depth vary.

use serde::{Deserialize, Serialize};

/// Reward paid for each step outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Move left the board in goal order.
    pub solved: f64,

    /// Blank was pushed against an edge; nothing moved.
    pub illegal: f64,

    /// Move undid the previous one.
    pub reversal: f64,

    /// Any other legal move.
    pub step: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            solved: 100.0,
            illegal: -20.0,
            reversal: -10.0,
            step: -1.0,
        }
    }
}

impl RewardConfig {
    /// Set the reward for solving the puzzle.
    #[must_use]
    pub fn with_solved(mut self, reward: f64) -> Self {
        self.solved = reward;
        self
    }

    /// Set the penalty for a move into an edge.
    #[must_use]
    pub fn with_illegal(mut self, reward: f64) -> Self {
        self.illegal = reward;
        self
    }

    /// Set the penalty for undoing the previous move.
    #[must_use]
    pub fn with_reversal(mut self, reward: f64) -> Self {
        self.reversal = reward;
        self
    }

    /// Set the cost of an ordinary move.
    #[must_use]
    pub fn with_step(mut self, reward: f64) -> Self {
        self.step = reward;
        self
    }
}

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Minimum number of productive random moves applied by reset.
    pub shuffle_moves: usize,

    /// Reward shaping.
    pub rewards: RewardConfig,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            shuffle_moves: 3,
            rewards: RewardConfig::default(),
        }
    }
}

impl PuzzleConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shuffle depth.
    #[must_use]
    pub fn with_shuffle_moves(mut self, moves: usize) -> Self {
        self.shuffle_moves = moves;
        self
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }
}
