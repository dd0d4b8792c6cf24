//! The puzzle transition function.
//!
//! `PuzzleCore` owns the board and the previous action and nothing else.
//! Randomness comes from the caller so that seeding stays with the host.

use tracing::{debug, trace};

use crate::core::{
    Board, Direction, LegalDirections, Observation, PuzzleConfig, PuzzleRng, Result,
};

use super::outcome::{MoveOutcome, Transition};

/// Counters from one reset shuffle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShuffleStats {
    /// Random moves attempted, including illegal ones and reversals.
    pub attempts: usize,
    /// Moves that were neither illegal nor a reversal.
    pub productive: usize,
}

/// Board state plus the action that produced it.
#[derive(Clone, Debug)]
pub struct PuzzleCore {
    config: PuzzleConfig,
    board: Board,
    prev_action: Option<Direction>,
}

impl PuzzleCore {
    /// Create a core holding the solved board.
    #[must_use]
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            config,
            board: Board::goal(),
            prev_action: None,
        }
    }

    /// Create a core at a specific state.
    #[must_use]
    pub fn from_parts(config: PuzzleConfig, board: Board, prev_action: Option<Direction>) -> Self {
        Self {
            config,
            board,
            prev_action,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn prev_action(&self) -> Option<Direction> {
        self.prev_action
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::new(self.board, self.prev_action)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Directions that would move the blank right now.
    #[must_use]
    pub fn legal_directions(&self) -> LegalDirections {
        self.board.legal_directions()
    }

    /// Apply a raw action code.
    ///
    /// Codes outside `0..=3` fail with `InvalidAction` and leave the state
    /// untouched. Everything else, including sliding into an edge, is a
    /// normal transition.
    pub fn step(&mut self, action: i64) -> Result<Transition> {
        let direction = Direction::from_code(action)?;
        Ok(self.step_direction(direction))
    }

    /// Apply a decoded direction.
    pub fn step_direction(&mut self, direction: Direction) -> Transition {
        let moved = self.board.slide(direction);
        let done = self.board.is_solved();
        let outcome = MoveOutcome::classify(done, moved, direction.reverses(self.prev_action));
        self.prev_action = Some(direction);

        let reward = outcome.reward(&self.config.rewards);
        trace!(%direction, ?outcome, reward, "step");

        Transition {
            observation: self.observation(),
            reward,
            done,
            outcome,
        }
    }

    /// Start a new episode and return its first observation.
    pub fn reset(&mut self, rng: &mut PuzzleRng) -> Observation {
        self.shuffle(rng);
        self.observation()
    }

    /// Scramble from the goal board.
    ///
    /// Random directions are applied until at least `shuffle_moves`
    /// productive moves have happened and the board is not solved. The
    /// previous action is cleared afterwards so the first real step is
    /// never scored as a reversal.
    pub fn shuffle(&mut self, rng: &mut PuzzleRng) -> ShuffleStats {
        self.board = Board::goal();
        self.prev_action = None;

        let mut stats = ShuffleStats::default();
        while stats.productive < self.config.shuffle_moves || self.board.is_solved() {
            let transition = self.step_direction(rng.direction());
            stats.attempts += 1;
            if transition.outcome.is_productive() {
                stats.productive += 1;
            }
        }

        self.prev_action = None;
        debug!(
            attempts = stats.attempts,
            productive = stats.productive,
            board = ?self.board.tiles(),
            "puzzle shuffled"
        );
        stats
    }
}

impl Default for PuzzleCore {
    fn default() -> Self {
        Self::new(PuzzleConfig::default())
    }
}
