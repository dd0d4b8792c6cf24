//! Puzzle state transitions and reward shaping.
//!
//! `PuzzleCore::step` slides the blank, checks for the goal and scores the
//! move. Scoring priority:
//!
//! 1. Solved
//! 2. Illegal (blank against an edge, nothing moved)
//! 3. Reversal (undoes the previous action)
//! 4. Anything else
//!
//! `PuzzleCore::reset` reuses `step` to scramble the goal board.

pub mod engine;
pub mod outcome;

pub use engine::{PuzzleCore, ShuffleStats};
pub use outcome::{MoveOutcome, Transition};
