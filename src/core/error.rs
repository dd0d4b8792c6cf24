//! Error types for puzzle operations.

use thiserror::Error;

/// Errors surfaced by the puzzle environment.
///
/// Illegal slides, reversals and solving the puzzle are ordinary step
/// outcomes, not errors.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("invalid action {0}: expected 0 (left), 1 (right), 2 (up) or 3 (down)")]
    InvalidAction(i64),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Convenience Result type for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
