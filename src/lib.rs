//! # sliding-puzzle-env
//!
//! An 8-tile sliding puzzle exposed as an RL training environment.
//!
//! ## Rules
//!
//! The board is a 3×3 grid holding tiles `0..=8`, where `8` is the blank.
//! Each action slides the blank Left, Right, Up or Down (codes 0..=3). The
//! episode ends when the tiles read `0, 1, ..., 8` in row-major order.
//!
//! ## Rewards
//!
//! | Outcome                         | Reward |
//! |---------------------------------|--------|
//! | Puzzle solved                   | +100   |
//! | Blank pushed into an edge       | −20    |
//! | Move undoes the previous move   | −10    |
//! | Any other move                  | −1     |
//!
//! The first matching row wins. Values are configurable via `RewardConfig`.
//!
//! ## Modules
//!
//! - `core`: Board, directions, observations, RNG, configuration, errors
//! - `puzzle`: Transition function, reward shaping and reset shuffle
//! - `env`: Host-framework contract (`seed`/`reset`/`step`/`render`) and spaces
//! - `render`: Renderer collaborator and the text renderer
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod env;
pub mod puzzle;
pub mod render;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, Observation, PuzzleConfig, PuzzleError, PuzzleRng, PuzzleRngState,
    Result, RewardConfig, NO_PREV_ACTION,
};

pub use crate::env::{
    Discrete, EnvSnapshot, Environment, Info, Metadata, MultiDiscrete, SlidingPuzzleEnv,
    StepResult,
};

pub use crate::puzzle::{MoveOutcome, PuzzleCore, ShuffleStats, Transition};

pub use crate::render::{RenderMode, Renderer, TextRenderer};
