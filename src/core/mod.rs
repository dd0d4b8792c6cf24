//! Core puzzle types: board, directions, observations, RNG, configuration, errors.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod observation;
pub mod rng;

pub use action::Direction;
pub use board::{Board, LegalDirections, BLANK, CELLS, GOAL, SIDE};
pub use config::{PuzzleConfig, RewardConfig};
pub use error::{PuzzleError, Result};
pub use observation::{Observation, NO_PREV_ACTION, OBSERVATION_LEN};
pub use rng::{PuzzleRng, PuzzleRngState};
