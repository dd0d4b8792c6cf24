//! The environment contract consumed by RL frameworks.
//!
//! Hosts drive an [`Environment`] through `seed`, `reset`, `step` and
//! `render`. The host owns the episode loop; the environment owns its RNG
//! and its renderer.
//!
//! ## Usage
//!
//! ```
//! use sliding_puzzle_env::env::{Environment, SlidingPuzzleEnv};
//! use sliding_puzzle_env::core::PuzzleConfig;
//!
//! let mut env = SlidingPuzzleEnv::new(PuzzleConfig::default(), Some(42));
//! let obs = env.reset();
//! assert!(!obs.board.is_solved());
//!
//! let result = env.step(0).unwrap();
//! assert!(result.info.is_empty());
//! ```

mod puzzle_env;
mod snapshot;
pub mod spaces;

pub use puzzle_env::SlidingPuzzleEnv;
pub use snapshot::EnvSnapshot;
pub use spaces::{Discrete, MultiDiscrete};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::render::RenderMode;

/// Auxiliary step information. The puzzle always returns it empty.
pub type Info = FxHashMap<String, f64>;

/// Result of one `step` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: f64,
    pub done: bool,
    pub info: Info,
}

/// Static facts about an environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub render_modes: Vec<RenderMode>,
}

/// Environment trait.
///
/// Calls are sequential: one instance models one episode at a time.
pub trait Environment {
    /// What `reset` and `step` return to the agent.
    type Observation;

    /// Reseed the environment RNG. `None` draws a fresh seed from entropy.
    ///
    /// Returns the seed actually used, as a single element.
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64>;

    /// Start a new episode.
    fn reset(&mut self) -> Self::Observation;

    /// Apply one action. Fails only for actions outside the action space.
    fn step(&mut self, action: i64) -> Result<StepResult<Self::Observation>>;

    /// Draw the current state, or release render resources when `close` is set.
    ///
    /// Returns the frame text for modes that produce one.
    fn render(&mut self, mode: RenderMode, close: bool) -> Result<Option<String>>;

    fn action_space(&self) -> Discrete;

    fn observation_space(&self) -> MultiDiscrete;

    fn metadata(&self) -> Metadata;

    /// Release render resources.
    fn close(&mut self) -> Result<()> {
        self.render(RenderMode::Human, true).map(|_| ())
    }
}
