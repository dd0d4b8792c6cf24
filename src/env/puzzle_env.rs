//! The sliding puzzle behind the environment contract.

use tracing::debug;

use crate::core::{Observation, PuzzleConfig, PuzzleRng, Result};
use crate::puzzle::PuzzleCore;
use crate::render::{frame, RenderMode, Renderer, TextRenderer};

use super::snapshot::EnvSnapshot;
use super::spaces::{puzzle_action_space, puzzle_observation_space};
use super::{Discrete, Environment, Info, Metadata, MultiDiscrete, StepResult};

/// 8-tile sliding puzzle environment.
///
/// Holds the puzzle state, one RNG and one renderer. Until the first
/// `reset` the board is solved and there is no previous action.
pub struct SlidingPuzzleEnv {
    core: PuzzleCore,
    rng: PuzzleRng,
    renderer: Box<dyn Renderer>,
}

impl SlidingPuzzleEnv {
    /// Create an environment that renders to standard output.
    ///
    /// `seed = None` seeds from OS entropy.
    #[must_use]
    pub fn new(config: PuzzleConfig, seed: Option<u64>) -> Self {
        Self::with_renderer(config, seed, Box::new(TextRenderer::stdout()))
    }

    /// Create an environment with a custom renderer.
    #[must_use]
    pub fn with_renderer(
        config: PuzzleConfig,
        seed: Option<u64>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        let rng = seed.map_or_else(PuzzleRng::from_entropy, PuzzleRng::new);
        debug!(seed = rng.seed(), "created sliding puzzle env");
        Self {
            core: PuzzleCore::new(config),
            rng,
            renderer,
        }
    }

    /// The puzzle state.
    #[must_use]
    pub fn core(&self) -> &PuzzleCore {
        &self.core
    }

    /// Current observation without stepping.
    #[must_use]
    pub fn observation(&self) -> Observation {
        self.core.observation()
    }

    /// Seed currently driving the shuffle RNG.
    #[must_use]
    pub fn current_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the puzzle state and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot {
            observation: self.core.observation(),
            rng: self.rng.state(),
        }
    }

    /// Resume from a snapshot. The configuration and renderer are kept.
    pub fn restore(&mut self, snapshot: &EnvSnapshot) {
        self.core = PuzzleCore::from_parts(
            self.core.config().clone(),
            snapshot.observation.board,
            snapshot.observation.prev_action,
        );
        self.rng = PuzzleRng::from_state(&snapshot.rng);
    }
}

impl Environment for SlidingPuzzleEnv {
    type Observation = Observation;

    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        self.rng = seed.map_or_else(PuzzleRng::from_entropy, PuzzleRng::new);
        debug!(seed = self.rng.seed(), "reseeded sliding puzzle env");
        vec![self.rng.seed()]
    }

    fn reset(&mut self) -> Observation {
        self.core.reset(&mut self.rng)
    }

    fn step(&mut self, action: i64) -> Result<StepResult<Observation>> {
        let transition = self.core.step(action)?;
        Ok(StepResult {
            observation: transition.observation,
            reward: transition.reward,
            done: transition.done,
            info: Info::default(),
        })
    }

    fn render(&mut self, mode: RenderMode, close: bool) -> Result<Option<String>> {
        if close {
            self.renderer.close();
            return Ok(None);
        }

        let observation = self.core.observation();
        match mode {
            RenderMode::Human => {
                self.renderer.draw(&observation)?;
                Ok(None)
            }
            RenderMode::Ansi => Ok(Some(frame(&observation))),
        }
    }

    fn action_space(&self) -> Discrete {
        puzzle_action_space()
    }

    fn observation_space(&self) -> MultiDiscrete {
        puzzle_observation_space()
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            render_modes: RenderMode::ALL.to_vec(),
        }
    }
}

impl std::fmt::Debug for SlidingPuzzleEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingPuzzleEnv")
            .field("core", &self.core)
            .field("seed", &self.rng.seed())
            .field("renderer_open", &self.renderer.is_open())
            .finish()
    }
}
