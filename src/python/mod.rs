//! Python bindings for the sliding puzzle environment.
//!
//! # Quick Start
//!
//! ```python
//! import sliding_puzzle_env as spe
//!
//! env = spe.SlidingPuzzleEnv(seed=42)
//! obs = env.reset()
//!
//! done = False
//! while not done:
//!     obs, reward, done, info = env.step(agent.act(obs))
//!     env.render()
//!
//! env.close()
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// sliding_puzzle_env: an 8-tile sliding puzzle for RL training.
#[pymodule]
fn sliding_puzzle_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySlidingPuzzleEnv>()?;
    Ok(())
}
