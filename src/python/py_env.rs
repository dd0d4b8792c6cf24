//! Environment bindings for Python.

use std::collections::HashMap;

use numpy::PyArray1;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{PuzzleConfig, PuzzleError};
use crate::env::{Environment, SlidingPuzzleEnv};
use crate::render::RenderMode;

fn to_py_err(err: PuzzleError) -> PyErr {
    match err {
        PuzzleError::Render(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for SlidingPuzzleEnv.
///
/// Follows the gym method names so it can be dropped into existing
/// training loops.
#[pyclass(name = "SlidingPuzzleEnv")]
pub struct PySlidingPuzzleEnv {
    env: SlidingPuzzleEnv,
}

#[pymethods]
impl PySlidingPuzzleEnv {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for shuffling (None draws one from OS entropy)
    /// - shuffle_moves: Minimum productive random moves applied by reset
    #[new]
    #[pyo3(signature = (seed = None, shuffle_moves = 3))]
    fn new(seed: Option<u64>, shuffle_moves: usize) -> Self {
        let config = PuzzleConfig::new().with_shuffle_moves(shuffle_moves);
        Self {
            env: SlidingPuzzleEnv::new(config, seed),
        }
    }

    /// Reseed the environment. Returns `[seed]` with the seed actually used.
    #[pyo3(signature = (seed = None))]
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        self.env.seed(seed)
    }

    /// Start a new episode and return the first observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        let obs = self.env.reset();
        PyArray1::from_slice_bound(py, &obs.to_array()[..])
    }

    /// Apply an action. Returns `(observation, reward, done, info)`.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> PyResult<(Bound<'py, PyArray1<i64>>, f64, bool, Bound<'py, PyDict>)> {
        let result = self.env.step(action).map_err(to_py_err)?;
        let obs = PyArray1::from_slice_bound(py, &result.observation.to_array()[..]);
        let info = PyDict::new_bound(py);
        for (key, value) in &result.info {
            info.set_item(key, value)?;
        }
        Ok((obs, result.reward, result.done, info))
    }

    /// Draw the current board, or release the renderer when `close` is set.
    ///
    /// Mode "ansi" returns the frame as a string instead of printing it.
    #[pyo3(signature = (mode = "human", close = false))]
    fn render(&mut self, mode: &str, close: bool) -> PyResult<Option<String>> {
        let mode = RenderMode::from_name(mode)
            .ok_or_else(|| PyValueError::new_err(format!("unsupported render mode '{}'", mode)))?;
        self.env.render(mode, close).map_err(to_py_err)
    }

    /// Release render resources.
    fn close(&mut self) -> PyResult<()> {
        self.env.close().map_err(to_py_err)
    }

    /// Current observation without stepping.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i64>> {
        PyArray1::from_slice_bound(py, &self.env.observation().to_array()[..])
    }

    /// Directions that currently move the blank.
    fn legal_actions(&self) -> Vec<u8> {
        self.env
            .core()
            .legal_directions()
            .iter()
            .map(|d| d.code())
            .collect()
    }

    /// Size of the discrete action space.
    #[getter]
    fn action_space_n(&self) -> usize {
        self.env.action_space().n
    }

    /// Inclusive `(low, high)` bounds of each observation component.
    #[getter]
    fn observation_space_bounds(&self) -> Vec<(i64, i64)> {
        self.env.observation_space().bounds().to_vec()
    }

    #[getter]
    fn metadata(&self) -> HashMap<&'static str, Vec<&'static str>> {
        let modes: Vec<&'static str> = self
            .env
            .metadata()
            .render_modes
            .into_iter()
            .map(RenderMode::name)
            .collect();
        HashMap::from([("render.modes", modes)])
    }

    fn __repr__(&self) -> String {
        let obs = self.env.observation();
        format!(
            "SlidingPuzzleEnv(board={:?}, prev_action={}, seed={})",
            obs.board.tiles(),
            obs.prev_action_code(),
            self.env.current_seed()
        )
    }
}
