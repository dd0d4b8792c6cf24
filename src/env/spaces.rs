//! Action and observation space declarations.
//!
//! Hosts use these to size policy outputs and to validate values crossing
//! the boundary. They describe what may be passed, not what the puzzle
//! happens to produce.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, CELLS, NO_PREV_ACTION, OBSERVATION_LEN};

/// Integers `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    #[must_use]
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        usize::try_from(value).is_ok_and(|v| v < self.n)
    }
}

/// A fixed-length vector where each component has its own inclusive range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiscrete {
    bounds: Vec<(i64, i64)>,
}

impl MultiDiscrete {
    /// Build from inclusive `(low, high)` pairs.
    #[must_use]
    pub fn new(bounds: Vec<(i64, i64)>) -> Self {
        Self { bounds }
    }

    #[must_use]
    pub fn bounds(&self) -> &[(i64, i64)] {
        &self.bounds
    }

    /// Number of components.
    #[must_use]
    pub fn shape(&self) -> usize {
        self.bounds.len()
    }

    /// Whether `values` has the right length and every component is in range.
    #[must_use]
    pub fn contains(&self, values: &[i64]) -> bool {
        values.len() == self.bounds.len()
            && values
                .iter()
                .zip(&self.bounds)
                .all(|(v, (low, high))| (*low..=*high).contains(v))
    }
}

/// Four slide directions.
#[must_use]
pub fn puzzle_action_space() -> Discrete {
    Discrete::new(Direction::COUNT)
}

/// Nine tiles in `[0, 8]` followed by the previous action in `[-10, 5]`.
///
/// The upper bound of the last component is wider than the actions that can
/// occur (at most 3). Hosts validate against it, so it stays as declared.
#[must_use]
pub fn puzzle_observation_space() -> MultiDiscrete {
    let tile_max = (CELLS - 1) as i64;
    let mut bounds = vec![(0, tile_max); CELLS];
    bounds.push((NO_PREV_ACTION, 5));
    debug_assert_eq!(bounds.len(), OBSERVATION_LEN);
    MultiDiscrete::new(bounds)
}
