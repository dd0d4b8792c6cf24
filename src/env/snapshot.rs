//! Capturing and restoring an environment mid-episode.

use serde::{Deserialize, Serialize};

use crate::core::{Observation, PuzzleRngState, Result};

/// Everything needed to resume an environment exactly where it was.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    pub observation: Observation,
    pub rng: PuzzleRngState,
}

impl EnvSnapshot {
    /// Encode as compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`EnvSnapshot::to_bytes`].
    ///
    /// Boards that are not permutations are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
