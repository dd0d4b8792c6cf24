//! Drawing observations.
//!
//! The environment hands a [`Renderer`] the current observation and nothing
//! else. Renderers may hold an output resource between frames; they acquire
//! it lazily on the first frame and drop it on [`Renderer::close`].

mod text;

pub use text::{frame, TextRenderer};

use serde::{Deserialize, Serialize};

use crate::core::{Observation, Result};

/// How `render` should produce a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderMode {
    /// Hand the frame to the renderer collaborator.
    #[default]
    Human,
    /// Return the frame as text instead of drawing it.
    Ansi,
}

impl RenderMode {
    /// Modes accepted by the environment.
    pub const ALL: [RenderMode; 2] = [RenderMode::Human, RenderMode::Ansi];

    /// Name used by host frameworks.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RenderMode::Human => "human",
            RenderMode::Ansi => "ansi",
        }
    }

    /// Parse a host-framework mode name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

/// Something that can draw a puzzle observation.
pub trait Renderer: Send {
    /// Draw one frame, acquiring the output resource first if needed.
    fn draw(&mut self, observation: &Observation) -> Result<()>;

    /// Release the output resource. Drawing again reopens it.
    fn close(&mut self);

    /// Whether the output resource is currently held.
    fn is_open(&self) -> bool;
}
