//! Plain-text renderer.

use std::io::{self, Write};

use tracing::debug;

use crate::core::{Observation, Result};

use super::Renderer;

type SinkFactory<W> = Box<dyn FnMut() -> io::Result<W> + Send>;

/// Text frame for an observation: the grid followed by the previous action.
///
/// ```
/// use sliding_puzzle_env::core::{Board, Observation};
/// use sliding_puzzle_env::render::frame;
///
/// let text = frame(&Observation::new(Board::goal(), None));
/// assert_eq!(text, "1 2 3\n4 5 6\n7 8 .\nprev: none\n");
/// ```
#[must_use]
pub fn frame(observation: &Observation) -> String {
    let prev = observation
        .prev_action
        .map_or_else(|| "none".to_string(), |d| d.to_string());
    format!("{}\nprev: {}\n", observation.board, prev)
}

/// Writes text frames to a lazily opened sink.
pub struct TextRenderer<W: Write + Send> {
    open: SinkFactory<W>,
    sink: Option<W>,
    frames: usize,
}

impl TextRenderer<io::Stdout> {
    /// Renderer that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(|| Ok(io::stdout()))
    }
}

impl<W: Write + Send> TextRenderer<W> {
    /// Renderer whose sink is produced by `open` on first use.
    pub fn new(open: impl FnMut() -> io::Result<W> + Send + 'static) -> Self {
        Self {
            open: Box::new(open),
            sink: None,
            frames: 0,
        }
    }

    /// Frames drawn since creation.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The open sink, if any.
    #[must_use]
    pub fn sink(&self) -> Option<&W> {
        self.sink.as_ref()
    }
}

impl<W: Write + Send> Renderer for TextRenderer<W> {
    fn draw(&mut self, observation: &Observation) -> Result<()> {
        if self.sink.is_none() {
            debug!("opening text render sink");
            self.sink = Some((self.open)()?);
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.write_all(frame(observation).as_bytes())?;
            sink.flush()?;
            self.frames += 1;
        }
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut sink) = self.sink.take() {
            if let Err(e) = sink.flush() {
                debug!(error = %e, "flush on close failed");
            }
            debug!(frames = self.frames, "closed text render sink");
        }
    }

    fn is_open(&self) -> bool {
        self.sink.is_some()
    }
}

impl<W: Write + Send> std::fmt::Debug for TextRenderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("open", &self.sink.is_some())
            .field("frames", &self.frames)
            .finish()
    }
}
