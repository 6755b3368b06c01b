//! I/O boundary traits for testability
//!
//! These traits abstract the terminal, allowing playback to be tested with
//! scripted input and recording renderers.

use std::io;
use std::time::Duration;

use crate::application::player::Frame;
use crate::domain::TraversalKind;

/// User actions available while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start(TraversalKind),
    Reset,
    Quit,
}

/// Output surface for frames.
pub trait FrameSink {
    /// Draw one frame.
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Source of user controls.
pub trait ControlSource {
    /// Wait at most `timeout` for a control. `None` means the timeout elapsed
    /// or the input did not map to a control.
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Control>>;
}
