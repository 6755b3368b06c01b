//! Infrastructure layer: terminal rendering and input
//!
//! This layer implements the I/O boundary traits used by playback.

pub mod error;
pub mod render;
pub mod terminal;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use render::{TerminalSink, TextRenderer};
pub use terminal::{KeyControls, TerminalSession};
pub use traits::{Control, ControlSource, FrameSink};
