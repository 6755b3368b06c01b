//! Application layer: playback of traversals
//!
//! This layer drives domain logic over time and depends on I/O boundary traits.

pub mod animation;
pub mod error;
pub mod error_ext;
pub mod player;

pub use animation::Animator;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use player::{Frame, StartOutcome, TraversalPlayer};
