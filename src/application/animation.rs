//! Timed playback of a [`TraversalPlayer`]
//!
//! Each step waits a fixed delay, advances the player and renders the new
//! frame.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::player::{StartOutcome, TraversalPlayer};
use crate::application::ApplicationResult;
use crate::domain::TraversalKind;
use crate::infrastructure::traits::{Control, ControlSource, FrameSink};

/// How long an idle interactive session waits for input per poll.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
pub struct Animator {
    delay: Duration,
}

impl Animator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Play one traversal to completion, rendering every step.
    #[instrument(level = "debug", skip(self, player, sink))]
    pub fn play(
        &self,
        player: &mut TraversalPlayer,
        kind: TraversalKind,
        sink: &mut dyn FrameSink,
    ) -> ApplicationResult<StartOutcome> {
        let outcome = player.start(kind);
        if outcome == StartOutcome::Ignored {
            return Ok(outcome);
        }
        sink.render(&player.frame()).with_context("render frame")?;
        while player.is_animating() {
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            player.advance();
            sink.render(&player.frame()).with_context("render frame")?;
        }
        Ok(outcome)
    }

    /// Interactive loop: react to controls until `Quit`.
    ///
    /// Starts requested while a traversal is animating are ignored. Reset
    /// halts the running traversal immediately.
    #[instrument(level = "debug", skip_all)]
    pub fn run(
        &self,
        player: &mut TraversalPlayer,
        sink: &mut dyn FrameSink,
        controls: &mut dyn ControlSource,
    ) -> ApplicationResult<()> {
        sink.render(&player.frame()).with_context("render frame")?;
        let mut next_step_at: Option<Instant> = None;

        loop {
            let timeout = match next_step_at {
                Some(at) if player.is_animating() => at.saturating_duration_since(Instant::now()),
                _ => IDLE_POLL,
            };

            match controls.poll(timeout).with_context("read input")? {
                Some(Control::Quit) => {
                    debug!("quit requested");
                    break;
                }
                Some(Control::Reset) => {
                    player.reset();
                    next_step_at = None;
                    sink.render(&player.frame()).with_context("render frame")?;
                }
                Some(Control::Start(kind)) => {
                    if player.start(kind) == StartOutcome::Started {
                        next_step_at = Some(Instant::now() + self.delay);
                        sink.render(&player.frame()).with_context("render frame")?;
                    }
                }
                None => {
                    let due = next_step_at.is_some_and(|at| Instant::now() >= at);
                    if player.is_animating() && due {
                        player.advance();
                        next_step_at = Some(Instant::now() + self.delay);
                        sink.render(&player.frame()).with_context("render frame")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::player::Frame;
    use crate::domain::standard_expression;
    use std::io;

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
    }

    impl FrameSink for CountingSink {
        fn render(&mut self, _frame: &Frame<'_>) -> io::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    struct BrokenSink;

    impl FrameSink for BrokenSink {
        fn render(&mut self, _frame: &Frame<'_>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_play_renders_initial_plus_every_step() {
        let mut player = TraversalPlayer::new(standard_expression().unwrap());
        let mut sink = CountingSink::default();
        let outcome = Animator::new(Duration::ZERO)
            .play(&mut player, TraversalKind::Inorder, &mut sink)
            .unwrap();
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(sink.frames, 1 + 9);
        assert!(player.is_finished());
    }

    #[test]
    fn test_play_propagates_render_failure() {
        let mut player = TraversalPlayer::new(standard_expression().unwrap());
        let err = Animator::new(Duration::ZERO)
            .play(&mut player, TraversalKind::Preorder, &mut BrokenSink)
            .unwrap_err();
        assert_eq!(err.to_string(), "operation failed: render frame");
    }
}
