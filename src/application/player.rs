//! Traversal player: the animation state machine
//!
//! A traversal is started, then advanced one step at a time by whoever owns
//! the clock. Each step highlights the next node and appends it to the step
//! list. Once the last step is consumed the result string becomes visible and
//! the player stops animating. Only one traversal runs at a time.

use std::collections::BTreeSet;

use tracing::{debug, info, instrument};

use crate::domain::{notation_of, traverse, ExprTree, NodeId, Step, Traversal, TraversalKind};

/// What happened to a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A traversal is already animating; the request was dropped.
    Ignored,
}

/// Snapshot of the player state handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tree: &'a ExprTree,
    pub kind: Option<TraversalKind>,
    /// Steps shown so far, in visiting order
    pub steps: &'a [Step],
    pub highlighted: &'a BTreeSet<NodeId>,
    /// Node visited by the most recent step
    pub active: Option<NodeId>,
    pub animating: bool,
    pub finished: bool,
    pub separator: &'a str,
}

impl Frame<'_> {
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.highlighted.contains(&id)
    }

    /// Notation string, only once the traversal has finished.
    pub fn result(&self) -> Option<String> {
        if !self.finished {
            return None;
        }
        Some(notation_of(self.steps, self.separator))
    }
}

#[derive(Debug)]
pub struct TraversalPlayer {
    tree: ExprTree,
    current: Option<Traversal>,
    cursor: usize,
    highlighted: BTreeSet<NodeId>,
    active: Option<NodeId>,
    animating: bool,
    separator: String,
}

impl TraversalPlayer {
    pub fn new(tree: ExprTree) -> Self {
        Self {
            tree,
            current: None,
            cursor: 0,
            highlighted: BTreeSet::new(),
            active: None,
            animating: false,
            separator: " ".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn tree(&self) -> &ExprTree {
        &self.tree
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn kind(&self) -> Option<TraversalKind> {
        self.current.as_ref().map(|t| t.kind)
    }

    pub fn highlighted(&self) -> &BTreeSet<NodeId> {
        &self.highlighted
    }

    /// True once every step of the current traversal has been shown.
    pub fn is_finished(&self) -> bool {
        self.current.is_some() && !self.animating
    }

    /// Begin a traversal unless one is already animating.
    ///
    /// Clears the visual state of any previous, finished traversal.
    #[instrument(level = "debug", skip(self))]
    pub fn start(&mut self, kind: TraversalKind) -> StartOutcome {
        if self.animating {
            debug!("{} requested while animating, ignored", kind);
            return StartOutcome::Ignored;
        }
        self.clear();
        let traversal = traverse(&self.tree, kind);
        info!("starting {} traversal ({} steps)", kind, traversal.len());
        self.current = Some(traversal);
        self.animating = true;
        StartOutcome::Started
    }

    /// Show the next step. Returns `None` when nothing is animating.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(&mut self) -> Option<Step> {
        if !self.animating {
            return None;
        }
        let traversal = self.current.as_ref()?;
        let step = traversal.steps.get(self.cursor).copied();
        if let Some(step) = step {
            self.cursor += 1;
            self.highlighted.insert(step.id);
            self.active = Some(step.id);
            debug!("{}", step);
        }
        if self.cursor >= traversal.steps.len() {
            info!("{} finished: {}", traversal.kind, traversal.notation_with(&self.separator));
            self.animating = false;
        }
        step
    }

    /// Clear all highlighting, the step list and the result, and halt animation.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        if self.animating {
            info!("animation halted by reset");
        }
        self.clear();
        self.animating = false;
    }

    fn clear(&mut self) {
        self.current = None;
        self.cursor = 0;
        self.highlighted.clear();
        self.active = None;
    }

    pub fn steps_shown(&self) -> &[Step] {
        match &self.current {
            Some(t) => &t.steps[..self.cursor],
            None => &[],
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tree: &self.tree,
            kind: self.kind(),
            steps: self.steps_shown(),
            highlighted: &self.highlighted,
            active: self.active,
            animating: self.animating,
            finished: self.is_finished(),
            separator: &self.separator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::standard_expression;

    fn player() -> TraversalPlayer {
        TraversalPlayer::new(standard_expression().unwrap())
    }

    #[test]
    fn test_new_player_is_idle() {
        let p = player();
        assert!(!p.is_animating());
        assert!(!p.is_finished());
        assert!(p.frame().result().is_none());
        assert!(p.steps_shown().is_empty());
    }

    #[test]
    fn test_advance_without_start_is_noop() {
        let mut p = player();
        assert!(p.advance().is_none());
        assert!(p.highlighted().is_empty());
    }

    #[test]
    fn test_result_hidden_until_last_step() {
        let mut p = player();
        p.start(TraversalKind::Inorder);
        for _ in 0..8 {
            p.advance();
            assert!(p.frame().result().is_none());
        }
        p.advance();
        assert!(p.is_finished());
        assert_eq!(p.frame().result().unwrap(), "5 * 10 / 3 - 8 + 5");
    }

    #[test]
    fn test_active_tracks_latest_step() {
        let mut p = player();
        p.start(TraversalKind::Preorder);
        let first = p.advance().unwrap();
        assert_eq!(p.frame().active, Some(first.id));
        let second = p.advance().unwrap();
        assert_eq!(p.frame().active, Some(second.id));
        assert!(p.frame().is_highlighted(first.id));
    }

    #[test]
    fn test_restart_after_finish_clears_previous_run() {
        let mut p = player();
        p.start(TraversalKind::Postorder);
        while p.advance().is_some() {}
        assert_eq!(p.start(TraversalKind::Preorder), StartOutcome::Started);
        assert!(p.highlighted().is_empty());
        assert_eq!(p.kind(), Some(TraversalKind::Preorder));
    }

    #[test]
    fn test_result_matches_traversal_notation() {
        let mut p = player().with_separator(" | ");
        p.start(TraversalKind::Preorder);
        while p.advance().is_some() {}
        let expected = traverse(p.tree(), TraversalKind::Preorder).notation_with(" | ");
        assert_eq!(p.frame().result(), Some(expected));
    }

    #[test]
    fn test_separator_applies_to_result() {
        let mut p = player().with_separator(", ");
        p.start(TraversalKind::Postorder);
        while p.advance().is_some() {}
        assert_eq!(p.frame().result().unwrap(), "5, 10, *, 3, 8, -, 5, +, /");
    }
}
