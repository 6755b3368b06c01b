//! Text rendering of frames: tree, step list and result line

use std::fmt::Write as _;
use std::io::{self, Stdout, Write};

use colored::Colorize;
use crossterm::{cursor, queue, terminal};
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::application::player::Frame;
use crate::domain::{ExprNode, ExprTree, EXPRESSION_TITLE};
use crate::infrastructure::traits::FrameSink;

pub const CONTROLS_HELP: &str =
    "[p] preorder  [i] inorder  [o] postorder  [r] reset  [q] quit";

pub trait TreeNodeConvert {
    /// Convert to a termtree, labelling each node with `label`.
    fn to_tree_string(&self, label: &dyn Fn(&ExprNode) -> String) -> Tree<String>;
}

impl TreeNodeConvert for ExprTree {
    fn to_tree_string(&self, label: &dyn Fn(&ExprNode) -> String) -> Tree<String> {
        fn build_tree(
            tree: &ExprTree,
            node_idx: Index,
            label: &dyn Fn(&ExprNode) -> String,
        ) -> Option<Tree<String>> {
            let node = tree.get_node(node_idx)?;
            let leaves = node
                .children()
                .filter_map(|child| build_tree(tree, child, label));
            Some(Tree::new(label(node)).with_leaves(leaves))
        }

        self.root()
            .and_then(|root| build_tree(self, root, label))
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}

/// Builds the textual view of a frame.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    color: bool,
    show_controls: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            show_controls: false,
        }
    }

    pub fn with_controls(mut self, show: bool) -> Self {
        self.show_controls = show;
        self
    }

    fn node_label(&self, frame: &Frame<'_>, node: &ExprNode) -> String {
        let base = format!("{} {}", node.symbol, node.id);
        if frame.active == Some(node.id) && frame.animating {
            let text = format!("{} ◀", base);
            if self.color {
                text.yellow().bold().to_string()
            } else {
                text
            }
        } else if frame.is_highlighted(node.id) {
            let text = format!("{} ✓", base);
            if self.color {
                text.green().to_string()
            } else {
                text
            }
        } else {
            base
        }
    }

    /// Tree alone, with node ids and no highlighting.
    pub fn render_tree(&self, tree: &ExprTree) -> String {
        tree.to_tree_string(&|node: &ExprNode| format!("{} {}", node.symbol, node.id))
            .to_string()
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&self, frame: &Frame<'_>) -> String {
        let mut out = String::new();
        let title = format!("Expression: {}", EXPRESSION_TITLE);
        if self.color {
            let _ = writeln!(out, "{}", title.cyan().bold());
        } else {
            let _ = writeln!(out, "{}", title);
        }
        let _ = writeln!(out);

        let tree = frame.tree.to_tree_string(&|node: &ExprNode| self.node_label(frame, node));
        let _ = write!(out, "{}", tree);
        let _ = writeln!(out);

        match frame.kind {
            Some(kind) => {
                let state = if frame.animating { "running" } else { "done" };
                let _ = writeln!(
                    out,
                    "{} traversal ({}) [{}]",
                    kind,
                    kind.notation_name(),
                    state
                );
            }
            None => {
                let _ = writeln!(out, "No traversal selected");
            }
        }
        for step in frame.steps {
            let _ = writeln!(out, "  {}", step);
        }

        if let (Some(kind), Some(result)) = (frame.kind, frame.result()) {
            let line = format!("{} ({}): {}", kind, kind.notation_name(), result);
            let _ = writeln!(out);
            if self.color {
                let _ = writeln!(out, "{}", line.green().bold());
            } else {
                let _ = writeln!(out, "{}", line);
            }
        }

        if self.show_controls {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", CONTROLS_HELP);
        }
        out
    }
}

/// Writes frames to stdout, clearing the screen before each one.
///
/// Raw mode needs explicit carriage returns.
pub struct TerminalSink {
    out: Stdout,
    renderer: TextRenderer,
    raw: bool,
}

impl TerminalSink {
    pub fn new(renderer: TextRenderer) -> Self {
        Self {
            out: io::stdout(),
            renderer,
            raw: false,
        }
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }
}

impl FrameSink for TerminalSink {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let mut text = self.renderer.render(frame);
        if self.raw {
            text = text.replace('\n', "\r\n");
        }
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}
