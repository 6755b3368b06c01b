//! Preorder, inorder and postorder traversals
//!
//! All three are pure recursive functions of the tree. Absent children are
//! skipped; nothing else needs special handling.

use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::arena::ExprTree;
use crate::domain::entities::{NodeId, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// node, left, right
    Preorder,
    /// left, node, right
    Inorder,
    /// left, right, node
    Postorder,
}

impl TraversalKind {
    pub const ALL: [TraversalKind; 3] = [
        TraversalKind::Preorder,
        TraversalKind::Inorder,
        TraversalKind::Postorder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TraversalKind::Preorder => "Preorder",
            TraversalKind::Inorder => "Inorder",
            TraversalKind::Postorder => "Postorder",
        }
    }

    /// Name of the notation the traversal produces.
    pub fn notation_name(&self) -> &'static str {
        match self {
            TraversalKind::Preorder => "prefix",
            TraversalKind::Inorder => "infix",
            TraversalKind::Postorder => "postfix",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "prefix" => Ok(TraversalKind::Preorder),
            "in" | "inorder" | "infix" => Ok(TraversalKind::Inorder),
            "post" | "postorder" | "postfix" => Ok(TraversalKind::Postorder),
            other => Err(format!("unknown traversal: {}", other)),
        }
    }
}

/// One node visit during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based position in the visiting order
    pub ordinal: usize,
    pub id: NodeId,
    pub symbol: Symbol,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: visit {} (node {})", self.ordinal, self.symbol, self.id)
    }
}

/// Complete visiting order of one traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub kind: TraversalKind,
    pub steps: Vec<Step>,
}

/// Symbols of `steps` joined by `separator`.
pub fn notation_of(steps: &[Step], separator: &str) -> String {
    steps.iter().map(|s| s.symbol).join(separator)
}

impl Traversal {
    /// Space-joined symbols in visiting order.
    pub fn notation(&self) -> String {
        self.notation_with(" ")
    }

    pub fn notation_with(&self, separator: &str) -> String {
        notation_of(&self.steps, separator)
    }

    pub fn visit_order(&self) -> Vec<NodeId> {
        self.steps.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Run a traversal over the whole tree.
#[instrument(level = "debug", skip(tree))]
pub fn traverse(tree: &ExprTree, kind: TraversalKind) -> Traversal {
    let mut visits = Vec::with_capacity(tree.len());
    if let Some(root) = tree.root() {
        match kind {
            TraversalKind::Preorder => preorder(tree, root, &mut visits),
            TraversalKind::Inorder => inorder(tree, root, &mut visits),
            TraversalKind::Postorder => postorder(tree, root, &mut visits),
        }
    }
    let steps = visits
        .into_iter()
        .enumerate()
        .map(|(i, (id, symbol))| Step {
            ordinal: i + 1,
            id,
            symbol,
        })
        .collect::<Vec<_>>();
    debug!("{} visited {} nodes", kind, steps.len());
    Traversal { kind, steps }
}

fn preorder(tree: &ExprTree, idx: Index, out: &mut Vec<(NodeId, Symbol)>) {
    if let Some(node) = tree.get_node(idx) {
        out.push((node.id, node.symbol));
        if let Some(left) = node.left {
            preorder(tree, left, out);
        }
        if let Some(right) = node.right {
            preorder(tree, right, out);
        }
    }
}

fn inorder(tree: &ExprTree, idx: Index, out: &mut Vec<(NodeId, Symbol)>) {
    if let Some(node) = tree.get_node(idx) {
        if let Some(left) = node.left {
            inorder(tree, left, out);
        }
        out.push((node.id, node.symbol));
        if let Some(right) = node.right {
            inorder(tree, right, out);
        }
    }
}

fn postorder(tree: &ExprTree, idx: Index, out: &mut Vec<(NodeId, Symbol)>) {
    if let Some(node) = tree.get_node(idx) {
        if let Some(left) = node.left {
            postorder(tree, left, out);
        }
        if let Some(right) = node.right {
            postorder(tree, right, out);
        }
        out.push((node.id, node.symbol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::ExprTreeBuilder;
    use crate::domain::entities::Op;

    #[test]
    fn test_single_node_tree() {
        let mut b = ExprTreeBuilder::new();
        b.root(42).unwrap();
        let tree = b.build().unwrap();
        for kind in TraversalKind::ALL {
            let t = traverse(&tree, kind);
            assert_eq!(t.notation(), "42");
            assert_eq!(t.steps[0].ordinal, 1);
        }
    }

    #[test]
    fn test_empty_tree_yields_no_steps() {
        let tree = ExprTree::default();
        assert!(traverse(&tree, TraversalKind::Inorder).is_empty());
    }

    #[test]
    fn test_notation_with_separator() {
        let mut b = ExprTreeBuilder::new();
        let root = b.root(Op::Add).unwrap();
        b.left(root, 1).unwrap();
        b.right(root, 2).unwrap();
        let tree = b.build().unwrap();
        let t = traverse(&tree, TraversalKind::Postorder);
        assert_eq!(t.notation_with(","), "1,2,+");
    }

    #[test]
    fn test_notation_of_partial_steps() {
        let tree = crate::domain::standard_expression().unwrap();
        let t = traverse(&tree, TraversalKind::Inorder);
        assert_eq!(notation_of(&t.steps[..3], " "), "5 * 10");
        assert_eq!(notation_of(&t.steps, " "), t.notation());
        assert_eq!(notation_of(&[], ","), "");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("pre".parse::<TraversalKind>(), Ok(TraversalKind::Preorder));
        assert_eq!("Infix".parse::<TraversalKind>(), Ok(TraversalKind::Inorder));
        assert_eq!("postorder".parse::<TraversalKind>(), Ok(TraversalKind::Postorder));
        assert!("level".parse::<TraversalKind>().is_err());
    }

    #[test]
    fn test_step_display() {
        let step = Step {
            ordinal: 3,
            id: NodeId(4),
            symbol: Symbol::Operand(10),
        };
        assert_eq!(step.to_string(), "Step 3: visit 10 (node #4)");
    }
}
