use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::entities::{NodeId, Symbol};

/// Which child slot of a binary node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Tree node in the arena-backed expression tree.
#[derive(Debug, Clone)]
pub struct ExprNode {
    /// Stable identifier, 1-based in construction order
    pub id: NodeId,
    /// Operator or operand shown for this node
    pub symbol: Symbol,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

impl ExprNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Existing children, left before right.
    pub fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Arena-based binary expression tree.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
/// Only [`crate::domain::ExprTreeBuilder`] inserts nodes; a built tree is
/// never mutated.
#[derive(Debug, Clone)]
pub struct ExprTree {
    arena: Arena<ExprNode>,
    root: Option<Index>,
}

impl Default for ExprTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprTree {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Insert a node and link it to its parent. Slot checks are the builder's job.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_node(&mut self, symbol: Symbol, parent: Option<(Index, Side)>) -> Index {
        let id = NodeId(self.arena.len() as u32 + 1);
        let node = ExprNode {
            id,
            symbol,
            parent: parent.map(|(idx, _)| idx),
            left: None,
            right: None,
        };
        let node_idx = self.arena.insert(node);

        match parent {
            Some((parent_idx, side)) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    match side {
                        Side::Left => parent.left = Some(node_idx),
                        Side::Right => parent.right = Some(node_idx),
                    }
                }
            }
            None => self.root = Some(node_idx),
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&ExprNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn root_node(&self) -> Option<&ExprNode> {
        self.root.and_then(|idx| self.get_node(idx))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Depth-first walk, node before children, left before right.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Locate a node by its stable id.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, id: NodeId) -> Option<(Index, &ExprNode)> {
        self.iter().find(|(_, node)| node.id == id)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children()
                .map(|child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf nodes (the operands) from left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<&ExprNode> {
        self.iter()
            .map(|(_, node)| node)
            .filter(|node| node.is_leaf())
            .collect()
    }
}

pub struct TreeIterator<'a> {
    tree: &'a ExprTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a ExprTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a ExprNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push right first so left is visited first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current_idx, node));
            }
        }
        None
    }
}
