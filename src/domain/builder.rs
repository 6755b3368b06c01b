use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{ExprTree, Side};
use crate::domain::entities::Symbol;
use crate::domain::error::{DomainError, DomainResult};

/// Builds an [`ExprTree`] top-down, checking each slot as it is filled.
#[derive(Debug, Default)]
pub struct ExprTreeBuilder {
    tree: ExprTree,
}

impl ExprTreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: ExprTree::new(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&mut self, symbol: impl Into<Symbol> + std::fmt::Debug) -> DomainResult<Index> {
        if self.tree.root().is_some() {
            return Err(DomainError::RootExists);
        }
        Ok(self.tree.insert_node(symbol.into(), None))
    }

    pub fn left(&mut self, parent: Index, symbol: impl Into<Symbol>) -> DomainResult<Index> {
        self.attach(parent, Side::Left, symbol.into())
    }

    pub fn right(&mut self, parent: Index, symbol: impl Into<Symbol>) -> DomainResult<Index> {
        self.attach(parent, Side::Right, symbol.into())
    }

    #[instrument(level = "trace", skip(self))]
    fn attach(&mut self, parent: Index, side: Side, symbol: Symbol) -> DomainResult<Index> {
        let node = self.tree.get_node(parent).ok_or(DomainError::NodeNotFound)?;
        if !node.symbol.is_operator() {
            return Err(DomainError::OperandHasChildren {
                id: node.id,
                symbol: node.symbol,
            });
        }
        let slot = match side {
            Side::Left => node.left,
            Side::Right => node.right,
        };
        if slot.is_some() {
            return Err(DomainError::SlotOccupied {
                parent: node.id,
                side: side.name(),
            });
        }
        Ok(self.tree.insert_node(symbol, Some((parent, side))))
    }

    /// Finish the tree. Every operator must have both operands.
    #[instrument(level = "debug", skip(self))]
    pub fn build(self) -> DomainResult<ExprTree> {
        if self.tree.root().is_none() {
            return Err(DomainError::EmptyTree);
        }
        if let Some((_, node)) = self
            .tree
            .iter()
            .find(|(_, n)| n.symbol.is_operator() && (n.left.is_none() || n.right.is_none()))
        {
            return Err(DomainError::IncompleteOperator {
                id: node.id,
                symbol: node.symbol,
            });
        }
        debug!("built expression tree with {} nodes", self.tree.len());
        Ok(self.tree)
    }
}
