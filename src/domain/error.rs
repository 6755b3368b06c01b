//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{NodeId, Symbol};

/// Domain errors represent violations while building or evaluating a tree.
/// These are independent of rendering and terminal concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("tree has no root")]
    EmptyTree,

    #[error("tree already has a root")]
    RootExists,

    #[error("node not found in tree")]
    NodeNotFound,

    #[error("{side} child of node {parent} is already set")]
    SlotOccupied { parent: NodeId, side: &'static str },

    #[error("operand {symbol} (node {id}) cannot have children")]
    OperandHasChildren { id: NodeId, symbol: Symbol },

    #[error("operator {symbol} (node {id}) needs two operands")]
    IncompleteOperator { id: NodeId, symbol: Symbol },

    #[error("division by zero at node {0}")]
    DivisionByZero(NodeId),

    #[error("arithmetic overflow at node {0}")]
    Overflow(NodeId),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
