//! Domain layer: expression tree, traversals and evaluation
//!
//! This layer is independent of external concerns (no I/O, no terminal, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod eval;
pub mod expression;
pub mod traversal;

pub use arena::{ExprNode, ExprTree, Side};
pub use builder::ExprTreeBuilder;
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use eval::{evaluate, parenthesized};
pub use expression::{standard_expression, EXPRESSION_TITLE};
pub use traversal::{notation_of, traverse, Step, Traversal, TraversalKind};
