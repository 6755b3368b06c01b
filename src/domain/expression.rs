//! The one expression this tool visualises: `(5 × 10) / ((3 − 8) + 5)`

use tracing::instrument;

use crate::domain::arena::ExprTree;
use crate::domain::builder::ExprTreeBuilder;
use crate::domain::entities::Op;
use crate::domain::error::DomainResult;

/// Human-readable title of the fixed expression.
pub const EXPRESSION_TITLE: &str = "(5 × 10) / ((3 − 8) + 5)";

/// Build the fixed expression tree.
///
/// ```text
///         /
///       /   \
///      *     +
///     / \   / \
///    5  10 -   5
///         / \
///        3   8
/// ```
///
/// Ids follow insertion order below: `/`=1, `*`=2, `5`=3, `10`=4, `+`=5,
/// `-`=6, `3`=7, `8`=8, `5`=9.
#[instrument(level = "debug")]
pub fn standard_expression() -> DomainResult<ExprTree> {
    let mut b = ExprTreeBuilder::new();
    let div = b.root(Op::Div)?;

    let mul = b.left(div, Op::Mul)?;
    b.left(mul, 5)?;
    b.right(mul, 10)?;

    let add = b.right(div, Op::Add)?;
    let sub = b.left(add, Op::Sub)?;
    b.left(sub, 3)?;
    b.right(sub, 8)?;
    b.right(add, 5)?;

    b.build()
}
