//! Evaluation and fully parenthesised rendering of an expression tree

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::ExprTree;
use crate::domain::entities::{Op, Symbol};
use crate::domain::error::{DomainError, DomainResult};

/// Evaluate the tree with checked integer arithmetic.
///
/// Division truncates toward zero.
#[instrument(level = "debug", skip(tree))]
pub fn evaluate(tree: &ExprTree) -> DomainResult<i64> {
    let root = tree.root().ok_or(DomainError::EmptyTree)?;
    eval_node(tree, root)
}

fn eval_node(tree: &ExprTree, idx: Index) -> DomainResult<i64> {
    let node = tree.get_node(idx).ok_or(DomainError::NodeNotFound)?;
    let op = match node.symbol {
        Symbol::Operand(value) => return Ok(value),
        Symbol::Operator(op) => op,
    };
    let incomplete = || DomainError::IncompleteOperator {
        id: node.id,
        symbol: node.symbol,
    };
    let lhs = eval_node(tree, node.left.ok_or_else(incomplete)?)?;
    let rhs = eval_node(tree, node.right.ok_or_else(incomplete)?)?;

    let value = match op {
        Op::Add => lhs.checked_add(rhs),
        Op::Sub => lhs.checked_sub(rhs),
        Op::Mul => lhs.checked_mul(rhs),
        Op::Div => {
            if rhs == 0 {
                return Err(DomainError::DivisionByZero(node.id));
            }
            lhs.checked_div(rhs)
        }
    };
    value.ok_or(DomainError::Overflow(node.id))
}

/// Infix form with every operator application wrapped in parentheses.
pub fn parenthesized(tree: &ExprTree) -> String {
    tree.root()
        .map(|root| paren_node(tree, root))
        .unwrap_or_default()
}

fn paren_node(tree: &ExprTree, idx: Index) -> String {
    match tree.get_node(idx) {
        Some(node) => match (node.left, node.right) {
            (Some(left), Some(right)) => format!(
                "({} {} {})",
                paren_node(tree, left),
                node.symbol,
                paren_node(tree, right)
            ),
            _ => node.symbol.to_string(),
        },
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::builder::ExprTreeBuilder;
    use crate::domain::entities::NodeId;

    fn binary(op: Op, lhs: i64, rhs: i64) -> ExprTree {
        let mut b = ExprTreeBuilder::new();
        let root = b.root(op).unwrap();
        b.left(root, lhs).unwrap();
        b.right(root, rhs).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn test_evaluate_simple() {
        assert_eq!(evaluate(&binary(Op::Sub, 3, 8)), Ok(-5));
        assert_eq!(evaluate(&binary(Op::Div, 7, 2)), Ok(3));
        assert_eq!(evaluate(&binary(Op::Mul, 5, 10)), Ok(50));
    }

    #[test]
    fn test_division_by_zero_reports_node() {
        assert_eq!(
            evaluate(&binary(Op::Div, 1, 0)),
            Err(DomainError::DivisionByZero(NodeId(1)))
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            evaluate(&binary(Op::Mul, i64::MAX, 2)),
            Err(DomainError::Overflow(NodeId(1)))
        );
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(parenthesized(&binary(Op::Add, 1, 2)), "(1 + 2)");
        assert_eq!(parenthesized(&ExprTree::default()), "");
    }
}
