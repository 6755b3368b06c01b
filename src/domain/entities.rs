//! Domain entities: node identifiers and the symbols a node displays

use std::fmt;

/// Stable identifier of a tree node.
///
/// Assigned in construction order starting at 1 (the root). Renderers key
/// highlight state by this id, never by arena position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Symbol used in notation strings.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Display value of a node: an operator or an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Operator(Op),
    Operand(i64),
}

impl Symbol {
    pub fn is_operator(&self) -> bool {
        matches!(self, Symbol::Operator(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Operator(op) => write!(f, "{}", op),
            Symbol::Operand(value) => write!(f, "{}", value),
        }
    }
}

impl From<Op> for Symbol {
    fn from(op: Op) -> Self {
        Symbol::Operator(op)
    }
}

impl From<i64> for Symbol {
    fn from(value: i64) -> Self {
        Symbol::Operand(value)
    }
}
