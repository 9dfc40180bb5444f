//! Binary syntax tree
//!
//! Built bottom-up by the parser from a validated token sequence and never
//! mutated afterwards.

use crate::ast::Operator;
use crate::types::{DataType, Literal};
use std::fmt;

/// A binary tree node
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub left: ChildRef,
    pub operator: Operator,
    pub right: ChildRef,
}

/// One side of a tree node
#[derive(Debug, Clone, PartialEq)]
pub enum ChildRef {
    /// Constant value
    Literal(Literal),

    /// Variable reference, typed `Any` until inference
    Variable { name: String, data_type: DataType },

    /// Sub-expression
    Nested(Box<SyntaxTree>),

    /// Missing side of a single-operand node
    Empty,
}

impl SyntaxTree {
    pub fn new(left: ChildRef, operator: Operator, right: ChildRef) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    /// Single-operand node: `{operand, ADD, Empty}`
    ///
    /// The ADD here is a placeholder; code generation turns the node into a
    /// copy of the operand.
    pub fn single(operand: ChildRef) -> Self {
        Self::new(operand, Operator::Add, ChildRef::Empty)
    }

    /// Returns true if exactly one side is `Empty`
    pub fn is_single(&self) -> bool {
        self.left.is_empty() != self.right.is_empty()
    }

    /// Collapse into a child reference, dropping the wrapper of a
    /// single-operand node
    pub fn into_child(self) -> ChildRef {
        match (self.left.is_empty(), self.right.is_empty()) {
            (false, true) => self.left,
            (true, false) => self.right,
            _ => ChildRef::Nested(Box::new(self)),
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let side = |child: &ChildRef| match child {
            ChildRef::Nested(tree) => tree.node_count(),
            _ => 0,
        };
        1 + side(&self.left) + side(&self.right)
    }
}

impl ChildRef {
    /// Variable reference with an unresolved type
    pub fn variable(name: impl Into<String>) -> Self {
        ChildRef::Variable {
            name: name.into(),
            data_type: DataType::Any,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ChildRef::Empty)
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, ChildRef::Nested(_))
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            let operand = if self.left.is_empty() { &self.right } else { &self.left };
            return write!(f, "{}", operand);
        }
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl fmt::Display for ChildRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildRef::Literal(literal) => write!(f, "{}", literal),
            ChildRef::Variable { name, data_type } => write!(f, "{}(${})", data_type, name),
            ChildRef::Nested(tree) => write!(f, "( {} )", tree),
            ChildRef::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unwraps_to_operand() {
        let tree = SyntaxTree::single(ChildRef::Literal(Literal::number("1")));
        assert!(tree.is_single());
        assert_eq!(tree.into_child(), ChildRef::Literal(Literal::number("1")));
    }

    #[test]
    fn test_binary_stays_nested() {
        let tree = SyntaxTree::new(
            ChildRef::variable("a"),
            Operator::Add,
            ChildRef::Literal(Literal::number("2")),
        );
        assert!(!tree.is_single());
        assert!(tree.clone().into_child().is_nested());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_tree_display() {
        let inner = SyntaxTree::new(
            ChildRef::Literal(Literal::number("1")),
            Operator::Add,
            ChildRef::Literal(Literal::number("2")),
        );
        let tree = SyntaxTree::new(
            ChildRef::Nested(Box::new(inner)),
            Operator::Times,
            ChildRef::variable("rate"),
        );
        assert_eq!(
            tree.to_string(),
            "( NUMBER('1') + NUMBER('2') ) * ANY($rate)"
        );
        assert_eq!(tree.node_count(), 2);
    }
}
