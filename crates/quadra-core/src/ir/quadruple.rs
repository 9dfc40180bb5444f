//! Quadruples
//!
//! Each quadruple combines two operands with one operator. An operand is a
//! literal, a variable, or a reference to the result of an earlier quadruple.

use crate::ast::Operator;
use crate::types::{DataType, Literal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A three-address instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quadruple {
    /// Sequential id, starting at 1
    pub id: u32,
    pub left: Operand,
    pub right: Operand,
    pub operator: Operator,
    /// Statically known result type, `Any` until resolved
    pub result_type: DataType,
}

/// Operand of a quadruple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Constant value
    Literal(Literal),

    /// Variable supplied by the caller
    Variable { name: String, data_type: DataType },

    /// Result of the quadruple with this id
    Context(u32),
}

impl Quadruple {
    /// Create a quadruple with an unresolved result type
    pub fn new(id: u32, left: Operand, operator: Operator, right: Operand) -> Self {
        Self {
            id,
            left,
            right,
            operator,
            result_type: DataType::Any,
        }
    }

    /// Both operands, if both are literals
    pub fn literal_operands(&self) -> Option<(&Literal, &Literal)> {
        match (&self.left, &self.right) {
            (Operand::Literal(left), Operand::Literal(right)) => Some((left, right)),
            _ => None,
        }
    }

    /// Copy of this quadruple with context references to `resolved` ids
    /// replaced by the resolved literals
    pub fn with_resolved(&self, resolved: &HashMap<u32, Literal>) -> Self {
        Self {
            left: self.left.resolve(resolved),
            right: self.right.resolve(resolved),
            ..self.clone()
        }
    }

    /// Variable names referenced by this quadruple
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        [&self.left, &self.right]
            .into_iter()
            .filter_map(Operand::variable_name)
    }
}

impl Operand {
    /// Variable reference with an unresolved type
    pub fn variable(name: impl Into<String>) -> Self {
        Operand::Variable {
            name: name.into(),
            data_type: DataType::Any,
        }
    }

    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Operand::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn context_id(&self) -> Option<u32> {
        match self {
            Operand::Context(id) => Some(*id),
            _ => None,
        }
    }

    fn resolve(&self, resolved: &HashMap<u32, Literal>) -> Self {
        match self {
            Operand::Context(id) => match resolved.get(id) {
                Some(literal) => Operand::Literal(literal.clone()),
                None => self.clone(),
            },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for Quadruple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02}: {:<15} {:<5} {:<15} = {}",
            self.id,
            self.left.to_string(),
            self.operator.to_string(),
            self.right.to_string(),
            self.result_type
        )
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(literal) => write!(f, "{}", literal),
            Operand::Variable { name, data_type } => write!(f, "{}(${})", data_type, name),
            Operand::Context(id) => write!(f, "#{:02}", id),
        }
    }
}
