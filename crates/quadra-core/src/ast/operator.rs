//! Operator table for Quadra expressions
//!
//! Declaration order is precedence order: operators listed first bind
//! loosest and are chosen first as the split point of a sequence.

use crate::error::{CoreError, Result};
use crate::operators;
use crate::types::{DataType, Literal};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    // Logical operators
    /// Logical AND (`&`, `and`)
    And,
    /// Logical OR (`|`, `or`)
    Or,

    // Comparison operators
    /// Greater than or equal (>=)
    GreaterEq,
    /// Less than or equal (<=)
    LessEq,
    /// Equal (=)
    Eq,
    /// Greater than (>)
    Greater,
    /// Less than (<)
    Less,

    // Arithmetic operators
    /// Addition, text concatenation (+)
    Add,
    /// Subtraction, time difference (-)
    Minus,
    /// Multiplication (*)
    Times,
    /// Division (/)
    Div,
    /// Remainder (%)
    Rem,

    /// Identity on the left operand, used for single-operand expressions
    CopyLeft,
}

lazy_static! {
    /// Every alias with its operator, longest alias first
    static ref ALIAS_TABLE: Vec<(&'static str, Operator)> = {
        let mut table: Vec<(&'static str, Operator)> = Operator::PRECEDENCE
            .iter()
            .flat_map(|op| op.aliases().iter().map(move |alias| (*alias, *op)))
            .collect();
        // stable sort keeps declaration order among aliases of equal length
        table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        table
    };
}

impl Operator {
    /// Source-level operators, loosest binding first
    pub const PRECEDENCE: [Operator; 12] = [
        Operator::And,
        Operator::Or,
        Operator::GreaterEq,
        Operator::LessEq,
        Operator::Eq,
        Operator::Greater,
        Operator::Less,
        Operator::Add,
        Operator::Minus,
        Operator::Times,
        Operator::Div,
        Operator::Rem,
    ];

    /// Source spellings of this operator
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Operator::And => &["&", " and ", " AND "],
            Operator::Or => &["|", " or ", " OR "],
            Operator::GreaterEq => &[">="],
            Operator::LessEq => &["<="],
            Operator::Eq => &["="],
            Operator::Greater => &[">"],
            Operator::Less => &["<"],
            Operator::Add => &["+"],
            Operator::Minus => &["-"],
            Operator::Times => &["*"],
            Operator::Div => &["/"],
            Operator::Rem => &["%"],
            Operator::CopyLeft => &[],
        }
    }

    /// Short name used in listings
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::And => "&",
            Operator::Or => "|",
            Operator::CopyLeft => "copy",
            other => other.aliases()[0],
        }
    }

    /// Resolve an exact alias
    pub fn from_alias(alias: &str) -> Option<Operator> {
        ALIAS_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == alias)
            .map(|(_, op)| *op)
    }

    /// Longest alias that `input` starts with
    pub fn alias_at(input: &str) -> Option<(&'static str, Operator)> {
        ALIAS_TABLE
            .iter()
            .find(|(alias, _)| input.starts_with(*alias))
            .copied()
    }

    /// Types this operator accepts during type inference
    pub fn accepted_types(&self) -> &'static [DataType] {
        match self {
            Operator::And | Operator::Or => &[DataType::Bool],
            Operator::GreaterEq | Operator::LessEq | Operator::Greater | Operator::Less => {
                &[DataType::Number, DataType::Time]
            }
            Operator::Eq | Operator::CopyLeft => &DataType::CONCRETE,
            Operator::Add => &[DataType::Number, DataType::Text],
            Operator::Minus => &[DataType::Number, DataType::Time],
            Operator::Times | Operator::Div | Operator::Rem => &[DataType::Number],
        }
    }

    /// Returns true if this is a comparison operator
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Operator::GreaterEq
                | Operator::LessEq
                | Operator::Eq
                | Operator::Greater
                | Operator::Less
        )
    }

    /// Returns true if this is an arithmetic operator
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Minus | Operator::Times | Operator::Div | Operator::Rem
        )
    }

    /// Returns true if this is a logical operator
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    /// Result type of applying this operator to two operands of `operand_type`
    pub fn infer_type(&self, operand_type: DataType) -> Result<DataType> {
        if !self.accepted_types().contains(&operand_type) {
            return Err(CoreError::UnsupportedType {
                operator: *self,
                data_type: operand_type,
            });
        }

        let inferred = match self {
            Operator::And | Operator::Or => DataType::Bool,
            op if op.is_comparison() => DataType::Bool,
            Operator::Minus if operand_type == DataType::Time => DataType::Number,
            _ => operand_type,
        };
        Ok(inferred)
    }

    /// Evaluate this operator on two values of `data_type`
    ///
    /// Unlike [`Operator::infer_type`] this follows the per-type semantics
    /// only, so TEXT under MINUS concatenates here even though inference
    /// rejects it.
    pub fn evaluate(&self, left: &str, right: &str, data_type: DataType) -> Result<Literal> {
        if !data_type.is_concrete() {
            return Err(CoreError::UnsupportedType {
                operator: *self,
                data_type,
            });
        }

        match self {
            Operator::CopyLeft => Ok(Literal::new(left, data_type)),
            Operator::And | Operator::Or => operators::execute_logical(left, self, right, data_type),
            op if op.is_comparison() => operators::execute_compare(left, self, right, data_type),
            _ => operators::execute_arithmetic(left, self, right, data_type),
        }
    }

    /// Evaluate this operator on two literals of the same type
    pub fn apply(&self, left: &Literal, right: &Literal) -> Result<Literal> {
        if left.data_type != right.data_type {
            return Err(CoreError::TypeMismatch {
                left: left.data_type,
                right: right.data_type,
            });
        }
        self.evaluate(&left.data, &right.data, left.data_type)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
