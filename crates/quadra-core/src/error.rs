//! Error types for Quadra Core

use crate::ast::Operator;
use crate::types::DataType;
use thiserror::Error;

/// Core error type, raised while typing or evaluating an operator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The two operands of an instruction disagree in type
    #[error("Type mismatch: {left} and {right}")]
    TypeMismatch { left: DataType, right: DataType },

    /// Operator applied to a type outside its accepted set
    #[error("Operator {operator} does not support type {data_type}")]
    UnsupportedType {
        operator: Operator,
        data_type: DataType,
    },

    /// A TIME operand does not follow `yyyy/MM/dd HH:mm:ss`
    #[error("Malformed time value: '{0}'")]
    MalformedTimeValue(String),

    /// A NUMBER or BOOL operand cannot be parsed
    #[error("Malformed {data_type} value: '{value}'")]
    MalformedValue { data_type: DataType, value: String },

    /// Division or remainder by zero
    #[error("Division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, CoreError>;
