//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Source is empty or blank
    #[error("Expression is empty")]
    EmptySource,

    /// Quoted literal without closing quote
    #[error("Unterminated literal starting at byte {position}")]
    UnterminatedLiteral { position: usize },

    /// Parenthesized group without closing parenthesis
    #[error("Unterminated group starting at byte {position}")]
    UnterminatedGroup { position: usize },

    /// Token sequence does not alternate operand, operator, operand
    #[error("Malformed expression at token {position}: {message}")]
    MalformedSequence { position: usize, message: String },

    /// Variable name does not match the identifier pattern
    #[error("Invalid variable name: '{0}'")]
    InvalidVariableName(String),

    /// Operator token not present in the operator table
    #[error("Unknown operator: '{0}'")]
    UnknownOperatorUsage(String),

    /// Token shape the tree builder cannot classify
    #[error("Structural error: {0}")]
    StructuralError(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
