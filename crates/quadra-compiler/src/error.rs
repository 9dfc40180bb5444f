//! Compiler error types

use quadra_core::CoreError;
use quadra_parser::ParseError;
use thiserror::Error;

/// Compiler error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Lexing, validation or tree building failed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Constant folding failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Tree shape the code generator cannot classify
    #[error("Structural error: {0}")]
    StructuralError(String),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
