//! Runtime error types

use quadra_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Referenced variable missing from the supplied bindings
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Context reference to a quadruple that has not been computed
    #[error("Unresolved reference to #{0:02}")]
    UnresolvedReference(u32),

    /// Program without quadruples
    #[error("Program has no quadruples")]
    EmptyProgram,

    /// Type or evaluation error raised by an operator
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
