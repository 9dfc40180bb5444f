//! Quadra Compiler - Source text to quadruple programs
//!
//! This crate compiles expression source into an optimized quadruple
//! program and hands out runners for it.

pub mod codegen;
pub mod compiler;
pub mod error;
pub mod optimizer;

// Re-export main types
pub use codegen::QuadrupleGenerator;
pub use compiler::{compile, Compiler, CompilerOptions};
pub use error::{CompileError, Result};
pub use optimizer::ConstantFolder;

// Re-export the types callers need to drive a runner
pub use quadra_core::types::{DataType, Literal};
pub use quadra_runtime::{Runner, RuntimeError};
