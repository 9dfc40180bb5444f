//! Quadra Runtime - Execution of compiled quadruple programs
//!
//! This crate provides the runner that walks a compiled program either to
//! infer its result type from variable types, or to evaluate it from
//! variable values.

pub mod bindings;
pub mod context;
pub mod error;
pub mod runner;

// Re-export main types
pub use bindings::{TypeBindings, ValueBindings};
pub use context::ExecutionContext;
pub use error::{Result, RuntimeError};
pub use runner::Runner;
