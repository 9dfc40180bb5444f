//! Optimization module
//!
//! This module provides optimizations for quadruple programs.

pub mod constant_folding;

// Re-export for convenience
pub use constant_folding::{ConstantFolder, FoldOutcome};
