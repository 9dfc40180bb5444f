//! Quadra Core - Core types and definitions for the Quadra expression language
//!
//! This crate provides the fundamental types shared by the parser, compiler
//! and runtime:
//! - Data types and string-encoded literal values
//! - The operator table and the semantics of every operator
//! - Syntax tree (AST) definitions
//! - Quadruple IR (three-address code) definitions
//! - Error types

pub mod ast;
pub mod error;
pub mod ir;
pub mod operators;
pub mod types;

// Re-export commonly used types
pub use ast::{ChildRef, Operator, SyntaxTree};
pub use error::{CoreError, Result};
pub use ir::{Operand, Program, ProgramMetadata, Quadruple};
pub use types::{DataType, Literal};
