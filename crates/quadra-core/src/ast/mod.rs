//! Abstract Syntax Tree (AST) definitions for Quadra
//!
//! This module contains the operator table and the binary syntax tree built
//! by the parser.

pub mod operator;
pub mod tree;

pub use operator::Operator;
pub use tree::{ChildRef, SyntaxTree};
