//! Quadra Parser - Source text to syntax tree
//!
//! This crate turns expression source text into the binary syntax tree of
//! `quadra-core` in three steps:
//! - lexing into grammar tokens
//! - semantic validation of the token sequence
//! - precedence-driven tree building

pub mod error;
pub mod expression;
pub mod lexer;
pub mod tree_builder;
pub mod validator;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use expression::ExpressionParser;
pub use lexer::{Lexer, Token};
pub use tree_builder::TreeBuilder;
pub use validator::SemanticValidator;
