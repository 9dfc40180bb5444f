//! Expression parser
//!
//! Parses string expressions into syntax trees.
//!
//! Supported syntax:
//! - Variables: `user.age`, `monitor.hostname`
//! - Literals: `42`, `3.14`, `'text'`, `'2024/01/01 00:00:00'`, `true`, `false`
//! - Logical operators: `&`, `and`, `AND`, `|`, `or`, `OR`
//! - Comparison operators: `>=`, `<=`, `=`, `>`, `<`
//! - Arithmetic operators: `+`, `-`, `*`, `/`, `%`
//! - Parentheses for grouping: `(a + b) * c`

use crate::error::Result;
use crate::lexer::Lexer;
use crate::tree_builder::TreeBuilder;
use crate::validator::SemanticValidator;
use quadra_core::ast::SyntaxTree;

/// Expression parser
pub struct ExpressionParser;

impl ExpressionParser {
    /// Parse an expression from a string
    pub fn parse(source: &str) -> Result<SyntaxTree> {
        let tokens = Lexer::tokenize(source)?;
        SemanticValidator::validate(&tokens)?;
        let tree = TreeBuilder::build(&tokens)?;
        log::debug!("Parsed '{}' into {} tree nodes", source.trim(), tree.node_count());
        Ok(tree)
    }
}
