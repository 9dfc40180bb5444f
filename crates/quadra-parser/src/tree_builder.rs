//! Tree builder
//!
//! Converts a validated token sequence into a binary syntax tree. The split
//! point of a sequence is the first occurrence of the loosest-binding
//! operator kind present, following the operator table's declaration order.
//! Because the first occurrence wins, a chain of one operator kind groups to
//! the right: `10 - 2 - 3` builds `10 - (2 - 3)`.

use crate::error::{ParseError, Result};
use crate::lexer::Token;
use quadra_core::ast::{ChildRef, Operator, SyntaxTree};

/// Precedence-driven tree builder
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build the tree of a validated token sequence
    pub fn build(tokens: &[Token]) -> Result<SyntaxTree> {
        let operators = Self::resolve_operators(tokens)?;

        if tokens.len() == 1 {
            return match Self::collapse(tokens)? {
                // a lone group is its own tree
                ChildRef::Nested(tree) => Ok(*tree),
                operand => Ok(SyntaxTree::single(operand)),
            };
        }

        for kind in Operator::PRECEDENCE {
            let split = operators
                .iter()
                .find(|(_, operator)| *operator == kind)
                .map(|(index, _)| *index);

            if let Some(index) = split {
                let left = Self::collapse(&tokens[..index])?;
                let right = Self::collapse(&tokens[index + 1..])?;
                return Ok(SyntaxTree::new(left, kind, right));
            }
        }

        Err(ParseError::StructuralError(format!(
            "no operator to split a sequence of {} tokens",
            tokens.len()
        )))
    }

    /// Positions and kinds of the operator tokens of one sequence
    fn resolve_operators(tokens: &[Token]) -> Result<Vec<(usize, Operator)>> {
        tokens
            .iter()
            .enumerate()
            .filter_map(|(index, token)| match token {
                Token::Operator(alias) => Some(
                    Operator::from_alias(alias)
                        .map(|operator| (index, operator))
                        .ok_or_else(|| ParseError::UnknownOperatorUsage(alias.clone())),
                ),
                _ => None,
            })
            .collect()
    }

    /// Turn one side of a split into a child reference
    fn collapse(tokens: &[Token]) -> Result<ChildRef> {
        match tokens {
            [] => Err(ParseError::StructuralError(
                "operator without operand".to_string(),
            )),
            [Token::Variable(name)] => Ok(ChildRef::variable(name.clone())),
            [Token::Literal(literal)] => Ok(ChildRef::Literal(literal.clone())),
            [Token::Group(children)] => Ok(Self::build(children)?.into_child()),
            [Token::Operator(alias)] => Err(ParseError::StructuralError(format!(
                "operator '{}' used as operand",
                alias.trim()
            ))),
            _ => Ok(Self::build(tokens)?.into_child()),
        }
    }
}
