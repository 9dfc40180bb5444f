//! Semantic validator
//!
//! Checks that a token sequence alternates operand and operator, ends on an
//! operand, and only names variables with valid identifiers. Groups are
//! checked recursively before their parent sequence is accepted.

use crate::error::{ParseError, Result};
use crate::lexer::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VARIABLE_NAME: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9_.]*$").expect("variable name pattern is valid");
}

/// Token sequence validator
pub struct SemanticValidator;

impl SemanticValidator {
    /// Validate a token sequence and all nested groups
    pub fn validate(tokens: &[Token]) -> Result<()> {
        let last = tokens.last().ok_or_else(|| ParseError::MalformedSequence {
            position: 0,
            message: "empty expression".to_string(),
        })?;

        for (position, token) in tokens.iter().enumerate() {
            let expects_operand = position % 2 == 0;
            if expects_operand && !token.is_operand() {
                return Err(ParseError::MalformedSequence {
                    position,
                    message: format!("expected a variable, literal or group, found {}", token),
                });
            }
            if !expects_operand && !token.is_operator() {
                return Err(ParseError::MalformedSequence {
                    position,
                    message: format!("expected an operator, found {}", token),
                });
            }
        }

        if !last.is_operand() {
            return Err(ParseError::MalformedSequence {
                position: tokens.len() - 1,
                message: format!("expression cannot end with operator {}", last),
            });
        }

        for token in tokens {
            match token {
                Token::Variable(name) if !Self::is_valid_variable_name(name) => {
                    return Err(ParseError::InvalidVariableName(name.clone()));
                }
                Token::Group(children) => Self::validate(children)?,
                _ => {}
            }
        }

        Ok(())
    }

    /// Check a variable name against `^[A-Za-z][A-Za-z0-9_.]*$`
    ///
    /// The tail is `*` rather than `+`, so single-letter names such as `x`
    /// are accepted.
    pub fn is_valid_variable_name(name: &str) -> bool {
        VARIABLE_NAME.is_match(name)
    }
}
