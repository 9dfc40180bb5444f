//! Lexer
//!
//! Scans expression source into a flat sequence of grammar tokens.
//!
//! - `'...'` is a TEXT literal, or a TIME literal when the content follows
//!   `yyyy/MM/dd HH:mm:ss`
//! - `(...)` is a group whose content is lexed recursively
//! - every operator alias of the operator table, longest match first
//! - anything else between operators is a NUMBER literal, a BOOL literal
//!   (`true` / `false`) or a variable reference

use crate::error::{ParseError, Result};
use quadra_core::ast::Operator;
use lazy_static::lazy_static;
use quadra_core::types::{parse_time, DataType, Literal};
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref NUMBER_LITERAL: Regex =
        Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("number literal pattern is valid");
}

/// Grammar token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Variable reference
    Variable(String),

    /// Constant value
    Literal(Literal),

    /// Operator alias as written in source
    Operator(String),

    /// Parenthesized sub-expression
    Group(Vec<Token>),
}

impl Token {
    /// Returns true for tokens that may stand where a value is expected
    pub fn is_operand(&self) -> bool {
        !self.is_operator()
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "${}", name),
            Token::Literal(literal) => write!(f, "{}", literal),
            Token::Operator(alias) => write!(f, "'{}'", alias.trim()),
            Token::Group(children) => {
                let inner: Vec<String> = children.iter().map(|token| token.to_string()).collect();
                write!(f, "({})", inner.join(" "))
            }
        }
    }
}

/// Expression lexer
pub struct Lexer;

impl Lexer {
    /// Tokenize an expression
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let tokens = Self::lex(source, 0)?;
        log::trace!("Lexed {} top-level tokens from '{}'", tokens.len(), source);
        Ok(tokens)
    }

    /// Lex `source`, which starts at byte `offset` of the full source
    fn lex(source: &str, offset: usize) -> Result<Vec<Token>> {
        if source.trim().is_empty() {
            return Err(ParseError::EmptySource);
        }

        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(current) = source[pos..].chars().next() {
            let rest = &source[pos..];

            match current {
                '\'' => {
                    let end = rest[1..]
                        .find('\'')
                        .ok_or(ParseError::UnterminatedLiteral {
                            position: offset + pos,
                        })?;
                    tokens.push(Token::Literal(Self::quoted_literal(&rest[1..1 + end])));
                    pos += end + 2;
                }

                '(' => {
                    let close = Self::matching_paren(rest).ok_or(ParseError::UnterminatedGroup {
                        position: offset + pos,
                    })?;
                    let children = Self::lex(&rest[1..close], offset + pos + 1)?;
                    tokens.push(Token::Group(children));
                    pos += close + 1;
                }

                // keyword aliases begin with a space, so whitespace is only
                // skipped when no alias starts here
                c if Self::is_whitespace(c) && Operator::alias_at(rest).is_none() => {
                    pos += c.len_utf8();
                }

                _ => match Self::find_next_operator(source, pos) {
                    Some((index, alias)) => {
                        Self::push_operand(&mut tokens, &source[pos..index]);
                        tokens.push(Token::Operator(alias.to_string()));
                        pos = index + alias.len();
                    }
                    None => {
                        Self::push_operand(&mut tokens, &source[pos..]);
                        break;
                    }
                },
            }
        }

        Ok(tokens)
    }

    fn is_whitespace(c: char) -> bool {
        matches!(c, ' ' | '\r' | '\n' | '\t')
    }

    /// Byte index of the parenthesis closing the one `input` starts with
    fn matching_paren(input: &str) -> Option<usize> {
        let mut depth = 0usize;
        let mut in_quote = false;

        for (index, c) in input.char_indices().skip(1) {
            match c {
                '\'' => in_quote = !in_quote,
                '(' if !in_quote => depth += 1,
                ')' if !in_quote => {
                    if depth == 0 {
                        return Some(index);
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
        None
    }

    /// First alias at or after byte `from`
    fn find_next_operator(source: &str, from: usize) -> Option<(usize, &'static str)> {
        source[from..].char_indices().find_map(|(index, _)| {
            Operator::alias_at(&source[from + index..]).map(|(alias, _)| (from + index, alias))
        })
    }

    fn quoted_literal(content: &str) -> Literal {
        if parse_time(content).is_ok() {
            Literal::time(content)
        } else {
            Literal::text(content)
        }
    }

    fn push_operand(tokens: &mut Vec<Token>, raw: &str) {
        let operand = raw.trim();
        if operand.is_empty() {
            return;
        }

        let token = if NUMBER_LITERAL.is_match(operand) {
            Token::Literal(Literal::number(operand))
        } else if operand == "true" || operand == "false" {
            Token::Literal(Literal::new(operand, DataType::Bool))
        } else {
            Token::Variable(operand.to_string())
        };
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(alias: &str) -> Token {
        Token::Operator(alias.to_string())
    }

    fn var(name: &str) -> Token {
        Token::Variable(name.to_string())
    }

    #[test]
    fn test_tokenize_arithmetic() {
        let tokens = Lexer::tokenize("1 + 2 * rate").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal(Literal::number("1")),
                op("+"),
                Token::Literal(Literal::number("2")),
                op("*"),
                var("rate"),
            ]
        );
    }

    #[test]
    fn test_only_plain_decimals_are_numbers() {
        let tokens = Lexer::tokenize("12.50 + 1e100000000 + 1.").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal(Literal::number("12.50")),
                op("+"),
                var("1e100000000"),
                op("+"),
                var("1."),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_literals() {
        let tokens = Lexer::tokenize("'arch' + monitor.hostname").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal(Literal::text("arch")),
                op("+"),
                var("monitor.hostname"),
            ]
        );
    }

    #[test]
    fn test_operator_inside_quotes_is_text() {
        let tokens = Lexer::tokenize("name = 'a+b (c)'").unwrap();
        assert_eq!(tokens[2], Token::Literal(Literal::text("a+b (c)")));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_time_shaped_quote_is_time() {
        let tokens = Lexer::tokenize("'2024/01/01 00:00:00'").unwrap();
        assert_eq!(tokens, vec![Token::Literal(Literal::time("2024/01/01 00:00:00"))]);
    }

    #[test]
    fn test_longest_alias_wins() {
        let tokens = Lexer::tokenize("a >= 3").unwrap();
        assert_eq!(tokens[1], op(">="));

        let tokens = Lexer::tokenize("a<=b").unwrap();
        assert_eq!(tokens, vec![var("a"), op("<="), var("b")]);
    }

    #[test]
    fn test_keyword_aliases() {
        let tokens = Lexer::tokenize("ready and done OR failed").unwrap();
        assert_eq!(
            tokens,
            vec![var("ready"), op(" and "), var("done"), op(" OR "), var("failed")]
        );
    }

    #[test]
    fn test_keyword_alias_after_literal() {
        let tokens = Lexer::tokenize("'a' = name and true").unwrap();
        assert_eq!(tokens[3], op(" and "));
        assert_eq!(tokens[4], Token::Literal(Literal::bool(true)));
    }

    #[test]
    fn test_nested_groups() {
        let tokens = Lexer::tokenize("(a + (b * 2)) - 1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Group(vec![
                    var("a"),
                    op("+"),
                    Token::Group(vec![var("b"), op("*"), Token::Literal(Literal::number("2"))]),
                ]),
                op("-"),
                Token::Literal(Literal::number("1")),
            ]
        );
    }

    #[test]
    fn test_whitespace_variants() {
        let tokens = Lexer::tokenize("a\r\n+\tb").unwrap();
        assert_eq!(tokens, vec![var("a"), op("+"), var("b")]);
    }

    #[test]
    fn test_bool_and_number_classification() {
        let tokens = Lexer::tokenize("true = 1.50").unwrap();
        assert_eq!(tokens[0], Token::Literal(Literal::bool(true)));
        assert_eq!(tokens[2], Token::Literal(Literal::number("1.50")));

        // only exact lower-case booleans are literals
        let tokens = Lexer::tokenize("TRUE").unwrap();
        assert_eq!(tokens, vec![var("TRUE")]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(Lexer::tokenize(""), Err(ParseError::EmptySource));
        assert_eq!(Lexer::tokenize(" \r\n "), Err(ParseError::EmptySource));
        assert_eq!(Lexer::tokenize("a + ()"), Err(ParseError::EmptySource));
    }

    #[test]
    fn test_unterminated_literal() {
        assert_eq!(
            Lexer::tokenize("name = 'abc"),
            Err(ParseError::UnterminatedLiteral { position: 7 })
        );
    }

    #[test]
    fn test_unterminated_group() {
        assert_eq!(
            Lexer::tokenize("1 + (2 * (3 + 4)"),
            Err(ParseError::UnterminatedGroup { position: 4 })
        );
    }

    #[test]
    fn test_quotes_inside_groups() {
        assert_eq!(
            Lexer::tokenize("(a + 'b)"),
            Err(ParseError::UnterminatedGroup { position: 0 })
        );
        assert_eq!(
            Lexer::tokenize("(a + 'b) + c"),
            Err(ParseError::UnterminatedGroup { position: 0 })
        );
        assert_eq!(
            Lexer::tokenize("x + (a + 'b)"),
            Err(ParseError::UnterminatedGroup { position: 4 })
        );

        // a quoted ')' does not close the group
        let tokens = Lexer::tokenize("x + (a + 'b)')").unwrap();
        assert_eq!(
            tokens[2],
            Token::Group(vec![var("a"), op("+"), Token::Literal(Literal::text("b)"))])
        );
    }

    #[test]
    fn test_non_ascii_text() {
        let tokens = Lexer::tokenize("'héllo' + wörld").unwrap();
        assert_eq!(tokens[0], Token::Literal(Literal::text("héllo")));
        assert_eq!(tokens[2], var("wörld"));
    }
}
