//! Comparison operator execution

use super::parse_number;
use crate::ast::Operator;
use crate::error::{CoreError, Result};
use crate::types::{parse_time, DataType, Literal};
use std::cmp::Ordering;

/// Execute a comparison, producing a BOOL literal
///
/// NUMBER compares as decimals and TIME chronologically. TEXT and BOOL only
/// support equality, which compares the encoded strings.
pub(crate) fn execute_compare(
    left: &str,
    op: &Operator,
    right: &str,
    data_type: DataType,
) -> Result<Literal> {
    let ordering = match data_type {
        DataType::Number => parse_number(left)?.cmp(&parse_number(right)?),
        DataType::Time => parse_time(left)?.cmp(&parse_time(right)?),
        DataType::Text | DataType::Bool if *op == Operator::Eq => {
            return Ok(Literal::bool(left == right));
        }
        _ => {
            return Err(CoreError::UnsupportedType {
                operator: *op,
                data_type,
            })
        }
    };

    let result = match op {
        Operator::GreaterEq => ordering != Ordering::Less,
        Operator::LessEq => ordering != Ordering::Greater,
        Operator::Eq => ordering == Ordering::Equal,
        Operator::Greater => ordering == Ordering::Greater,
        Operator::Less => ordering == Ordering::Less,
        _ => {
            return Err(CoreError::UnsupportedType {
                operator: *op,
                data_type,
            })
        }
    };
    log::trace!("{} {} {} -> {}", left, op, right, result);
    Ok(Literal::bool(result))
}
