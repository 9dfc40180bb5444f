//! Arithmetic operator execution

use super::parse_number;
use crate::ast::Operator;
use crate::error::{CoreError, Result};
use crate::types::{parse_time, DataType, Literal};
use bigdecimal::Zero;

/// Execute `+ - * / %`
pub(crate) fn execute_arithmetic(
    left: &str,
    op: &Operator,
    right: &str,
    data_type: DataType,
) -> Result<Literal> {
    let unsupported = || CoreError::UnsupportedType {
        operator: *op,
        data_type,
    };

    match data_type {
        DataType::Number => {
            let (l, r) = (parse_number(left)?, parse_number(right)?);
            let result = match op {
                Operator::Add => l + r,
                Operator::Minus => l - r,
                Operator::Times => l * r,
                Operator::Div | Operator::Rem if r.is_zero() => {
                    return Err(CoreError::DivisionByZero)
                }
                Operator::Div => l / r,
                Operator::Rem => l % r,
                _ => return Err(unsupported()),
            };
            Ok(Literal::number(result.to_plain_string()))
        }

        // MINUS on TEXT concatenates just like ADD
        DataType::Text => match op {
            Operator::Add | Operator::Minus => Ok(Literal::text(format!("{}{}", left, right))),
            _ => Err(unsupported()),
        },

        DataType::Time => match op {
            Operator::Minus => {
                let (from, to) = (parse_time(left)?, parse_time(right)?);
                let seconds = (to - from).num_seconds();
                log::trace!("{} - {} -> {}s", left, right, seconds);
                Ok(Literal::number(seconds.to_string()))
            }
            _ => Err(unsupported()),
        },

        DataType::Bool | DataType::Any => Err(unsupported()),
    }
}
