//! Logical operator execution

use super::parse_bool;
use crate::ast::Operator;
use crate::error::{CoreError, Result};
use crate::types::{DataType, Literal};

/// Execute AND / OR on two BOOL values
pub(crate) fn execute_logical(
    left: &str,
    op: &Operator,
    right: &str,
    data_type: DataType,
) -> Result<Literal> {
    if data_type != DataType::Bool {
        return Err(CoreError::UnsupportedType {
            operator: *op,
            data_type,
        });
    }

    let (l, r) = (parse_bool(left)?, parse_bool(right)?);
    match op {
        Operator::And => Ok(Literal::bool(l && r)),
        Operator::Or => Ok(Literal::bool(l || r)),
        _ => Err(CoreError::UnsupportedType {
            operator: *op,
            data_type,
        }),
    }
}
