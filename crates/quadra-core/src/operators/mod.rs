//! Operator semantics
//!
//! Per-type evaluation of every operator in the table. Values arrive in
//! their string encoding and are parsed on use.

mod arithmetic;
mod comparison;
mod logical;

pub(crate) use arithmetic::execute_arithmetic;
pub(crate) use comparison::execute_compare;
pub(crate) use logical::execute_logical;

use crate::error::{CoreError, Result};
use crate::types::DataType;
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parse a NUMBER value
pub fn parse_number(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value.trim()).map_err(|_| CoreError::MalformedValue {
        data_type: DataType::Number,
        value: value.to_string(),
    })
}

/// Parse a BOOL value, ignoring case
pub fn parse_bool(value: &str) -> Result<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoreError::MalformedValue {
            data_type: DataType::Bool,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1.50").unwrap(), BigDecimal::from_str("1.5").unwrap());
        assert!(parse_number("-3").is_ok());
        assert!(matches!(
            parse_number("abc"),
            Err(CoreError::MalformedValue { data_type: DataType::Number, .. })
        ));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert!(parse_bool("yes").is_err());
    }
}
