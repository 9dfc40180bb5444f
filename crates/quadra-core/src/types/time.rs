//! The fixed TIME format

use crate::error::{CoreError, Result};
use chrono::NaiveDateTime;

/// chrono pattern for `yyyy/MM/dd HH:mm:ss`
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parse a TIME value
pub fn parse_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| CoreError::MalformedTimeValue(value.to_string()))
}

/// Render a date-time in the TIME format
pub fn format_time(value: &NaiveDateTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        let time = parse_time("2024/01/02 03:04:05").unwrap();
        assert_eq!(format_time(&time), "2024/01/02 03:04:05");
    }

    #[test]
    fn test_parse_time_rejects_other_formats() {
        assert_eq!(
            parse_time("2024-01-02 03:04:05"),
            Err(CoreError::MalformedTimeValue("2024-01-02 03:04:05".to_string()))
        );
        assert!(parse_time("2024/01/02").is_err());
        assert!(parse_time("2024/13/02 00:00:00").is_err());
    }
}
