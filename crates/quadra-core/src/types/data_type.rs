//! Data types of the expression language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data type of a literal, variable or quadruple result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    /// Placeholder before inference resolves a concrete type
    Any,
    /// Arbitrary-precision decimal text
    Number,
    /// Free text
    Text,
    /// `true` / `false`
    Bool,
    /// Date-time in the fixed `yyyy/MM/dd HH:mm:ss` format
    Time,
}

impl DataType {
    /// All concrete types, in declaration order
    pub const CONCRETE: [DataType; 4] = [
        DataType::Number,
        DataType::Text,
        DataType::Bool,
        DataType::Time,
    ];

    /// Upper-case name used in listings and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Any => "ANY",
            DataType::Number => "NUMBER",
            DataType::Text => "TEXT",
            DataType::Bool => "BOOL",
            DataType::Time => "TIME",
        }
    }

    /// Returns true unless this is the `Any` placeholder
    pub fn is_concrete(&self) -> bool {
        !matches!(self, DataType::Any)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ANY" => Ok(DataType::Any),
            "NUMBER" => Ok(DataType::Number),
            "TEXT" => Ok(DataType::Text),
            "BOOL" => Ok(DataType::Bool),
            "TIME" => Ok(DataType::Time),
            other => Err(format!("Unknown data type: {}", other)),
        }
    }
}
