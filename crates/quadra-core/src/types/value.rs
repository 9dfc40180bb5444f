//! String-encoded literal values
//!
//! Every value the language handles, whether written in source, supplied by
//! the caller or produced by an operator, is carried as its textual encoding
//! together with its data type.

use crate::types::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed, string-encoded value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// Textual encoding of the value
    pub data: String,
    /// Type of the value
    pub data_type: DataType,
}

impl Literal {
    /// Create a literal of the given type
    pub fn new(data: impl Into<String>, data_type: DataType) -> Self {
        Self {
            data: data.into(),
            data_type,
        }
    }

    /// NUMBER literal
    pub fn number(data: impl Into<String>) -> Self {
        Self::new(data, DataType::Number)
    }

    /// TEXT literal
    pub fn text(data: impl Into<String>) -> Self {
        Self::new(data, DataType::Text)
    }

    /// BOOL literal
    pub fn bool(value: bool) -> Self {
        Self::new(value.to_string(), DataType::Bool)
    }

    /// TIME literal
    pub fn time(data: impl Into<String>) -> Self {
        Self::new(data, DataType::Time)
    }

    /// Split into `(type, data)`
    pub fn into_pair(self) -> (DataType, String) {
        (self.data_type, self.data)
    }
}

impl From<(DataType, String)> for Literal {
    fn from((data_type, data): (DataType, String)) -> Self {
        Self { data, data_type }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.data_type, self.data)
    }
}
