//! Type system for Quadra
//!
//! This module contains:
//! - The closed set of data types
//! - String-encoded literal values
//! - The fixed TIME format

pub mod data_type;
pub mod time;
pub mod value;

pub use data_type::DataType;
pub use time::{format_time, parse_time, TIME_FORMAT};
pub use value::Literal;
