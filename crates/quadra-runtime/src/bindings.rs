//! Variable bindings
//!
//! The caller owns the variable environment. The runner only asks it for the
//! type or the value of a name.

use quadra_core::types::{DataType, Literal};
use std::collections::{BTreeMap, HashMap};

/// Source of declared variable types
pub trait TypeBindings {
    fn type_of(&self, name: &str) -> Option<DataType>;
}

/// Source of variable values
pub trait ValueBindings {
    fn value_of(&self, name: &str) -> Option<Literal>;
}

impl TypeBindings for HashMap<String, DataType> {
    fn type_of(&self, name: &str) -> Option<DataType> {
        self.get(name).copied()
    }
}

impl TypeBindings for BTreeMap<String, DataType> {
    fn type_of(&self, name: &str) -> Option<DataType> {
        self.get(name).copied()
    }
}

impl ValueBindings for HashMap<String, (DataType, String)> {
    fn value_of(&self, name: &str) -> Option<Literal> {
        self.get(name)
            .map(|(data_type, data)| Literal::new(data.clone(), *data_type))
    }
}

impl ValueBindings for BTreeMap<String, (DataType, String)> {
    fn value_of(&self, name: &str) -> Option<Literal> {
        self.get(name)
            .map(|(data_type, data)| Literal::new(data.clone(), *data_type))
    }
}

impl ValueBindings for HashMap<String, Literal> {
    fn value_of(&self, name: &str) -> Option<Literal> {
        self.get(name).cloned()
    }
}

impl ValueBindings for BTreeMap<String, Literal> {
    fn value_of(&self, name: &str) -> Option<Literal> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_bindings() {
        let mut types = HashMap::new();
        types.insert("age".to_string(), DataType::Number);
        assert_eq!(types.type_of("age"), Some(DataType::Number));
        assert_eq!(types.type_of("name"), None);
    }

    #[test]
    fn test_pair_value_bindings() {
        let mut values = HashMap::new();
        values.insert("host".to_string(), (DataType::Text, "linux".to_string()));
        assert_eq!(values.value_of("host"), Some(Literal::text("linux")));
        assert_eq!(values.value_of("port"), None);
    }

    #[test]
    fn test_ordered_pair_value_bindings() {
        let mut values = BTreeMap::new();
        values.insert("since".to_string(), (DataType::Time, "2024/01/01 00:00:00".to_string()));
        assert_eq!(values.value_of("since"), Some(Literal::time("2024/01/01 00:00:00")));
        assert_eq!(values.value_of("until"), None);
    }

    #[test]
    fn test_literal_value_bindings() {
        let mut values = BTreeMap::new();
        values.insert("flag".to_string(), Literal::bool(true));
        assert_eq!(values.value_of("flag"), Some(Literal::bool(true)));
    }
}
