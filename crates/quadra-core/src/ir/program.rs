//! IR Program
//!
//! A program is the ordered quadruple list of one compiled expression with
//! associated metadata. The last quadruple holds the expression's result.

use crate::ir::Quadruple;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A compiled expression ready for execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Quadruples in execution order
    pub quadruples: Vec<Quadruple>,

    /// Program metadata
    pub metadata: ProgramMetadata,
}

/// Metadata associated with a program
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgramMetadata {
    /// Source expression text
    pub source: String,

    /// Number of constant folding passes that folded something
    pub optimization_passes: usize,

    /// Number of quadruples folded into literals
    pub folded_quadruples: usize,

    /// Version of the compiler that generated this
    pub compiler_version: String,
}

impl Program {
    /// Create a new program
    pub fn new(quadruples: Vec<Quadruple>, metadata: ProgramMetadata) -> Self {
        Self {
            quadruples,
            metadata,
        }
    }

    /// Get the number of quadruples
    pub fn len(&self) -> usize {
        self.quadruples.len()
    }

    /// Check if program is empty
    pub fn is_empty(&self) -> bool {
        self.quadruples.is_empty()
    }

    /// The quadruple whose result is the expression's result
    pub fn result(&self) -> Option<&Quadruple> {
        self.quadruples.last()
    }

    /// Get quadruple by id
    pub fn get(&self, id: u32) -> Option<&Quadruple> {
        self.quadruples.iter().find(|quad| quad.id == id)
    }

    /// Distinct variable names referenced anywhere in the program
    pub fn variables(&self) -> BTreeSet<String> {
        self.quadruples
            .iter()
            .flat_map(Quadruple::variables)
            .map(str::to_string)
            .collect()
    }

    /// Check that every context reference points at an earlier quadruple
    pub fn is_well_ordered(&self) -> bool {
        let mut seen = BTreeSet::new();
        for quad in &self.quadruples {
            let refs_ok = [&quad.left, &quad.right]
                .iter()
                .filter_map(|operand| operand.context_id())
                .all(|id| seen.contains(&id));
            if !refs_ok {
                return false;
            }
            seen.insert(quad.id);
        }
        true
    }
}

impl ProgramMetadata {
    /// Metadata for a freshly compiled source
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            compiler_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.quadruples.iter().map(|quad| quad.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;
    use crate::ir::Operand;
    use crate::types::Literal;

    fn sample() -> Program {
        Program::new(
            vec![
                Quadruple::new(1, Operand::variable("a"), Operator::Add, Operand::variable("b")),
                Quadruple::new(2, Operand::Context(1), Operator::Times, Operand::variable("a")),
            ],
            ProgramMetadata::for_source("(a + b) * a"),
        )
    }

    #[test]
    fn test_program_accessors() {
        let program = sample();
        assert_eq!(program.len(), 2);
        assert!(!program.is_empty());
        assert_eq!(program.result().map(|quad| quad.id), Some(2));
        assert_eq!(program.get(1).map(|quad| quad.operator), Some(Operator::Add));
        assert!(program.get(7).is_none());
        assert_eq!(program.metadata.source, "(a + b) * a");
    }

    #[test]
    fn test_program_variables_are_distinct() {
        let variables: Vec<String> = sample().variables().into_iter().collect();
        assert_eq!(variables, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_well_ordered() {
        assert!(sample().is_well_ordered());

        let backwards = Program::new(
            vec![
                Quadruple::new(2, Operand::Context(1), Operator::Add, Operand::Literal(Literal::number("1"))),
                Quadruple::new(1, Operand::variable("a"), Operator::Add, Operand::variable("b")),
            ],
            ProgramMetadata::default(),
        );
        assert!(!backwards.is_well_ordered());
    }

    #[test]
    fn test_display_one_line_per_quadruple() {
        let rendered = sample().to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().nth(1).unwrap().starts_with("#02: #01"));
    }
}
