//! Quadruple code generation
//!
//! Post-order walk of the syntax tree. Nested sides are generated first
//! (left before right) and referenced by the id of their last quadruple, so
//! ids ascend in emission order and every context reference points back.

use crate::error::{CompileError, Result};
use quadra_core::ast::{ChildRef, Operator, SyntaxTree};
use quadra_core::ir::{Operand, Quadruple};

/// Quadruple generator
pub struct QuadrupleGenerator {
    next_id: u32,
    quadruples: Vec<Quadruple>,
}

impl QuadrupleGenerator {
    /// Generate the quadruples of a tree
    pub fn generate(tree: &SyntaxTree) -> Result<Vec<Quadruple>> {
        let mut generator = Self {
            next_id: 1,
            quadruples: Vec::new(),
        };
        generator.emit_tree(tree)?;
        tracing::trace!("Generated {} quadruples", generator.quadruples.len());
        Ok(generator.quadruples)
    }

    /// Emit a tree node, returning the id of its result
    fn emit_tree(&mut self, tree: &SyntaxTree) -> Result<u32> {
        match (&tree.left, &tree.right) {
            (ChildRef::Empty, ChildRef::Empty) => Err(CompileError::StructuralError(
                "tree node without operands".to_string(),
            )),

            // single operand: copy it into its own quadruple
            (operand, ChildRef::Empty) | (ChildRef::Empty, operand) => {
                let operand = self.emit_operand(operand)?;
                Ok(self.push(operand.clone(), Operator::CopyLeft, operand))
            }

            (left, right) => {
                let left = self.emit_operand(left)?;
                let right = self.emit_operand(right)?;
                Ok(self.push(left, tree.operator, right))
            }
        }
    }

    fn emit_operand(&mut self, child: &ChildRef) -> Result<Operand> {
        match child {
            ChildRef::Literal(literal) => Ok(Operand::Literal(literal.clone())),
            ChildRef::Variable { name, data_type } => Ok(Operand::Variable {
                name: name.clone(),
                data_type: *data_type,
            }),
            ChildRef::Nested(tree) => Ok(Operand::Context(self.emit_tree(tree)?)),
            ChildRef::Empty => Err(CompileError::StructuralError(
                "empty operand".to_string(),
            )),
        }
    }

    fn push(&mut self, left: Operand, operator: Operator, right: Operand) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.quadruples.push(Quadruple::new(id, left, operator, right));
        id
    }
}
