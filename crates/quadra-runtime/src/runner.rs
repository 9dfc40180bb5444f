//! Quadruple program runner
//!
//! Walks the quadruples of a compiled program in order. Two modes exist and
//! are never mixed in one call:
//! - type inference from variable types
//! - evaluation from variable values
//!
//! The program is shared and immutable; all scratch state lives in a
//! per-call [`ExecutionContext`].

use crate::bindings::{TypeBindings, ValueBindings};
use crate::context::ExecutionContext;
use crate::error::{Result, RuntimeError};
use quadra_core::ir::{Operand, Program, Quadruple};
use quadra_core::types::{DataType, Literal};
use quadra_core::CoreError;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Runner of a compiled expression
#[derive(Debug, Clone)]
pub struct Runner {
    program: Arc<Program>,
}

impl Runner {
    /// Create a runner for a program
    pub fn new(program: Arc<Program>) -> Self {
        Self { program }
    }

    /// The program this runner executes
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Distinct names of the variables the caller must bind
    pub fn collect_variables(&self) -> BTreeSet<String> {
        self.program.variables()
    }

    /// Infer the result type from variable types
    pub fn infer<B>(&self, variables: &B) -> Result<DataType>
    where
        B: TypeBindings + ?Sized,
    {
        let mut ctx = ExecutionContext::new();

        for quad in &self.program.quadruples {
            let left = Self::operand_type(&quad.left, variables, &ctx)?;
            let right = Self::operand_type(&quad.right, variables, &ctx)?;
            Self::check_types(left, right)?;

            let result_type = quad.operator.infer_type(left)?;
            tracing::trace!("#{:02} {} {} {} : {}", quad.id, left, quad.operator, right, result_type);
            ctx.store(quad.id, result_type);
        }

        let result_type = ctx.into_last()?;
        tracing::debug!("Inferred {} for '{}'", result_type, self.program.metadata.source);
        Ok(result_type)
    }

    /// Evaluate the expression from variable values
    pub fn evaluate<B>(&self, variables: &B) -> Result<Literal>
    where
        B: ValueBindings + ?Sized,
    {
        let mut ctx = ExecutionContext::new();

        for quad in &self.program.quadruples {
            let result = Self::execute(quad, variables, &ctx)?;
            tracing::trace!("#{:02} -> {}", quad.id, result);
            ctx.store(quad.id, result);
        }

        let result = ctx.into_last()?;
        tracing::debug!("Evaluated '{}' to {}", self.program.metadata.source, result);
        Ok(result)
    }

    fn execute<B>(quad: &Quadruple, variables: &B, ctx: &ExecutionContext<Literal>) -> Result<Literal>
    where
        B: ValueBindings + ?Sized,
    {
        let left = Self::operand_value(&quad.left, variables, ctx)?;
        let right = Self::operand_value(&quad.right, variables, ctx)?;
        Self::check_types(left.data_type, right.data_type)?;
        Ok(quad.operator.evaluate(&left.data, &right.data, left.data_type)?)
    }

    fn check_types(left: DataType, right: DataType) -> Result<()> {
        if left != right {
            return Err(CoreError::TypeMismatch { left, right }.into());
        }
        Ok(())
    }

    fn operand_type<B>(
        operand: &Operand,
        variables: &B,
        ctx: &ExecutionContext<DataType>,
    ) -> Result<DataType>
    where
        B: TypeBindings + ?Sized,
    {
        match operand {
            Operand::Literal(literal) => Ok(literal.data_type),
            Operand::Variable { name, .. } => variables
                .type_of(name)
                .ok_or_else(|| RuntimeError::UnknownVariable(name.clone())),
            Operand::Context(id) => ctx.load(*id),
        }
    }

    fn operand_value<B>(
        operand: &Operand,
        variables: &B,
        ctx: &ExecutionContext<Literal>,
    ) -> Result<Literal>
    where
        B: ValueBindings + ?Sized,
    {
        match operand {
            Operand::Literal(literal) => Ok(literal.clone()),
            Operand::Variable { name, .. } => variables
                .value_of(name)
                .ok_or_else(|| RuntimeError::UnknownVariable(name.clone())),
            Operand::Context(id) => ctx.load(*id),
        }
    }
}

impl From<Program> for Runner {
    fn from(program: Program) -> Self {
        Self::new(Arc::new(program))
    }
}

impl fmt::Display for Runner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}
