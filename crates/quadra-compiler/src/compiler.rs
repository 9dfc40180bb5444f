//! Main compiler
//!
//! Runs the compile pipeline for one expression: parse, generate
//! quadruples, fold constants, and package the result as a shared program
//! that runners execute.

use crate::codegen::QuadrupleGenerator;
use crate::error::Result;
use crate::optimizer::ConstantFolder;
use quadra_core::ir::{Program, ProgramMetadata};
use quadra_parser::ExpressionParser;
use quadra_runtime::Runner;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Compiler options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Enable constant folding optimization
    pub enable_constant_folding: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            enable_constant_folding: true,
        }
    }
}

/// A compiled expression
#[derive(Debug, Clone)]
pub struct Compiler {
    program: Arc<Program>,
    options: CompilerOptions,
}

impl Compiler {
    /// Compile `source` with default options
    pub fn new(source: &str) -> Result<Self> {
        Self::with_options(source, CompilerOptions::default())
    }

    /// Compile `source` with custom options
    pub fn with_options(source: &str, options: CompilerOptions) -> Result<Self> {
        tracing::debug!("Compiling '{}'", source);

        let tree = ExpressionParser::parse(source)?;
        tracing::debug!("Built syntax tree with {} nodes", tree.node_count());

        let quadruples = QuadrupleGenerator::generate(&tree)?;
        tracing::debug!("Generated {} quadruples", quadruples.len());

        let mut metadata = ProgramMetadata::for_source(source);
        metadata.compiler_version = env!("CARGO_PKG_VERSION").to_string();

        let quadruples = if options.enable_constant_folding {
            let outcome = ConstantFolder::new().optimize(quadruples)?;
            tracing::debug!(
                "Constant folding finished after {} passes, {} quadruples folded",
                outcome.passes,
                outcome.folded
            );
            metadata.optimization_passes = outcome.passes;
            metadata.folded_quadruples = outcome.folded;
            outcome.quadruples
        } else {
            quadruples
        };

        Ok(Self {
            program: Arc::new(Program::new(quadruples, metadata)),
            options,
        })
    }

    /// Create a runner over the compiled program
    ///
    /// Runners share the program, so building many of them is cheap.
    pub fn build(&self) -> Runner {
        Runner::new(Arc::clone(&self.program))
    }

    /// The compiled program
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Options the program was compiled with
    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)
    }
}

/// Compile `source` with default options
pub fn compile(source: &str) -> Result<Compiler> {
    Compiler::new(source)
}
