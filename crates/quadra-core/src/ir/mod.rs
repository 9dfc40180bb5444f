//! Intermediate Representation (IR) for Quadra
//!
//! The IR is a flat list of quadruples (three-address instructions) produced
//! from the syntax tree and consumed by the optimizer and the runner.

pub mod program;
pub mod quadruple;

pub use program::{Program, ProgramMetadata};
pub use quadruple::{Operand, Quadruple};
