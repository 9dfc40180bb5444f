//! Code generation
//!
//! Lowers syntax trees into quadruple lists.

mod quadruple_codegen;

pub use quadruple_codegen::QuadrupleGenerator;
