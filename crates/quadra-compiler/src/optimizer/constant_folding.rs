//! Constant folding optimizer
//!
//! Evaluates quadruples whose operands are both literals at compile time and
//! substitutes their results into the quadruples that reference them. Each
//! pass produces a new list; passes repeat until nothing folds.
//!
//! The last remaining quadruple is never folded away: when a pass would
//! leave the list empty, the list from before that pass is kept so the
//! runner always has a final instruction.

use crate::error::Result;
use quadra_core::ir::Quadruple;
use quadra_core::types::Literal;
use std::collections::HashMap;

/// Constant folding optimizer
pub struct ConstantFolder;

/// Result of folding a quadruple list to its fixed point
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutcome {
    /// Remaining quadruples, in execution order
    pub quadruples: Vec<Quadruple>,
    /// Passes that removed at least one quadruple
    pub passes: usize,
    /// Quadruples removed in total
    pub folded: usize,
}

/// Result of a single pass
enum FoldPass {
    /// Nothing left to fold
    Stable,
    /// Some quadruples were folded away
    Folded {
        remaining: Vec<Quadruple>,
        count: usize,
    },
    /// Every quadruple folded; the input list with known result types
    Exhausted(Vec<Quadruple>),
}

impl ConstantFolder {
    /// Create a new constant folder
    pub fn new() -> Self {
        Self
    }

    /// Fold until no literal-only quadruple remains
    pub fn optimize(&self, quadruples: Vec<Quadruple>) -> Result<FoldOutcome> {
        let mut current = quadruples;
        let mut passes = 0;
        let mut folded = 0;

        loop {
            match self.fold_pass(&current)? {
                FoldPass::Stable => break,
                FoldPass::Folded { remaining, count } => {
                    passes += 1;
                    folded += count;
                    tracing::debug!(
                        "Constant folding pass {} folded {} quadruples, {} remain",
                        passes,
                        count,
                        remaining.len()
                    );
                    current = remaining;
                }
                FoldPass::Exhausted(annotated) => {
                    tracing::debug!("Constant folding reached a single literal result");
                    current = annotated;
                    break;
                }
            }
        }

        Ok(FoldOutcome {
            quadruples: current,
            passes,
            folded,
        })
    }

    fn fold_pass(&self, quadruples: &[Quadruple]) -> Result<FoldPass> {
        let mut resolved: HashMap<u32, Literal> = HashMap::new();
        for quad in quadruples {
            if let Some((left, right)) = quad.literal_operands() {
                let literal = quad.operator.apply(left, right)?;
                tracing::trace!("Folded #{:02} to {}", quad.id, literal);
                resolved.insert(quad.id, literal);
            }
        }

        if resolved.is_empty() {
            return Ok(FoldPass::Stable);
        }

        let remaining: Vec<Quadruple> = quadruples
            .iter()
            .filter(|quad| !resolved.contains_key(&quad.id))
            .map(|quad| quad.with_resolved(&resolved))
            .collect();

        if remaining.is_empty() {
            let annotated = quadruples
                .iter()
                .map(|quad| {
                    let mut quad = quad.clone();
                    if let Some(literal) = resolved.get(&quad.id) {
                        quad.result_type = literal.data_type;
                    }
                    quad
                })
                .collect();
            return Ok(FoldPass::Exhausted(annotated));
        }

        Ok(FoldPass::Folded {
            remaining,
            count: resolved.len(),
        })
    }
}

impl Default for ConstantFolder {
    fn default() -> Self {
        Self::new()
    }
}
