//! Per-call execution state
//!
//! Every `infer` or `evaluate` call owns one context holding the results of
//! the quadruples computed so far, so the shared program is never mutated.

use crate::error::{Result, RuntimeError};
use std::collections::HashMap;

/// Results of computed quadruples, keyed by quadruple id
#[derive(Debug, Clone)]
pub struct ExecutionContext<T> {
    results: HashMap<u32, T>,
    last: Option<u32>,
}

impl<T: Clone> ExecutionContext<T> {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            last: None,
        }
    }

    /// Record the result of a quadruple
    pub fn store(&mut self, id: u32, result: T) {
        self.results.insert(id, result);
        self.last = Some(id);
    }

    /// Result of an earlier quadruple
    pub fn load(&self, id: u32) -> Result<T> {
        self.results
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::UnresolvedReference(id))
    }

    /// Result of the most recently stored quadruple
    pub fn into_last(mut self) -> Result<T> {
        self.last
            .and_then(|id| self.results.remove(&id))
            .ok_or(RuntimeError::EmptyProgram)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T: Clone> Default for ExecutionContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_load() {
        let mut ctx = ExecutionContext::new();
        ctx.store(1, "one");
        ctx.store(2, "two");
        assert_eq!(ctx.load(1), Ok("one"));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.into_last(), Ok("two"));
    }

    #[test]
    fn test_missing_reference() {
        let ctx: ExecutionContext<u8> = ExecutionContext::new();
        assert_eq!(ctx.load(3), Err(RuntimeError::UnresolvedReference(3)));
        assert!(ctx.is_empty());
        assert_eq!(ctx.into_last(), Err(RuntimeError::EmptyProgram));
    }
}
