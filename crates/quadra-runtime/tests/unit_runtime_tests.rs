//! Unit tests for quadra-runtime
//!
//! Drives hand-built programs through the runner with every binding kind.

use quadra_core::ast::Operator;
use quadra_core::ir::{Operand, Program, ProgramMetadata, Quadruple};
use quadra_core::types::{DataType, Literal};
use quadra_core::CoreError;
use quadra_runtime::*;
use std::collections::{BTreeMap, HashMap};

/// `(finished - started) > limit`
fn elapsed_check() -> Runner {
    Runner::from(Program::new(
        vec![
            Quadruple::new(
                1,
                Operand::variable("started"),
                Operator::Minus,
                Operand::variable("finished"),
            ),
            Quadruple::new(2, Operand::Context(1), Operator::Greater, Operand::variable("limit")),
        ],
        ProgramMetadata::for_source("started - finished > limit"),
    ))
}

// ========== Binding Tests ==========

#[test]
fn test_btree_bindings() -> anyhow::Result<()> {
    let runner = elapsed_check();

    let mut values = BTreeMap::new();
    values.insert("started".to_string(), Literal::time("2024/06/01 08:00:00"));
    values.insert("finished".to_string(), Literal::time("2024/06/01 08:05:00"));
    values.insert("limit".to_string(), Literal::number("120"));
    assert_eq!(runner.evaluate(&values)?, Literal::bool(true));

    let types: BTreeMap<String, DataType> = values
        .iter()
        .map(|(name, literal)| (name.clone(), literal.data_type))
        .collect();
    assert_eq!(runner.infer(&types)?, DataType::Bool);
    Ok(())
}

#[test]
fn test_pair_bindings() -> anyhow::Result<()> {
    let runner = elapsed_check();

    let mut values: HashMap<String, (DataType, String)> = HashMap::new();
    values.insert("started".to_string(), (DataType::Time, "2024/06/01 08:00:00".to_string()));
    values.insert("finished".to_string(), (DataType::Time, "2024/06/01 08:01:00".to_string()));
    values.insert("limit".to_string(), (DataType::Number, "120".to_string()));
    assert_eq!(runner.evaluate(&values)?, Literal::bool(false));
    Ok(())
}

#[test]
fn test_bindings_as_trait_objects() {
    let mut literals = HashMap::new();
    literals.insert("limit".to_string(), Literal::number("1"));
    let bindings: &dyn ValueBindings = &literals;

    assert_eq!(bindings.value_of("limit"), Some(Literal::number("1")));
    assert_eq!(bindings.value_of("other"), None);

    let runner = elapsed_check();
    assert_eq!(
        runner.evaluate(bindings),
        Err(RuntimeError::UnknownVariable("started".to_string()))
    );
}

// ========== Error Tests ==========

#[test]
fn test_malformed_time_value() {
    let runner = elapsed_check();

    let mut values = HashMap::new();
    values.insert("started".to_string(), Literal::time("June 1st"));
    values.insert("finished".to_string(), Literal::time("2024/06/01 08:01:00"));
    values.insert("limit".to_string(), Literal::number("1"));

    assert_eq!(
        runner.evaluate(&values),
        Err(RuntimeError::Core(CoreError::MalformedTimeValue("June 1st".to_string())))
    );
}

#[test]
fn test_infer_rejects_unsupported_operand_type() {
    let mut types = HashMap::new();
    types.insert("started".to_string(), DataType::Bool);
    types.insert("finished".to_string(), DataType::Bool);
    types.insert("limit".to_string(), DataType::Number);

    assert_eq!(
        elapsed_check().infer(&types),
        Err(RuntimeError::Core(CoreError::UnsupportedType {
            operator: Operator::Minus,
            data_type: DataType::Bool,
        }))
    );
}

// ========== Context Tests ==========

#[test]
fn test_context_keeps_last_result() {
    let mut ctx = ExecutionContext::new();
    assert!(ctx.is_empty());

    ctx.store(1, DataType::Number);
    ctx.store(2, DataType::Bool);
    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx.load(1), Ok(DataType::Number));
    assert_eq!(ctx.load(3), Err(RuntimeError::UnresolvedReference(3)));
    assert_eq!(ctx.into_last(), Ok(DataType::Bool));
}

#[test]
fn test_runner_display_lists_program() {
    let listing = elapsed_check().to_string();
    assert_eq!(listing.lines().count(), 2);
    assert!(listing.lines().all(|line| line.starts_with('#')));
}
