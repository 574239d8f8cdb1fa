//! Unary operator evaluation

use super::{store, type_mismatch, Operator};
use crate::error::Mismatch;
use crate::{Environment, EvalContext, Result, Symbol, SymbolId, Value};

/// Logical negation of a boolean (`!x`).
#[tracing::instrument(level = "trace", skip_all, fields(operand = operand.name()))]
pub fn not(env: &mut Environment, ctx: &EvalContext, operand: &Symbol) -> Result<SymbolId> {
    match operand.value() {
        Value::Bool(b) => Ok(store(env, ctx, Operator::Not, Value::Bool(!b))),
        _ => Err(type_mismatch(ctx, Mismatch::unary(Operator::Not, operand))),
    }
}
