//! Binary operator evaluation

use super::{store, type_mismatch, CompareOp, Operator};
use crate::error::{EvalError, Mismatch};
use crate::{Environment, EvalContext, Result, Symbol, SymbolId, Value};

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

/// `left + right` on two integers.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn addition(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    arithmetic(env, ctx, Operator::Add, left, right, i64::checked_add)
}

/// `left - right` on two integers.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn subtraction(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    arithmetic(env, ctx, Operator::Sub, left, right, i64::checked_sub)
}

/// `left * right` on two integers.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn multiplication(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    arithmetic(env, ctx, Operator::Mul, left, right, i64::checked_mul)
}

/// `left / right` on two integers, truncating toward zero.
///
/// The divisor is only inspected once both operands are known to be
/// integers, so a type error always wins over division by zero.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn division(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    let (a, b) = int_operands(ctx, Operator::Div, left, right)?;
    if b == 0 {
        tracing::debug!(line = ctx.line, "division by zero");
        return Err(EvalError::DivisionByZero { line: ctx.line });
    }

    // i64::MIN / -1 is the only remaining failure
    let quotient = a.checked_div(b).ok_or(EvalError::IntegerOverflow {
        op: Operator::Div,
        line: ctx.line,
    })?;
    Ok(store(env, ctx, Operator::Div, Value::Int(quotient)))
}

fn arithmetic(
    env: &mut Environment,
    ctx: &EvalContext,
    op: Operator,
    left: &Symbol,
    right: &Symbol,
    apply: fn(i64, i64) -> Option<i64>,
) -> Result<SymbolId> {
    let (a, b) = int_operands(ctx, op, left, right)?;
    let result = apply(a, b).ok_or(EvalError::IntegerOverflow { op, line: ctx.line })?;
    Ok(store(env, ctx, op, Value::Int(result)))
}

fn int_operands(
    ctx: &EvalContext,
    op: Operator,
    left: &Symbol,
    right: &Symbol,
) -> Result<(i64, i64)> {
    match (left.value(), right.value()) {
        (Value::Int(a), Value::Int(b)) => Ok((a, b)),
        _ => Err(type_mismatch(ctx, Mismatch::binary(op, left, right))),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison
// ═══════════════════════════════════════════════════════════════════════

/// Compare two symbols of the same type.
///
/// `==` and `!=` accept two integers or two booleans. `<`, `>`, `<=` and
/// `>=` accept integers only.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name(), op = %op))]
pub fn comparison(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
    op: CompareOp,
) -> Result<SymbolId> {
    let result = match (left.value(), right.value()) {
        (Value::Int(a), Value::Int(b)) => op.apply(a, b),
        (Value::Bool(a), Value::Bool(b)) if !op.is_ordering() => op.apply(a, b),
        _ => {
            return Err(type_mismatch(
                ctx,
                Mismatch::binary(Operator::Compare(op), left, right),
            ))
        }
    };
    Ok(store(env, ctx, Operator::Compare(op), Value::Bool(result)))
}

// ═══════════════════════════════════════════════════════════════════════
// Logical Operators
// ═══════════════════════════════════════════════════════════════════════

// Both operands are already evaluated symbols, so there is nothing to
// short-circuit.

/// `left && right` on two booleans.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn and(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    let (a, b) = bool_operands(ctx, Operator::And, left, right)?;
    Ok(store(env, ctx, Operator::And, Value::Bool(a && b)))
}

/// `left || right` on two booleans.
#[tracing::instrument(level = "trace", skip_all, fields(left = left.name(), right = right.name()))]
pub fn or(
    env: &mut Environment,
    ctx: &EvalContext,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    let (a, b) = bool_operands(ctx, Operator::Or, left, right)?;
    Ok(store(env, ctx, Operator::Or, Value::Bool(a || b)))
}

fn bool_operands(
    ctx: &EvalContext,
    op: Operator,
    left: &Symbol,
    right: &Symbol,
) -> Result<(bool, bool)> {
    match (left.value(), right.value()) {
        (Value::Bool(a), Value::Bool(b)) => Ok((a, b)),
        _ => Err(type_mismatch(ctx, Mismatch::binary(op, left, right))),
    }
}
