//! Type-checked operator evaluation
//!
//! Every operator borrows its operand symbols, checks their types, computes
//! a result and stores it in a fresh temporary owned by the environment.
//! A failing operator allocates nothing.

pub mod binary;
pub mod unary;

pub use binary::{addition, and, comparison, division, multiplication, or, subtraction};
pub use unary::not;

use std::fmt;
use std::str::FromStr;

use crate::error::{EvalError, Mismatch, ParseOperatorError};
use crate::{Environment, EvalContext, Result, Symbol, SymbolId, Value};

// ═══════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

impl CompareOp {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    /// `<`, `>`, `<=` and `>=` are only defined on integers.
    pub fn is_ordering(self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::Ne)
    }

    /// Apply the comparison to two values of the same type.
    pub fn apply<T: Ord>(self, left: T, right: T) -> bool {
        match self {
            CompareOp::Lt => left < right,
            CompareOp::Gt => left > right,
            CompareOp::Le => left <= right,
            CompareOp::Ge => left >= right,
            CompareOp::Eq => left == right,
            CompareOp::Ne => left != right,
        }
    }
}

impl FromStr for CompareOp {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "<" => Ok(CompareOp::Lt),
            ">" => Ok(CompareOp::Gt),
            "<=" => Ok(CompareOp::Le),
            ">=" => Ok(CompareOp::Ge),
            "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Ne),
            other => Err(ParseOperatorError {
                kind: "comparison",
                token: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators of the expression language.
///
/// Parsed from source tokens by the caller and carried in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Integer addition
    Add,
    /// Integer subtraction
    Sub,
    /// Integer multiplication
    Mul,
    /// Truncating integer division
    Div,
    /// Comparison producing a boolean
    Compare(CompareOp),
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Logical NOT
    Not,
}

impl Operator {
    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Sub => "subtraction",
            Operator::Mul => "multiplication",
            Operator::Div => "division",
            Operator::Compare(_) => "comparison",
            Operator::And => "logical AND",
            Operator::Or => "logical OR",
            Operator::Not => "logical NOT",
        }
    }

    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "&&" => Ok(Operator::And),
            "||" => Ok(Operator::Or),
            "!" => Ok(Operator::Not),
            other => other
                .parse::<CompareOp>()
                .map(Operator::Compare)
                .map_err(|_| ParseOperatorError {
                    kind: "expression",
                    token: other.to_string(),
                }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => f.write_str("+"),
            Operator::Sub => f.write_str("-"),
            Operator::Mul => f.write_str("*"),
            Operator::Div => f.write_str("/"),
            Operator::Compare(cmp) => fmt::Display::fmt(cmp, f),
            Operator::And => f.write_str("&&"),
            Operator::Or => f.write_str("||"),
            Operator::Not => f.write_str("!"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Dispatch
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a two-operand operator.
///
/// # Errors
///
/// `OperandCount` if `op` is unary, otherwise whatever the operator reports.
pub fn eval_binary(
    env: &mut Environment,
    ctx: &EvalContext,
    op: Operator,
    left: &Symbol,
    right: &Symbol,
) -> Result<SymbolId> {
    match op {
        Operator::Add => addition(env, ctx, left, right),
        Operator::Sub => subtraction(env, ctx, left, right),
        Operator::Mul => multiplication(env, ctx, left, right),
        Operator::Div => division(env, ctx, left, right),
        Operator::Compare(cmp) => comparison(env, ctx, left, right, cmp),
        Operator::And => and(env, ctx, left, right),
        Operator::Or => or(env, ctx, left, right),
        Operator::Not => Err(operand_count(ctx, op)),
    }
}

/// Evaluate a one-operand operator.
///
/// # Errors
///
/// `OperandCount` if `op` is binary, otherwise whatever the operator reports.
pub fn eval_unary(
    env: &mut Environment,
    ctx: &EvalContext,
    op: Operator,
    operand: &Symbol,
) -> Result<SymbolId> {
    match op {
        Operator::Not => not(env, ctx, operand),
        _ => Err(operand_count(ctx, op)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Shared Helpers
// ═══════════════════════════════════════════════════════════════════════

/// Build a type mismatch error, logging it on the way out.
fn type_mismatch(ctx: &EvalContext, mismatch: Mismatch) -> EvalError {
    tracing::debug!(op = %mismatch.op, line = ctx.line, "operand type mismatch");
    EvalError::TypeMismatch {
        mismatch,
        line: ctx.line,
    }
}

fn operand_count(ctx: &EvalContext, op: Operator) -> EvalError {
    tracing::debug!(%op, line = ctx.line, "operator dispatched with wrong operand count");
    EvalError::OperandCount { op, line: ctx.line }
}

/// Store an operator result in a new temporary.
fn store(env: &mut Environment, ctx: &EvalContext, op: Operator, value: Value) -> SymbolId {
    let id = env.push_temporary(value);
    if ctx.trace {
        tracing::debug!(%op, %value, line = ctx.line, "evaluated");
    } else {
        tracing::trace!(%op, %value, line = ctx.line, "evaluated");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;

    #[test]
    fn test_compare_op_parse() {
        assert_eq!("<".parse::<CompareOp>(), Ok(CompareOp::Lt));
        assert_eq!(">=".parse::<CompareOp>(), Ok(CompareOp::Ge));
        assert_eq!("!=".parse::<CompareOp>(), Ok(CompareOp::Ne));

        let err = "=<".parse::<CompareOp>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown comparison operator '=<'");
    }

    #[test]
    fn test_operator_parse() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("||".parse::<Operator>(), Ok(Operator::Or));
        assert_eq!("!".parse::<Operator>(), Ok(Operator::Not));
        assert_eq!(
            "==".parse::<Operator>(),
            Ok(Operator::Compare(CompareOp::Eq))
        );

        let err = "%".parse::<Operator>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown expression operator '%'");
    }

    #[test]
    fn test_operator_arity() {
        assert_eq!(Operator::Not.arity(), 1);
        assert_eq!(Operator::Add.arity(), 2);
        assert_eq!(Operator::Compare(CompareOp::Lt).arity(), 2);
    }

    #[test]
    fn test_compare_op_round_trips_spelling() {
        for op in [
            CompareOp::Lt,
            CompareOp::Gt,
            CompareOp::Le,
            CompareOp::Ge,
            CompareOp::Eq,
            CompareOp::Ne,
        ] {
            assert_eq!(op.as_str().parse::<CompareOp>(), Ok(op));
        }
    }

    #[test]
    fn test_ordering_ops() {
        assert!(CompareOp::Lt.is_ordering());
        assert!(CompareOp::Ge.is_ordering());
        assert!(!CompareOp::Eq.is_ordering());
        assert!(!CompareOp::Ne.is_ordering());
    }

    #[test]
    fn test_eval_binary_dispatch() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        let a = Symbol::new("a", Value::Int(6));
        let b = Symbol::new("b", Value::Int(3));

        let cases = [
            (Operator::Add, Value::Int(9)),
            (Operator::Sub, Value::Int(3)),
            (Operator::Mul, Value::Int(18)),
            (Operator::Div, Value::Int(2)),
            (Operator::Compare(CompareOp::Gt), Value::Bool(true)),
        ];
        for (op, expected) in cases {
            let id = eval_binary(&mut env, &ctx, op, &a, &b).unwrap();
            assert_eq!(env.get(id).unwrap().value(), expected, "{op:?}");
        }
    }

    #[test]
    fn test_eval_unary_dispatch() {
        let mut env = Environment::new();
        let ctx = EvalContext::new();
        let p = Symbol::with_type("p", Type::Bool);

        let id = eval_unary(&mut env, &ctx, Operator::Not, &p).unwrap();
        assert_eq!(env.get(id).unwrap().value(), Value::Bool(true));
    }

    #[test]
    fn test_dispatch_rejects_wrong_operand_count() {
        let mut env = Environment::new();
        let ctx = EvalContext::at_line(3);
        let p = Symbol::with_type("p", Type::Bool);

        let err = eval_binary(&mut env, &ctx, Operator::Not, &p, &p).unwrap_err();
        assert_eq!(
            err,
            EvalError::OperandCount {
                op: Operator::Not,
                line: 3
            }
        );
        let err = eval_unary(&mut env, &ctx, Operator::And, &p).unwrap_err();
        assert_eq!(err.line(), 3);
        assert_eq!(env.temporary_count(), 0);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Compare(CompareOp::Le).to_string(), "<=");
        assert_eq!(Operator::Not.to_string(), "!");
        assert_eq!(Operator::Not.describe(), "logical NOT");
    }
}
