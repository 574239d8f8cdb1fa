//! Error types for declaration and operator evaluation
//!
//! The `Display` output of [`EvalError`] is the diagnostic text shown to
//! users, so its wording is stable.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::eval::Operator;
use crate::symbol::Symbol;
use crate::value::Type;

/// Errors raised while declaring symbols or evaluating operators.
///
/// Every variant carries the source line that was current when the error
/// was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operand has the wrong type for its operator
    #[error("Error at line {line}: {mismatch}")]
    TypeMismatch {
        /// Operator and offending operands
        mismatch: Mismatch,
        /// Source line
        line: u32,
    },

    /// Integer division with a zero divisor
    #[error("Error at line {line}: Division by zero")]
    DivisionByZero {
        /// Source line
        line: u32,
    },

    /// Result does not fit in a 64-bit signed integer
    #[error("Error at line {line}: Integer overflow in {}", .op.describe())]
    IntegerOverflow {
        /// Operator that overflowed
        op: Operator,
        /// Source line
        line: u32,
    },

    /// An operator was dispatched with the wrong number of operands
    #[error("Error at line {line}: Wrong number of operands for '{op}'")]
    OperandCount {
        /// The dispatched operator
        op: Operator,
        /// Source line
        line: u32,
    },

    /// A name was declared twice
    #[error("Error at line {line}: Variable '{name}' already declared")]
    DuplicateDeclaration {
        /// The duplicated name
        name: String,
        /// Source line
        line: u32,
    },

    /// A name was used without being declared
    #[error("Error at line {line}: Variable '{name}' not declared")]
    UndeclaredVariable {
        /// The missing name
        name: String,
        /// Source line
        line: u32,
    },

    /// A value was stored into a symbol of a different type
    #[error("Error at line {line}: Cannot store {found} value in '{name}' ({expected})")]
    ValueTypeMismatch {
        /// Target symbol
        name: String,
        /// The target's fixed type
        expected: Type,
        /// Type of the rejected value
        found: Type,
        /// Source line
        line: u32,
    },
}

impl EvalError {
    /// Source line the error was reported at.
    pub fn line(&self) -> u32 {
        match self {
            EvalError::TypeMismatch { line, .. }
            | EvalError::DivisionByZero { line }
            | EvalError::IntegerOverflow { line, .. }
            | EvalError::OperandCount { line, .. }
            | EvalError::DuplicateDeclaration { line, .. }
            | EvalError::UndeclaredVariable { line, .. }
            | EvalError::ValueTypeMismatch { line, .. } => *line,
        }
    }

    /// Check if this is an operand type error.
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            EvalError::TypeMismatch { .. } | EvalError::ValueTypeMismatch { .. }
        )
    }
}

/// Error returned when parsing an operator token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} operator '{token}'")]
pub struct ParseOperatorError {
    /// Which family of operator was expected ("comparison" or "expression")
    pub kind: &'static str,
    /// The rejected token
    pub token: String,
}

/// Name and type of an operand, as reported in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    /// Symbol name
    pub name: Arc<str>,
    /// Symbol type
    pub ty: Type,
}

impl From<&Symbol> for Operand {
    fn from(sym: &Symbol) -> Self {
        Self {
            name: Arc::from(sym.name()),
            ty: sym.ty(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' ({})", self.name, self.ty)
    }
}

/// The operator and operands involved in a type mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The operator being evaluated
    pub op: Operator,
    /// First (or only) operand
    pub left: Operand,
    /// Second operand, absent for unary operators
    pub right: Option<Operand>,
}

impl Mismatch {
    /// Mismatch for a binary operator.
    pub fn binary(op: Operator, left: &Symbol, right: &Symbol) -> Self {
        Self {
            op,
            left: left.into(),
            right: Some(right.into()),
        }
    }

    /// Mismatch for a unary operator.
    pub fn unary(op: Operator, operand: &Symbol) -> Self {
        Self {
            op,
            left: operand.into(),
            right: None,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = &self.left;
        let Some(right) = &self.right else {
            return match self.op {
                Operator::Not => {
                    write!(f, "Logical NOT requires boolean operand, got {left}")
                }
                op => write!(f, "Cannot perform {} on {left}", op.describe()),
            };
        };

        match self.op {
            Operator::Compare(cmp) if cmp.is_ordering() && left.ty == right.ty => {
                write!(
                    f,
                    "Cannot perform '{cmp}' comparison between {left} and {right}"
                )
            }
            Operator::Compare(_) => write!(f, "Cannot compare {left} with {right}"),
            Operator::And => write!(
                f,
                "Logical AND requires boolean operands, got {left} and {right}"
            ),
            Operator::Or => write!(
                f,
                "Logical OR requires boolean operands, got {left} and {right}"
            ),
            op => write!(
                f,
                "Cannot perform {} between {left} and {right}",
                op.describe()
            ),
        }
    }
}

/// Result type alias for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;
