//! # Symeval
//!
//! Symbol environment and type-checked operator evaluation for a small
//! statically-typed expression language with integers and booleans.
//!
//! A parser declares each variable in an [`Environment`], then evaluates
//! expressions by calling operator functions on symbols. Each operator
//! checks its operand types and stores its result in a fresh temporary.
//! Violations come back as [`EvalError`] values carrying the source line
//! from the [`EvalContext`]; the caller decides whether to stop or to keep
//! collecting them in [`Diagnostics`].
//!
//! ## Architecture
//!
//! - **Values**: [`Value`] and its static [`Type`]
//! - **Symbols**: named bindings, referred to by [`SymbolId`] handles
//! - **Environment**: declared names in declaration order plus an arena of
//!   temporaries, each released as a whole
//! - **Operators**: [`eval`] functions over borrowed operand symbols
//!
//! ## Example
//!
//! ```
//! use symeval::{eval, CompareOp, Environment, EvalContext, Type, Value};
//!
//! let mut env = Environment::new();
//! let mut ctx = EvalContext::new();
//!
//! env.declare(&ctx, "x", Type::Int).unwrap();
//! env.assign(&ctx, "x", Value::Int(5)).unwrap();
//!
//! ctx.next_line();
//! let x = env.lookup(&ctx, "x").unwrap().clone();
//! let sum = eval::addition(&mut env, &ctx, &x, &x).unwrap();
//! let sum = env.get(sum).unwrap().clone();
//! assert_eq!(sum.value(), Value::Int(10));
//!
//! let check = eval::comparison(&mut env, &ctx, &sum, &x, CompareOp::Gt).unwrap();
//! assert_eq!(env.get(check).unwrap().value(), Value::Bool(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod eval;
pub mod symbol;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use diagnostics::Diagnostics;
pub use environment::{Environment, TempCounter, TEMP_PREFIX};
pub use error::{EvalError, Mismatch, Operand, ParseOperatorError, Result};
pub use eval::{eval_binary, eval_unary, CompareOp, Operator};
pub use symbol::{Symbol, SymbolId, SymbolKind};
pub use value::{Type, Value};

use std::sync::Once;

/// Symeval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=symeval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
