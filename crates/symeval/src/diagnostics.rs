//! Accumulation of diagnostics for drivers that keep going after an error

use std::fmt;

use crate::error::EvalError;

/// Collects evaluation errors instead of stopping at the first one.
///
/// # Example
///
/// ```
/// use symeval::{Diagnostics, Environment, EvalContext, Type};
///
/// let mut env = Environment::new();
/// let mut diags = Diagnostics::new();
/// let ctx = EvalContext::at_line(1);
///
/// diags.record(env.declare(&ctx, "x", Type::Int));
/// diags.record(env.declare(&ctx, "x", Type::Int)); // duplicate
///
/// assert_eq!(diags.len(), 1);
/// assert_eq!(
///     diags.to_string(),
///     "Error at line 1: Variable 'x' already declared\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<EvalError>,
    limit: Option<usize>,
    dropped: usize,
}

impl Diagnostics {
    /// Create an unbounded collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector that stores at most `limit` errors.
    ///
    /// Errors past the limit are counted in [`dropped`](Self::dropped).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Pass a successful value through, or store the error and return
    /// `None`.
    pub fn record<T>(&mut self, result: Result<T, EvalError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Store an error.
    pub fn push(&mut self, err: EvalError) {
        tracing::error!(line = err.line(), "{err}");
        if self.limit.is_some_and(|limit| self.errors.len() >= limit) {
            self.dropped += 1;
            return;
        }
        self.errors.push(err);
    }

    /// Check if any error was recorded, stored or dropped.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.dropped > 0
    }

    /// Number of stored errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if no errors are stored.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors discarded because the limit was reached.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Iterate over stored errors in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &EvalError> {
        self.errors.iter()
    }

    /// `Ok` if nothing was recorded, otherwise every stored error.
    pub fn into_result(self) -> Result<(), Vec<EvalError>> {
        if self.has_errors() {
            Err(self.errors)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for err in &self.errors {
            writeln!(f, "{err}")?;
        }
        if self.dropped > 0 {
            writeln!(f, "... and {} more errors", self.dropped)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a EvalError;
    type IntoIter = std::slice::Iter<'a, EvalError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
