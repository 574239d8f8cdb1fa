//! Evaluation context configuration

/// Configuration and state for evaluation.
///
/// This is passed through all fallible calls. The parser keeps `line`
/// pointing at the statement being processed so that diagnostics can be
/// tied to source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Current source line (1-based)
    pub line: u32,

    /// Whether to log successful operator results at `debug` level
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            line: 1,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context positioned at `line`.
    pub fn at_line(line: u32) -> Self {
        Self {
            line,
            ..Default::default()
        }
    }

    /// Enable or disable result tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Move to a new source line.
    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    /// Advance to the next source line.
    pub fn next_line(&mut self) {
        self.line = self.line.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_line_one() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.line, 1);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_line_tracking() {
        let mut ctx = EvalContext::at_line(10).with_trace(true);
        assert_eq!(ctx.line, 10);
        assert!(ctx.trace);

        ctx.next_line();
        assert_eq!(ctx.line, 11);

        ctx.set_line(3);
        assert_eq!(ctx.line, 3);
    }
}
