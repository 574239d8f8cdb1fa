//! Tabular listing of declared symbols

use std::fmt::{self, Write};

use super::Environment;

const RULE: &str = "----------------------------------------";

impl Environment {
    /// Render the declared symbols as a fixed-width table.
    ///
    /// Rows appear in declaration order; temporaries are never listed.
    ///
    /// ```
    /// use symeval::{Environment, EvalContext, Type};
    ///
    /// let mut env = Environment::new();
    /// let ctx = EvalContext::new();
    /// env.declare(&ctx, "x", Type::Int).unwrap();
    ///
    /// let table = env.render();
    /// assert!(table.contains("x               int        0\n"));
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_table(&mut out);
        out
    }

    fn write_table(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "Symbol Table Contents:")?;
        writeln!(out, "{:<15} {:<10} {:<10}", "Name", "Type", "Value")?;
        writeln!(out, "{RULE}")?;
        for sym in self.declared() {
            writeln!(out, "{:<15} {:<10} {}", sym.name(), sym.ty(), sym.value())?;
        }
        writeln!(out)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f)
    }
}
