//! Display implementations for values and types

use std::fmt;

use super::*;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags from the table renderer apply
        match self {
            Value::Int(n) => f.pad(&n.to_string()),
            Value::Bool(b) => f.pad(if *b { "true" } else { "false" }),
            Value::Error => f.pad("error"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
