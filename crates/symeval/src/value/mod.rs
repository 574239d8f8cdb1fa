//! Value representation for the primitive types of the language

mod display;

/// Static type of a symbol.
///
/// A symbol's type is fixed when the symbol is created and always agrees
/// with the tag of the value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// 64-bit signed integer
    Int,

    /// Boolean: `true` or `false`
    Bool,

    /// Marker for a value produced by a failed computation
    Error,
}

impl Type {
    /// The zero value a freshly declared symbol of this type starts with.
    ///
    /// `Int` starts at `0`, `Bool` at `false`.
    pub fn zero_value(self) -> Value {
        match self {
            Type::Int => Value::Int(0),
            Type::Bool => Value::Bool(false),
            Type::Error => Value::Error,
        }
    }

    /// Name used in diagnostics and in the rendered symbol table.
    pub fn name(self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Bool => "bool",
            Type::Error => "unknown",
        }
    }
}

/// Runtime value of a symbol.
///
/// There is no implicit coercion between `Int` and `Bool`; every operator
/// checks the tags of its operands before touching the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// Boolean
    Bool(bool),

    /// Result of a failed computation
    Error,
}

impl Value {
    /// The type tag of this value.
    pub fn ty(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Bool(_) => Type::Bool,
            Value::Error => Type::Error,
        }
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is the error marker
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error)
    }

    /// Extract the integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
