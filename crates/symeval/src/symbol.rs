//! Named, typed bindings and the handles that refer to them

use std::fmt;
use std::sync::Arc;

use crate::value::{Type, Value};

/// A named binding to a value.
///
/// The symbol's type is the tag of its value, so the two can never
/// disagree. The value can only be replaced by one of the same type
/// (see [`Environment::assign`](crate::Environment::assign)).
///
/// Names are reference counted, so cloning a symbol is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: Arc<str>,
    value: Value,
}

impl Symbol {
    /// Create a symbol holding `value`.
    pub fn new(name: impl Into<Arc<str>>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a symbol holding the zero value of `ty`.
    pub fn with_type(name: impl Into<Arc<str>>, ty: Type) -> Self {
        Self::new(name, ty.zero_value())
    }

    /// The symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol's static type.
    pub fn ty(&self) -> Type {
        self.value.ty()
    }

    /// The symbol's current value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Replace the value. Callers check that the type is unchanged.
    pub(crate) fn set_value(&mut self, value: Value) {
        debug_assert_eq!(value.ty(), self.ty());
        self.value = value;
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} = {}", self.name, self.ty(), self.value)
    }
}

/// Which arena a [`SymbolId`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A user-declared name
    Declared,

    /// A temporary synthesized for an intermediate result
    Temporary,
}

/// Handle to a symbol owned by an [`Environment`](crate::Environment).
///
/// Handles carry the id of the environment that issued them and the
/// generation of the arena they point into. A handle resolves to nothing in
/// any other environment, or after its arena has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId {
    pub(crate) owner: u64,
    pub(crate) kind: SymbolKind,
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl SymbolId {
    /// Which arena this handle points into.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Check if this handle refers to a temporary.
    pub fn is_temporary(&self) -> bool {
        self.kind == SymbolKind::Temporary
    }
}
