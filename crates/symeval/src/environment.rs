//! Symbol environment: declared variables and synthesized temporaries

mod counter;
mod render;

pub use counter::{TempCounter, TEMP_PREFIX};

use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::context::EvalContext;
use crate::error::{EvalError, Result};
use crate::symbol::{Symbol, SymbolId, SymbolKind};
use crate::value::{Type, Value};

/// Owner of every symbol in one evaluation session.
///
/// Declared symbols live in an insertion-ordered map keyed by name, giving
/// constant-time lookup while keeping declaration order for
/// [`render`](Environment::render). Temporaries live in a separate
/// append-only arena. Each side is released as a whole.
///
/// # Example
///
/// ```
/// use symeval::{Environment, EvalContext, Type, Value};
///
/// let mut env = Environment::new();
/// let ctx = EvalContext::at_line(1);
///
/// env.declare(&ctx, "x", Type::Int).unwrap();
/// assert_eq!(env.lookup(&ctx, "x").unwrap().value(), Value::Int(0));
///
/// // Declaring the same name again is an error
/// assert!(env.declare(&ctx, "x", Type::Bool).is_err());
/// ```
#[derive(Debug)]
pub struct Environment {
    /// Process-unique id stamped into every handle this environment issues
    id: u64,

    /// User-declared symbols in declaration order
    declared: IndexMap<Arc<str>, Symbol>,

    /// Operator results, in creation order
    temporaries: Vec<Symbol>,

    /// Source of temporary names
    counter: Arc<TempCounter>,

    /// Bumped on every release so stale handles stop resolving
    declared_generation: u32,
    temporary_generation: u32,
}

static NEXT_ENVIRONMENT_ID: AtomicU64 = AtomicU64::new(0);

impl Default for Environment {
    fn default() -> Self {
        Self {
            id: NEXT_ENVIRONMENT_ID.fetch_add(1, Ordering::Relaxed),
            declared: IndexMap::new(),
            temporaries: Vec::new(),
            counter: Arc::default(),
            declared_generation: 0,
            temporary_generation: 0,
        }
    }
}

impl Environment {
    /// Create a new empty environment with its own temporary counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment that draws temporary names from a shared
    /// counter.
    pub fn with_counter(counter: Arc<TempCounter>) -> Self {
        Self {
            counter,
            ..Self::default()
        }
    }

    /// The counter temporaries are named from.
    pub fn counter(&self) -> &Arc<TempCounter> {
        &self.counter
    }

    // ═══════════════════════════════════════════════════════════════════
    // Declaration
    // ═══════════════════════════════════════════════════════════════════

    /// Declare `name` with the zero value of `ty`.
    ///
    /// # Errors
    ///
    /// `DuplicateDeclaration` if `name` is already declared. The existing
    /// symbol is left untouched.
    pub fn declare(&mut self, ctx: &EvalContext, name: &str, ty: Type) -> Result<SymbolId> {
        self.declare_with_value(ctx, name, ty.zero_value())
    }

    /// Declare `name` with an initial value; the type is the value's type.
    pub fn declare_with_value(
        &mut self,
        ctx: &EvalContext,
        name: &str,
        value: Value,
    ) -> Result<SymbolId> {
        if self.declared.contains_key(name) {
            tracing::debug!(%name, line = ctx.line, "duplicate declaration");
            return Err(EvalError::DuplicateDeclaration {
                name: name.to_string(),
                line: ctx.line,
            });
        }

        let key: Arc<str> = Arc::from(name);
        let (index, _) = self
            .declared
            .insert_full(Arc::clone(&key), Symbol::new(key, value));
        tracing::debug!(%name, ty = %value.ty(), line = ctx.line, "declared symbol");

        Ok(self.declared_id(index))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a declared symbol by name.
    ///
    /// Temporaries are never found by name.
    ///
    /// # Errors
    ///
    /// `UndeclaredVariable` if `name` has not been declared.
    pub fn lookup(&self, ctx: &EvalContext, name: &str) -> Result<&Symbol> {
        self.find(name).ok_or_else(|| EvalError::UndeclaredVariable {
            name: name.to_string(),
            line: ctx.line,
        })
    }

    /// Look up a declared symbol by name without producing a diagnostic.
    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.declared.get(name)
    }

    /// Handle of a declared symbol.
    pub fn lookup_id(&self, name: &str) -> Option<SymbolId> {
        self.declared
            .get_index_of(name)
            .map(|index| self.declared_id(index))
    }

    /// Resolve a handle issued by this environment.
    ///
    /// Returns `None` if the handle was issued by another environment or its
    /// arena has been released since.
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        if id.owner != self.id {
            return None;
        }
        match id.kind {
            SymbolKind::Declared if id.generation == self.declared_generation => self
                .declared
                .get_index(id.index)
                .map(|(_, sym)| sym),
            SymbolKind::Temporary if id.generation == self.temporary_generation => {
                self.temporaries.get(id.index)
            }
            _ => None,
        }
    }

    /// Check if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Assignment
    // ═══════════════════════════════════════════════════════════════════

    /// Store a new value in a declared symbol.
    ///
    /// # Errors
    ///
    /// - `UndeclaredVariable` if `name` has not been declared
    /// - `ValueTypeMismatch` if `value` has a different type than the symbol
    pub fn assign(&mut self, ctx: &EvalContext, name: &str, value: Value) -> Result<SymbolId> {
        let Some((index, _, sym)) = self.declared.get_full_mut(name) else {
            return Err(EvalError::UndeclaredVariable {
                name: name.to_string(),
                line: ctx.line,
            });
        };

        if sym.ty() != value.ty() {
            return Err(EvalError::ValueTypeMismatch {
                name: name.to_string(),
                expected: sym.ty(),
                found: value.ty(),
                line: ctx.line,
            });
        }

        sym.set_value(value);
        tracing::trace!(%name, %value, line = ctx.line, "assigned");
        Ok(self.declared_id(index))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Temporaries
    // ═══════════════════════════════════════════════════════════════════

    /// Synthesize a temporary of type `ty` holding `value`.
    ///
    /// # Errors
    ///
    /// `ValueTypeMismatch` if `value` is not of type `ty`. No name is
    /// consumed in that case.
    pub fn new_temporary(
        &mut self,
        ctx: &EvalContext,
        ty: Type,
        value: Value,
    ) -> Result<SymbolId> {
        if value.ty() != ty {
            return Err(EvalError::ValueTypeMismatch {
                name: TEMP_PREFIX.to_string(),
                expected: ty,
                found: value.ty(),
                line: ctx.line,
            });
        }
        Ok(self.push_temporary(value))
    }

    /// Append a temporary holding `value`, typed by the value itself.
    pub(crate) fn push_temporary(&mut self, value: Value) -> SymbolId {
        let name = self.counter.next_name();
        tracing::trace!(name = %name, ty = %value.ty(), %value, "new temporary");

        let index = self.temporaries.len();
        self.temporaries.push(Symbol::new(name, value));
        SymbolId {
            owner: self.id,
            kind: SymbolKind::Temporary,
            index,
            generation: self.temporary_generation,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Release
    // ═══════════════════════════════════════════════════════════════════

    /// Drop every declared symbol.
    ///
    /// Handles to declared symbols stop resolving. Temporaries are not
    /// affected.
    pub fn release_declared(&mut self) {
        tracing::debug!(count = self.declared.len(), "releasing declared symbols");
        self.declared.clear();
        self.declared_generation = self.declared_generation.wrapping_add(1);
    }

    /// Drop every temporary.
    ///
    /// The counter keeps counting, so names are never reused.
    pub fn release_temporaries(&mut self) {
        tracing::debug!(count = self.temporaries.len(), "releasing temporaries");
        self.temporaries.clear();
        self.temporary_generation = self.temporary_generation.wrapping_add(1);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over declared symbols in declaration order.
    pub fn declared(&self) -> impl Iterator<Item = &Symbol> {
        self.declared.values()
    }

    /// Iterate over temporaries in creation order.
    pub fn temporaries(&self) -> impl Iterator<Item = &Symbol> {
        self.temporaries.iter()
    }

    /// Number of declared symbols.
    pub fn len(&self) -> usize {
        self.declared.len()
    }

    /// Check if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    /// Number of live temporaries.
    pub fn temporary_count(&self) -> usize {
        self.temporaries.len()
    }

    fn declared_id(&self, index: usize) -> SymbolId {
        SymbolId {
            owner: self.id,
            kind: SymbolKind::Declared,
            index,
            generation: self.declared_generation,
        }
    }
}
