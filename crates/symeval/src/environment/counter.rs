//! Monotonic name source for temporaries

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefix of every temporary's name.
///
/// Temporaries are stored apart from declared symbols and are never found
/// by name lookup, so the prefix only has to keep them distinct from each
/// other.
pub const TEMP_PREFIX: &str = "_temp";

/// Issues `_temp0`, `_temp1`, ... in strictly increasing order.
///
/// Each [`Environment`](super::Environment) owns one by default. Share a
/// single counter through an `Arc` (see
/// [`Environment::with_counter`](super::Environment::with_counter)) when
/// several environments must never issue the same name.
#[derive(Debug, Default)]
pub struct TempCounter {
    next: AtomicU64,
}

impl TempCounter {
    /// Create a counter starting at `_temp0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next name.
    pub fn next_name(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{TEMP_PREFIX}{n}")
    }

    /// Number of names issued so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}
