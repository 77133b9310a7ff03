//! The symbol table of one script execution.
//!
//! There is exactly one flat map: no parent scopes, no shadowing, no
//! push/pop. `set` overwrites in place and lookups never fail; a name that
//! was never bound simply has no entry.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Flat mutable symbol table.
///
/// Built fresh for every execution and dropped with it, so nothing bound
/// by one request is visible to the next.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
