//! Variable bindings visible during evaluation.
//!
//! A [`Scope`] is a flat map from name to value with value semantics:
//! `let` extends the scope it is evaluated in, while every function call
//! works on a [`fork`](Scope::fork), a full copy of the caller's bindings.
//! No two active call frames ever share a scope, and nothing a callee binds
//! is visible to its caller.

use crate::values::Value;
use hashbrown::HashMap;

/// Spare room reserved in a forked scope for parameters and `let`s.
const FORK_HEADROOM: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct Scope<'a> {
    bindings: HashMap<&'a str, Value<'a>>,
}

impl<'a> Scope<'a> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::with_capacity(FORK_HEADROOM),
        }
    }

    /// Look up a name, returning its value if bound.
    pub fn lookup(&self, name: &str) -> Option<Value<'a>> {
        self.bindings.get(name).copied()
    }

    /// Bind `name`, replacing any previous binding in this scope.
    pub fn bind(&mut self, name: &'a str, value: Value<'a>) {
        self.bindings.insert(name, value);
    }

    /// Copy of this scope for a new call frame.
    pub fn fork(&self) -> Scope<'a> {
        let mut bindings = HashMap::with_capacity(self.bindings.len() + FORK_HEADROOM);
        bindings.extend(self.bindings.iter().map(|(name, value)| (*name, *value)));
        Scope { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Value<'a>)> for Scope<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, Value<'a>)>>(iter: I) -> Self {
        let mut scope = Scope::new();
        for (name, value) in iter {
            scope.bind(name, value);
        }
        scope
    }
}
