//! Call-result cache.
//!
//! Results of function calls are remembered under a textual call signature:
//! the callee's identity followed by its rendered arguments, each terminated
//! by [`KEY_DELIMITER`]. The callee's identity is its variable name when the
//! call goes through a variable (`fib,10,`), and otherwise the location of
//! the closure being called (`12,48,10,`).
//!
//! Known approximations, kept on purpose:
//! - Two different closures bound to the same name share entries.
//! - A body reading a variable from the caller's scope (rather than from its
//!   parameters) is cached as if that variable never changed.
//! - A string argument containing the delimiter can collide with a split
//!   argument list (`f("1,2")` and `f(1, 2)`).
//!
//! The cache lives as long as the evaluator owning it and is never evicted.

use alloc::string::String;
use core::fmt::Write;
use hashbrown::HashMap;

use crate::{
    ast::{Location, Term, TermKind},
    values::Value,
};

pub const KEY_DELIMITER: char = ',';

#[derive(Debug, Default)]
pub struct MemoCache<'a> {
    entries: HashMap<String, Value<'a>>,
    hits: usize,
    misses: usize,
}

impl<'a> MemoCache<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a signature, counting the lookup as a hit or a miss.
    pub fn get(&mut self, key: &str) -> Option<Value<'a>> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(*value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: String, value: Value<'a>) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Build the signature of a call, or `None` if the call cannot be cached
/// because an argument is a closure, a tuple or nil.
pub fn call_key(callee: &Term<'_>, closure: Location<'_>, arguments: &[Value<'_>]) -> Option<String> {
    let mut key = String::new();
    match callee.kind {
        TermKind::Var(name) => key.push_str(name),
        _ => {
            let _ = write!(key, "{}{}{}", closure.start, KEY_DELIMITER, closure.end);
        }
    }
    key.push(KEY_DELIMITER);

    for argument in arguments {
        match argument {
            Value::Int(n) => {
                let _ = write!(key, "{}", n);
            }
            Value::Str(s) => key.push_str(s),
            Value::Bool(b) => {
                let _ = write!(key, "{}", b);
            }
            Value::Closure { .. } | Value::Tuple { .. } | Value::Nil => return None,
        }
        key.push(KEY_DELIMITER);
    }

    Some(key)
}
