//! Runtime values.
//!
//! A value is what a term reduces to: a literal, a closure, an unevaluated
//! tuple, or `Nil` (the result of `print`). Values are `Copy` and borrow
//! everything else from the arena holding the syntax tree.

use crate::ast::{Location, Parameter, Term};

/// Rendering of any closure.
pub const CLOSURE_TEXT: &str = "<#closure>";

/// Rendering of values with nothing to show (`Nil`).
pub const NIL_TEXT: &str = "nil";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Int(i32),
    Str(&'a str),
    Bool(bool),
    /// A function term used as a value. It captures nothing; the body sees
    /// the scope of whoever calls it.
    Closure {
        parameters: &'a [Parameter<'a>],
        body: &'a Term<'a>,
        location: Location<'a>,
    },
    /// A tuple term used as a value. Components are evaluated when projected
    /// or printed, in the scope active at that point.
    Tuple {
        first: &'a Term<'a>,
        second: &'a Term<'a>,
        location: Location<'a>,
    },
    Nil,
}

impl<'a> Value<'a> {
    /// Name of the value's kind, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
            Value::Closure { .. } => "Function",
            Value::Tuple { .. } => "Tuple",
            Value::Nil => "Nil",
        }
    }

    /// Ints, strings and booleans. Only these take part in call signatures.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Str(_) | Value::Bool(_))
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TermBuilder;
    use bumpalo::Bump;

    #[test]
    fn test_primitive_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Str("a").as_str(), Some("a"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(7).as_bool(), None);
        assert_eq!(Value::Nil.as_int(), None);
    }

    #[test]
    fn test_only_literals_are_primitive() {
        let arena = Bump::new();
        let b = TermBuilder::new(&arena, "test.rinha");
        let one = b.int(1);

        assert!(Value::Int(1).is_primitive());
        assert!(Value::Str("").is_primitive());
        assert!(Value::Bool(false).is_primitive());
        assert!(!Value::Nil.is_primitive());
        let tuple = Value::Tuple {
            first: one,
            second: one,
            location: one.location,
        };
        assert!(!tuple.is_primitive());
        assert_eq!(tuple.kind_name(), "Tuple");
    }
}
