//! Binary operator implementations.
//!
//! Both operands are already evaluated when these run, so `And` and `Or`
//! never short-circuit. Integer arithmetic wraps on overflow, matching
//! 32-bit machine integers.

use core::fmt::Write;

use bumpalo::Bump;

use crate::{
    ast::BinaryOp,
    evaluator::RuntimeError,
    values::Value,
};

/// Apply `op` to two evaluated operands.
pub(super) fn eval_binary<'a>(
    arena: &'a Bump,
    op: BinaryOp,
    lhs: Value<'a>,
    rhs: Value<'a>,
) -> Result<Value<'a>, RuntimeError> {
    match op {
        BinaryOp::Add => eval_add(arena, lhs, rhs),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => {
            match (lhs.as_int(), rhs.as_int()) {
                (Some(l), Some(r)) => eval_binary_int(op, l, r).map(Value::Int),
                _ => Err(type_mismatch(op, lhs, rhs)),
            }
        }
        BinaryOp::Eq | BinaryOp::Neq => eval_equality(op, lhs, rhs).map(Value::Bool),
        BinaryOp::Lt | BinaryOp::Lte | BinaryOp::Gt | BinaryOp::Gte => {
            eval_ordering(op, lhs, rhs).map(Value::Bool)
        }
        BinaryOp::And | BinaryOp::Or => match (lhs.as_bool(), rhs.as_bool()) {
            (Some(l), Some(r)) => Ok(Value::Bool(if op == BinaryOp::And {
                l && r
            } else {
                l || r
            })),
            _ => Err(type_mismatch(op, lhs, rhs)),
        },
    }
}

/// Evaluate an arithmetic operation on two integers.
///
/// Division and remainder truncate toward zero; a zero divisor is an error.
pub(super) fn eval_binary_int(op: BinaryOp, left: i32, right: i32) -> Result<i32, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div | BinaryOp::Rem if right == 0 => Err(RuntimeError::DivisionByZero),
        // wrapping_* handles i32::MIN / -1
        BinaryOp::Div => Ok(left.wrapping_div(right)),
        BinaryOp::Rem => Ok(left.wrapping_rem(right)),
        _ => unreachable!("{op} is not an arithmetic operator"),
    }
}

/// `Int + Int` adds; any other mix of primitives with at least one string concatenates.
fn eval_add<'a>(arena: &'a Bump, lhs: Value<'a>, rhs: Value<'a>) -> Result<Value<'a>, RuntimeError> {
    if let (Some(l), Some(r)) = (lhs.as_int(), rhs.as_int()) {
        return eval_binary_int(BinaryOp::Add, l, r).map(Value::Int);
    }
    if lhs.as_str().is_none() && rhs.as_str().is_none() {
        return Err(type_mismatch(BinaryOp::Add, lhs, rhs));
    }
    concat(arena, lhs, rhs).ok_or_else(|| type_mismatch(BinaryOp::Add, lhs, rhs))
}

fn concat<'a>(arena: &'a Bump, lhs: Value<'a>, rhs: Value<'a>) -> Option<Value<'a>> {
    let mut text = bumpalo::collections::String::new_in(arena);
    for operand in [lhs, rhs] {
        match operand {
            Value::Str(s) => text.push_str(s),
            Value::Int(n) => {
                let _ = write!(text, "{}", n);
            }
            Value::Bool(b) => {
                let _ = write!(text, "{}", b);
            }
            _ => return None,
        }
    }
    Some(Value::Str(text.into_bump_str()))
}

fn eval_equality<'v>(op: BinaryOp, lhs: Value<'v>, rhs: Value<'v>) -> Result<bool, RuntimeError> {
    let equal = match (lhs, rhs) {
        (Value::Int(l), Value::Int(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        _ => return Err(incomparable(op, lhs, rhs, Value::is_primitive)),
    };
    Ok(if op == BinaryOp::Eq { equal } else { !equal })
}

fn eval_ordering<'v>(op: BinaryOp, lhs: Value<'v>, rhs: Value<'v>) -> Result<bool, RuntimeError> {
    let ordering = if let (Some(l), Some(r)) = (lhs.as_int(), rhs.as_int()) {
        l.cmp(&r)
    } else if let (Some(l), Some(r)) = (lhs.as_str(), rhs.as_str()) {
        // Byte-wise lexicographic order.
        l.cmp(r)
    } else {
        return Err(incomparable(op, lhs, rhs, is_orderable));
    };
    Ok(match op {
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::Lte => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::Gte => ordering.is_ge(),
        _ => unreachable!("{op} is not an ordering operator"),
    })
}

fn is_orderable(value: &Value<'_>) -> bool {
    matches!(value, Value::Int(_) | Value::Str(_))
}

/// Error for a comparison that does not apply: an operand whose kind does
/// not support `op` at all, otherwise operands of two different kinds.
fn incomparable<'v>(
    op: BinaryOp,
    lhs: Value<'v>,
    rhs: Value<'v>,
    supported: impl Fn(&Value<'v>) -> bool,
) -> RuntimeError {
    if !supported(&lhs) {
        RuntimeError::TypeNotComparable {
            op,
            kind: lhs.kind_name(),
        }
    } else if !supported(&rhs) {
        RuntimeError::TypeNotComparable {
            op,
            kind: rhs.kind_name(),
        }
    } else {
        type_mismatch(op, lhs, rhs)
    }
}

fn type_mismatch(op: BinaryOp, lhs: Value<'_>, rhs: Value<'_>) -> RuntimeError {
    RuntimeError::TypeMismatch {
        op,
        lhs: lhs.kind_name(),
        rhs: rhs.kind_name(),
    }
}
