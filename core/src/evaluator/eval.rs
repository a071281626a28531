//! Core evaluation logic.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use bumpalo::Bump;
use std::io::Write;

use crate::{
    ast::{Location, Program, Term, TermKind},
    evaluator::{
        EvaluatorOptions, ExecutionError, ExecutionErrorKind, MemoCache,
        ResourceExceededError::*,
        RuntimeError::{self, *},
        memo, operators,
    },
    scope::Scope,
    stack::ensure_sufficient_stack,
    values::{CLOSURE_TEXT, NIL_TEXT, Value},
};

/// Evaluator for decoded programs.
///
/// Owns the call-result cache, so results are shared by every evaluation
/// made through the same evaluator and discarded with it.
pub struct Evaluator<'a, 'out> {
    options: EvaluatorOptions,
    arena: &'a Bump,
    out: &'out mut dyn Write,
    memo: MemoCache<'a>,
    depth: usize,
    /// Number of `print`s executed, used to keep effectful calls out of the cache.
    prints: usize,
}

impl<'a, 'out> Evaluator<'a, 'out> {
    /// Create an evaluator writing `print` output to `out`.
    ///
    /// Values created at run time (concatenated strings) are allocated in `arena`.
    pub fn new(arena: &'a Bump, options: EvaluatorOptions, out: &'out mut dyn Write) -> Self {
        Self {
            options,
            arena,
            out,
            memo: MemoCache::new(),
            depth: 0,
            prints: 0,
        }
    }

    pub fn memo(&self) -> &MemoCache<'a> {
        &self.memo
    }

    /// Evaluate a program's root expression in an empty scope and flush the output.
    pub fn run(&mut self, program: &Program<'a>) -> Result<Value<'a>, ExecutionError> {
        let mut scope = Scope::new();
        let result = self.evaluate(&mut scope, program.expression);
        // Output printed before a failure is still delivered.
        let flushed = self.out.flush();
        tracing::debug!(
            program = program.name,
            memo_entries = self.memo.len(),
            memo_hits = self.memo.hits(),
            memo_misses = self.memo.misses(),
            "evaluation finished"
        );
        let value = result?;
        flushed.map_err(|err| self.output_error(program.location, err))?;
        Ok(value)
    }

    /// Evaluate a term in `scope`.
    ///
    /// `let` bindings made by the term are added to `scope` itself.
    pub fn evaluate(
        &mut self,
        scope: &mut Scope<'a>,
        term: &'a Term<'a>,
    ) -> Result<Value<'a>, ExecutionError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(self.error(
                term.location,
                StackOverflow {
                    depth: self.depth,
                    max_depth: self.options.max_depth,
                },
            ));
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.evaluate_inner(scope, term));
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn evaluate_inner(
        &mut self,
        scope: &mut Scope<'a>,
        term: &'a Term<'a>,
    ) -> Result<Value<'a>, ExecutionError> {
        match term.kind {
            TermKind::Int(value) => Ok(Value::Int(value)),
            TermKind::Str(value) => Ok(Value::Str(value)),
            TermKind::Bool(value) => Ok(Value::Bool(value)),

            TermKind::Var(name) => scope.lookup(name).ok_or_else(|| {
                self.error(
                    term.location,
                    UndefinedVariable {
                        name: name.to_string(),
                    },
                )
            }),

            TermKind::Let { name, value, next } => {
                let value = self.evaluate(scope, value)?;
                scope.bind(name.text, value);
                self.evaluate(scope, next)
            }

            TermKind::Function { parameters, body } => Ok(Value::Closure {
                parameters,
                body,
                location: term.location,
            }),

            TermKind::If {
                condition,
                then,
                otherwise,
            } => match self.evaluate(scope, condition)? {
                Value::Bool(true) => self.evaluate(scope, then),
                Value::Bool(false) => self.evaluate(scope, otherwise),
                other => Err(self.error(
                    condition.location,
                    NotABoolean {
                        got: other.kind_name(),
                    },
                )),
            },

            TermKind::Binary { lhs, op, rhs } => {
                let lhs = self.evaluate(scope, lhs)?;
                let rhs = self.evaluate(scope, rhs)?;
                operators::eval_binary(self.arena, op, lhs, rhs)
                    .map_err(|err| self.error(term.location, err))
            }

            TermKind::Call { callee, arguments } => self.call(scope, term, callee, arguments),

            TermKind::Tuple { first, second } => Ok(Value::Tuple {
                first,
                second,
                location: term.location,
            }),

            TermKind::First(value) => {
                let (first, _) = self.tuple(scope, term, value)?;
                self.evaluate(scope, first)
            }

            TermKind::Second(value) => {
                let (_, second) = self.tuple(scope, term, value)?;
                self.evaluate(scope, second)
            }

            TermKind::Print(value) => {
                let value = self.evaluate(scope, value)?;
                let text = self.render(scope, value)?;
                writeln!(self.out, "{}", text).map_err(|err| self.output_error(term.location, err))?;
                self.prints += 1;
                Ok(Value::Nil)
            }
        }
    }

    fn call(
        &mut self,
        scope: &mut Scope<'a>,
        term: &'a Term<'a>,
        callee: &'a Term<'a>,
        arguments: &'a [&'a Term<'a>],
    ) -> Result<Value<'a>, ExecutionError> {
        let (parameters, body, closure) = match self.evaluate(scope, callee)? {
            Value::Closure {
                parameters,
                body,
                location,
            } => (parameters, body, location),
            other => {
                return Err(self.error(
                    callee.location,
                    NotAFunction {
                        got: other.kind_name(),
                    },
                ));
            }
        };

        if parameters.len() != arguments.len() {
            return Err(self.error(
                term.location,
                WrongArgumentCount {
                    expected: parameters.len(),
                    got: arguments.len(),
                },
            ));
        }

        // The frame copies the caller's scope as it was before the arguments
        // ran; `let`s inside argument expressions only reach the caller.
        let mut frame = scope.fork();
        let mut values = Vec::with_capacity(arguments.len());
        for (parameter, argument) in parameters.iter().zip(arguments) {
            let value = self.evaluate(scope, argument)?;
            frame.bind(parameter.text, value);
            values.push(value);
        }

        let key = if self.options.memoize {
            memo::call_key(callee, closure, &values)
        } else {
            None
        };
        if let Some(key) = &key {
            if let Some(value) = self.memo.get(key) {
                tracing::trace!(key = key.as_str(), "memo hit");
                return Ok(value);
            }
        }

        let prints = self.prints;
        let result = self.evaluate(&mut frame, body)?;

        if let Some(key) = key {
            // Replaying a cached result would drop the call's output.
            if self.prints == prints {
                tracing::trace!(key = key.as_str(), "memo store");
                self.memo.insert(key, result);
            }
        }

        Ok(result)
    }

    /// Evaluate the operand of `first`/`second`, which must be a tuple.
    fn tuple(
        &mut self,
        scope: &mut Scope<'a>,
        term: &'a Term<'a>,
        value: &'a Term<'a>,
    ) -> Result<(&'a Term<'a>, &'a Term<'a>), ExecutionError> {
        match self.evaluate(scope, value)? {
            Value::Tuple { first, second, .. } => Ok((first, second)),
            other => Err(self.error(
                term.location,
                NotATuple {
                    got: other.kind_name(),
                },
            )),
        }
    }

    /// Text written by `print` for `value`.
    ///
    /// Tuple components are evaluated in `scope` as they are rendered.
    pub fn render(
        &mut self,
        scope: &mut Scope<'a>,
        value: Value<'a>,
    ) -> Result<String, ExecutionError> {
        let mut text = String::new();
        self.render_into(scope, value, &mut text)?;
        Ok(text)
    }

    fn render_into(
        &mut self,
        scope: &mut Scope<'a>,
        value: Value<'a>,
        text: &mut String,
    ) -> Result<(), ExecutionError> {
        use core::fmt::Write as _;

        match value {
            Value::Int(n) => {
                let _ = write!(text, "{}", n);
            }
            Value::Str(s) => text.push_str(s),
            Value::Bool(b) => {
                let _ = write!(text, "{}", b);
            }
            Value::Closure { .. } => text.push_str(CLOSURE_TEXT),
            Value::Nil => text.push_str(NIL_TEXT),
            Value::Tuple { first, second, .. } => {
                let first = self.evaluate(scope, first)?;
                let second = self.evaluate(scope, second)?;
                text.push('(');
                ensure_sufficient_stack(|| self.render_into(scope, first, text))?;
                text.push_str(", ");
                ensure_sufficient_stack(|| self.render_into(scope, second, text))?;
                text.push(')');
            }
        }
        Ok(())
    }

    fn error(&self, location: Location<'a>, kind: impl Into<ExecutionErrorKind>) -> ExecutionError {
        ExecutionError {
            kind: kind.into(),
            span: location.to_span(),
        }
    }

    fn output_error(&self, location: Location<'a>, err: std::io::Error) -> ExecutionError {
        self.error(
            location,
            RuntimeError::Output {
                message: err.to_string(),
            },
        )
    }
}
