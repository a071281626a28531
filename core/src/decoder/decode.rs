use alloc::{borrow::Cow, string::ToString, vec::Vec};
use bumpalo::Bump;
use hashbrown::HashSet;
use serde::Deserialize;
use serde_json::{Map, Value as Document};

use crate::{
    ast::{BinaryOp, Location, Parameter, Program, Term, TermKind},
    decoder::{DecodeError, DecoderOptions},
    stack::ensure_sufficient_stack,
};

type Object = Map<alloc::string::String, Document>;

#[derive(Deserialize)]
struct RawLocation<'d> {
    start: usize,
    end: usize,
    #[serde(borrow)]
    filename: Cow<'d, str>,
}

#[derive(Deserialize)]
struct RawParameter<'d> {
    #[serde(borrow)]
    text: Cow<'d, str>,
    #[serde(borrow)]
    location: RawLocation<'d>,
}

/// Rebuilds arena-allocated terms from a parsed document.
pub(super) struct Decoder<'a, 'o> {
    arena: &'a Bump,
    options: &'o DecoderOptions,
    /// Every location of a document names the same few files.
    filenames: HashSet<&'a str>,
    depth: usize,
    nodes: usize,
}

impl<'a, 'o> Decoder<'a, 'o> {
    pub(super) fn new(arena: &'a Bump, options: &'o DecoderOptions) -> Self {
        Self {
            arena,
            options,
            filenames: HashSet::new(),
            depth: 0,
            nodes: 0,
        }
    }

    /// Number of terms decoded so far.
    pub(super) fn nodes(&self) -> usize {
        self.nodes
    }

    pub(super) fn program(&mut self, document: &Document) -> Result<Program<'a>, DecodeError> {
        const KIND: &str = "File";

        let object = as_object(document, KIND)?;
        let name = self.string(object, KIND, "name")?;
        let expression = self.child(object, KIND, "expression")?;
        // Older parsers omit the file-level location.
        let location = match object.get("location") {
            Some(_) => self.location(object, KIND)?,
            None => Location::new(0, 0, self.intern(name)),
        };

        Ok(Program {
            name,
            expression,
            location,
        })
    }

    /// Decode one term, dispatching on its `kind` before reading anything else.
    pub(super) fn term(&mut self, document: &Document) -> Result<&'a Term<'a>, DecodeError> {
        if self.depth >= self.options.max_depth {
            return Err(DecodeError::NestingTooDeep {
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.term_inner(document));
        self.depth -= 1;

        result
    }

    fn term_inner(&mut self, document: &Document) -> Result<&'a Term<'a>, DecodeError> {
        let object = as_object(document, "term")?;
        let tag = match object.get("kind") {
            Some(Document::String(tag)) => tag.as_str(),
            Some(_) => {
                return Err(DecodeError::InvalidField {
                    kind: "term",
                    field: "kind",
                    reason: "expected a string".to_string(),
                });
            }
            None => {
                return Err(DecodeError::MissingField {
                    kind: "term",
                    field: "kind",
                });
            }
        };

        let (kind, kind_tag) = match tag {
            "Int" => (self.int(object)?, "Int"),
            "Str" => (self.str(object)?, "Str"),
            "Bool" => (self.bool(object)?, "Bool"),
            "Var" => (self.var(object)?, "Var"),
            "Function" => (self.function(object)?, "Function"),
            "Call" => (self.call(object)?, "Call"),
            "Let" => (self.let_(object)?, "Let"),
            "If" => (self.if_(object)?, "If"),
            "Binary" => (self.binary(object)?, "Binary"),
            "Tuple" => (self.tuple(object)?, "Tuple"),
            "Print" => (TermKind::Print(self.child(object, "Print", "value")?), "Print"),
            "First" => (TermKind::First(self.child(object, "First", "value")?), "First"),
            "Second" => (TermKind::Second(self.child(object, "Second", "value")?), "Second"),
            other => return Err(DecodeError::InvalidTermKind(other.to_string())),
        };
        let location = self.location(object, kind_tag)?;

        self.nodes += 1;
        Ok(self.arena.alloc(Term { kind, location }))
    }

    fn int(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::Int(scalar(object, "Int", "value")?))
    }

    fn str(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::Str(self.string(object, "Str", "value")?))
    }

    fn bool(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::Bool(scalar(object, "Bool", "value")?))
    }

    fn var(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::Var(self.string(object, "Var", "text")?))
    }

    fn function(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        let raw: Vec<RawParameter<'_>> = scalar(object, "Function", "parameters")?;
        let parameters: Vec<Parameter<'a>> = raw
            .into_iter()
            .map(|parameter| self.parameter(parameter))
            .collect();
        let parameters = self.arena.alloc_slice_copy(&parameters);
        let body = self.child(object, "Function", "value")?;
        Ok(TermKind::Function { parameters, body })
    }

    fn call(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        let callee = self.child(object, "Call", "callee")?;
        let arguments = match field(object, "Call", "arguments")? {
            Document::Array(items) => {
                let mut arguments = Vec::with_capacity(items.len());
                for item in items {
                    arguments.push(self.term(item)?);
                }
                self.arena.alloc_slice_copy(&arguments)
            }
            _ => {
                return Err(DecodeError::InvalidField {
                    kind: "Call",
                    field: "arguments",
                    reason: "expected an array of terms".to_string(),
                });
            }
        };
        Ok(TermKind::Call { callee, arguments })
    }

    fn let_(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        let raw: RawParameter<'_> = scalar(object, "Let", "name")?;
        let name = self.parameter(raw);
        let value = self.child(object, "Let", "value")?;
        let next = self.child(object, "Let", "next")?;
        Ok(TermKind::Let { name, value, next })
    }

    fn if_(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::If {
            condition: self.child(object, "If", "condition")?,
            then: self.child(object, "If", "then")?,
            otherwise: self.child(object, "If", "otherwise")?,
        })
    }

    fn binary(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        let op = match field(object, "Binary", "op")? {
            Document::String(tag) => tag.parse::<BinaryOp>()?,
            other => return Err(DecodeError::InvalidBinaryOperator(other.to_string())),
        };
        let lhs = self.child(object, "Binary", "lhs")?;
        let rhs = self.child(object, "Binary", "rhs")?;
        Ok(TermKind::Binary { lhs, op, rhs })
    }

    fn tuple(&mut self, object: &Object) -> Result<TermKind<'a>, DecodeError> {
        Ok(TermKind::Tuple {
            first: self.child(object, "Tuple", "first")?,
            second: self.child(object, "Tuple", "second")?,
        })
    }

    fn child(
        &mut self,
        object: &Object,
        kind: &'static str,
        name: &'static str,
    ) -> Result<&'a Term<'a>, DecodeError> {
        let document = field(object, kind, name)?;
        self.term(document)
    }

    fn string(
        &mut self,
        object: &Object,
        kind: &'static str,
        name: &'static str,
    ) -> Result<&'a str, DecodeError> {
        match field(object, kind, name)? {
            Document::String(text) => Ok(self.arena.alloc_str(text)),
            _ => Err(DecodeError::InvalidField {
                kind,
                field: name,
                reason: "expected a string".to_string(),
            }),
        }
    }

    fn location(
        &mut self,
        object: &Object,
        kind: &'static str,
    ) -> Result<Location<'a>, DecodeError> {
        let raw: RawLocation<'_> = scalar(object, kind, "location")?;
        Ok(self.resolve_location(raw))
    }

    fn resolve_location(&mut self, raw: RawLocation<'_>) -> Location<'a> {
        Location::new(raw.start, raw.end, self.intern(&raw.filename))
    }

    fn parameter(&mut self, raw: RawParameter<'_>) -> Parameter<'a> {
        Parameter {
            text: self.arena.alloc_str(&raw.text),
            location: self.resolve_location(raw.location),
        }
    }

    fn intern(&mut self, filename: &str) -> &'a str {
        if let Some(&interned) = self.filenames.get(filename) {
            return interned;
        }
        let interned: &'a str = self.arena.alloc_str(filename);
        self.filenames.insert(interned);
        interned
    }
}

fn as_object<'d>(document: &'d Document, context: &'static str) -> Result<&'d Object, DecodeError> {
    document
        .as_object()
        .ok_or(DecodeError::NotAnObject { context })
}

fn field<'d>(
    object: &'d Object,
    kind: &'static str,
    name: &'static str,
) -> Result<&'d Document, DecodeError> {
    object
        .get(name)
        .ok_or(DecodeError::MissingField { kind, field: name })
}

/// Deserialize a non-term field with serde, borrowing strings from the document.
fn scalar<'d, T>(object: &'d Object, kind: &'static str, name: &'static str) -> Result<T, DecodeError>
where
    T: Deserialize<'d>,
{
    let document = field(object, kind, name)?;
    T::deserialize(document).map_err(|err| DecodeError::InvalidField {
        kind,
        field: name,
        reason: err.to_string(),
    })
}
