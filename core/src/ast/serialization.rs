//! Encoding of the syntax tree back into the document schema read by the decoder.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use crate::{
    ast::{Location, Parameter, Program, Term, TermKind},
    stack::ensure_sufficient_stack,
};

impl Serialize for Location<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Location", 3)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("filename", self.filename)?;
        state.end()
    }
}

impl Serialize for Parameter<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Parameter", 2)?;
        state.serialize_field("text", self.text)?;
        state.serialize_field("location", &self.location)?;
        state.end()
    }
}

impl Serialize for Term<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // One level of recursion per nested term, like decoding.
        ensure_sufficient_stack(|| self.serialize_entries(serializer))
    }
}

impl Term<'_> {
    fn serialize_entries<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.kind.tag())?;
        match &self.kind {
            TermKind::Int(value) => map.serialize_entry("value", value)?,
            TermKind::Str(value) => map.serialize_entry("value", value)?,
            TermKind::Bool(value) => map.serialize_entry("value", value)?,
            TermKind::Var(text) => map.serialize_entry("text", text)?,
            TermKind::Function { parameters, body } => {
                map.serialize_entry("parameters", parameters)?;
                map.serialize_entry("value", body)?;
            }
            TermKind::Call { callee, arguments } => {
                map.serialize_entry("callee", callee)?;
                map.serialize_entry("arguments", arguments)?;
            }
            TermKind::Let { name, value, next } => {
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("next", next)?;
            }
            TermKind::If {
                condition,
                then,
                otherwise,
            } => {
                map.serialize_entry("condition", condition)?;
                map.serialize_entry("then", then)?;
                map.serialize_entry("otherwise", otherwise)?;
            }
            TermKind::Binary { lhs, op, rhs } => {
                map.serialize_entry("lhs", lhs)?;
                map.serialize_entry("op", op)?;
                map.serialize_entry("rhs", rhs)?;
            }
            TermKind::Tuple { first, second } => {
                map.serialize_entry("first", first)?;
                map.serialize_entry("second", second)?;
            }
            TermKind::Print(value) | TermKind::First(value) | TermKind::Second(value) => {
                map.serialize_entry("value", value)?;
            }
        }
        map.serialize_entry("location", &self.location)?;
        map.end()
    }
}

impl Serialize for Program<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("File", 3)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("expression", self.expression)?;
        state.serialize_field("location", &self.location)?;
        state.end()
    }
}
