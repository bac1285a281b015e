//! Input coercion for the block renderer.
//!
//! Block collections arrive either already structured (a JSON array from the
//! API) or as a serialized string (legacy bodies, form fields). Both are
//! folded into a [`Resolved`] value once, so rendering only ever deals with a
//! typed block list.

use serde_json::Value;

use super::block::{ContentBlock, blocks_from_values};

/// Raw renderer input, before any decoding.
#[derive(Debug, Clone, Copy)]
pub enum BlocksInput<'a> {
    /// Nothing to render: missing field, `null`, or another falsy value.
    Absent,
    /// An already-decoded block sequence.
    Structured(&'a [Value]),
    /// Typed blocks, as held by records.
    Typed(&'a [ContentBlock]),
    /// A string that may hold a serialized block sequence.
    Serialized(&'a str),
    /// A value of the wrong shape (object, number, `true`).
    Malformed,
}

/// Result of resolving a [`BlocksInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<'a> {
    Empty,
    Blocks(Vec<ContentBlock>),
    /// A string that did not decode; rendered as one plain paragraph.
    Literal(&'a str),
}

impl<'a> BlocksInput<'a> {
    /// Decode the input into a block list, a literal, or nothing.
    pub fn resolve(self) -> Resolved<'a> {
        match self {
            Self::Absent | Self::Malformed => Resolved::Empty,
            Self::Structured(values) => Resolved::Blocks(blocks_from_values(values)),
            Self::Typed(blocks) => Resolved::Blocks(blocks.to_vec()),
            Self::Serialized("") => Resolved::Empty,
            Self::Serialized(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(values)) => Resolved::Blocks(blocks_from_values(&values)),
                Ok(_) => Resolved::Empty,
                Err(e) => {
                    tracing::debug!(error = %e, "block input is not JSON, rendering as text");
                    Resolved::Literal(text)
                }
            },
        }
    }
}

impl<'a> From<&'a Value> for BlocksInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Self::Absent,
            Value::Number(n) if n.as_f64() == Some(0.0) => Self::Absent,
            Value::String(s) if s.is_empty() => Self::Absent,
            Value::String(s) => Self::Serialized(s),
            Value::Array(values) => Self::Structured(values),
            _ => Self::Malformed,
        }
    }
}

impl<'a> From<Option<&'a Value>> for BlocksInput<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Absent, Self::from)
    }
}

impl<'a> From<&'a str> for BlocksInput<'a> {
    fn from(text: &'a str) -> Self {
        if text.is_empty() {
            Self::Absent
        } else {
            Self::Serialized(text)
        }
    }
}

impl<'a> From<&'a [ContentBlock]> for BlocksInput<'a> {
    fn from(blocks: &'a [ContentBlock]) -> Self {
        Self::Typed(blocks)
    }
}

impl<'a> From<&'a Vec<ContentBlock>> for BlocksInput<'a> {
    fn from(blocks: &'a Vec<ContentBlock>) -> Self {
        Self::Typed(blocks)
    }
}
