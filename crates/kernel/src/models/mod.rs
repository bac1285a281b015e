//! Site records served by the JSON API.
//!
//! Records decode leniently: every field has a default so that a partially
//! filled record from the data file or an upstream API still renders. Scalar
//! fields also read an explicit `null` as their default, since nullable
//! columns are serialized that way.

pub mod article;
pub mod member;
pub mod project;
pub mod reminder;

pub use article::Article;
pub use member::Member;
pub use project::Project;
pub use reminder::Reminder;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::content::{BlocksInput, ContentBlock, Resolved, blocks_from_legacy};

/// Record identifier: numeric in the relational era, string for document ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Read a field, treating `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Typed view of a record's raw `blocks` field.
///
/// A serialized string that does not decode yields no blocks; only the
/// renderer treats it as literal text.
pub(crate) fn typed_blocks(raw: &Value) -> Vec<ContentBlock> {
    match BlocksInput::from(raw).resolve() {
        Resolved::Blocks(blocks) => blocks,
        Resolved::Empty | Resolved::Literal(_) => Vec::new(),
    }
}

/// Fill an absent `blocks` field from a legacy single-string body.
pub(crate) fn upgrade_legacy_body(blocks: &mut Value, legacy: Option<String>) {
    if !blocks.is_null() {
        return;
    }
    if let Some(body) = legacy {
        *blocks = serde_json::to_value(blocks_from_legacy(&body)).unwrap_or_default();
    }
}
