//! Article (news) record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{RecordId, null_as_default, typed_blocks, upgrade_legacy_body};
use crate::content::ContentBlock;

/// Byline used when an article has no author.
pub const DEFAULT_AUTHOR: &str = "WUSL Team";

/// A news article card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "author_or_team")]
    pub author: String,
    #[serde(skip_serializing)]
    pub author_id: Option<String>,
    /// Publication date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_private: bool,
    /// Block collection as received: an array, a serialized string, or absent.
    pub blocks: Value,
    /// Pre-structured body, converted into `blocks` by [`Article::upgrade_legacy`].
    #[serde(skip_serializing)]
    pub content: Option<String>,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            id: RecordId::default(),
            title: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            author_id: None,
            date: String::new(),
            is_private: false,
            blocks: Value::Null,
            content: None,
        }
    }
}

/// A `null` author gets the team byline, like a missing one.
fn author_or_team<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()))
}

impl Article {
    /// Move a legacy `content` body into `blocks` when no blocks exist.
    pub fn upgrade_legacy(mut self) -> Self {
        upgrade_legacy_body(&mut self.blocks, self.content.take());
        self
    }

    pub fn content_blocks(&self) -> Vec<ContentBlock> {
        typed_blocks(&self.blocks)
    }
}
