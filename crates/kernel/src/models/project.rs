//! Project record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RecordId, null_as_default, typed_blocks, upgrade_legacy_body};
use crate::content::{ContentBlock, resolve_thumbnail};

/// Title color used when a project has none.
pub const DEFAULT_PROJECT_COLOR: &str = "var(--dark-brown)";

/// A project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub thumbnail: Option<String>,
    pub color: Option<String>,
    #[serde(skip_serializing)]
    pub author_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_private: bool,
    /// Block collection as received: an array, a serialized string, or absent.
    pub blocks: Value,
    /// Pre-structured body, converted into `blocks` by [`Project::upgrade_legacy`].
    #[serde(skip_serializing)]
    pub description: Option<String>,
}

impl Project {
    /// Move a legacy `description` into `blocks` when no blocks exist.
    pub fn upgrade_legacy(mut self) -> Self {
        upgrade_legacy_body(&mut self.blocks, self.description.take());
        self
    }

    pub fn content_blocks(&self) -> Vec<ContentBlock> {
        typed_blocks(&self.blocks)
    }

    /// Card image: thumbnail, first image block, or the site default.
    pub fn thumbnail_url(&self) -> String {
        resolve_thumbnail(self.thumbnail.as_deref(), &self.content_blocks()).to_string()
    }

    pub fn title_color(&self) -> &str {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PROJECT_COLOR)
    }
}
