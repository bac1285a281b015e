//! Content block model.
//!
//! A content block is a `(type, sub_type, value)` triple produced by the
//! authoring backend. Tags are open-ended strings on the wire; here they are
//! decoded into [`BlockKind`], with anything the renderer does not know about
//! kept as [`BlockKind::Unrecognized`] so new producer types pass through
//! instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire tag for text blocks.
pub const TYPE_TEXT: &str = "text";
/// Wire tag for media blocks.
pub const TYPE_MEDIA: &str = "media";

pub const SUB_TYPE_HEADING: &str = "heading";
pub const SUB_TYPE_PARAGRAPH: &str = "paragraph";
pub const SUB_TYPE_IMAGE: &str = "image";
pub const SUB_TYPE_VIDEO: &str = "video";

/// Decoded `(type, sub_type)` pair of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `text` + `heading`.
    Heading,
    /// `text` with any other (or no) sub type.
    Paragraph,
    /// `media` + `image`.
    Image,
    /// `media` + `video`.
    Video,
    /// A tag pair the renderer does not handle. Rendered as nothing.
    Unrecognized {
        block_type: String,
        sub_type: Option<String>,
    },
}

impl BlockKind {
    /// Decode a tag pair.
    ///
    /// Text blocks default to paragraphs; media blocks need a known sub type.
    pub fn from_tags(block_type: &str, sub_type: Option<&str>) -> Self {
        match (block_type, sub_type) {
            (TYPE_TEXT, Some(SUB_TYPE_HEADING)) => Self::Heading,
            (TYPE_TEXT, _) => Self::Paragraph,
            (TYPE_MEDIA, Some(SUB_TYPE_IMAGE)) => Self::Image,
            (TYPE_MEDIA, Some(SUB_TYPE_VIDEO)) => Self::Video,
            _ => Self::Unrecognized {
                block_type: block_type.to_string(),
                sub_type: sub_type.map(str::to_string),
            },
        }
    }

    /// Wire `type` for this kind.
    pub fn block_type(&self) -> &str {
        match self {
            Self::Heading | Self::Paragraph => TYPE_TEXT,
            Self::Image | Self::Video => TYPE_MEDIA,
            Self::Unrecognized { block_type, .. } => block_type,
        }
    }

    /// Wire `sub_type` for this kind.
    pub fn sub_type(&self) -> Option<&str> {
        match self {
            Self::Heading => Some(SUB_TYPE_HEADING),
            Self::Paragraph => Some(SUB_TYPE_PARAGRAPH),
            Self::Image => Some(SUB_TYPE_IMAGE),
            Self::Video => Some(SUB_TYPE_VIDEO),
            Self::Unrecognized { sub_type, .. } => sub_type.as_deref(),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image)
    }
}

/// A single typed unit of display content.
///
/// Deserialization never fails: elements that are not objects, or whose
/// `type` is not a string, become [`BlockKind::Unrecognized`] and a missing
/// `value` becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "WireBlock")]
pub struct ContentBlock {
    pub kind: BlockKind,
    /// Literal text for text blocks, a URL for media blocks.
    pub value: String,
}

impl ContentBlock {
    pub fn new(kind: BlockKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn heading(value: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading, value)
    }

    pub fn paragraph(value: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, value)
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::new(BlockKind::Image, src)
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::new(BlockKind::Video, src)
    }
}

impl From<&Value> for ContentBlock {
    fn from(raw: &Value) -> Self {
        let block_type = raw.get("type").and_then(Value::as_str);
        let sub_type = raw.get("sub_type").and_then(Value::as_str);
        let value = raw.get("value").map(scalar_text).unwrap_or_default();

        let kind = match block_type {
            Some(t) => BlockKind::from_tags(t, sub_type),
            None => BlockKind::Unrecognized {
                block_type: String::new(),
                sub_type: sub_type.map(str::to_string),
            },
        };

        Self { kind, value }
    }
}

/// Text form of a block value. Numbers and booleans are written as they
/// appear in JSON; null and nested values have no text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl From<Value> for ContentBlock {
    fn from(raw: Value) -> Self {
        Self::from(&raw)
    }
}

/// Serialized shape of a block: `{type, sub_type?, value}`.
#[derive(Debug, Clone, Serialize)]
pub struct WireBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub value: String,
}

impl From<ContentBlock> for WireBlock {
    fn from(block: ContentBlock) -> Self {
        Self {
            block_type: block.kind.block_type().to_string(),
            sub_type: block.kind.sub_type().map(str::to_string),
            value: block.value,
        }
    }
}

/// Decode every element of a JSON array into a block, keeping order.
pub fn blocks_from_values(values: &[Value]) -> Vec<ContentBlock> {
    values.iter().map(ContentBlock::from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_without_sub_type_is_paragraph() {
        let block = ContentBlock::from(&json!({ "type": "text", "value": "body" }));
        assert_eq!(block, ContentBlock::paragraph("body"));
    }

    #[test]
    fn text_with_odd_sub_type_is_paragraph() {
        let block = ContentBlock::from(&json!({ "type": "text", "sub_type": "quote", "value": "q" }));
        assert_eq!(block.kind, BlockKind::Paragraph);
    }

    #[test]
    fn media_with_unknown_sub_type_is_unrecognized() {
        let block = ContentBlock::from(&json!({ "type": "media", "sub_type": "audio", "value": "a.ogg" }));
        assert_eq!(
            block.kind,
            BlockKind::Unrecognized {
                block_type: "media".to_string(),
                sub_type: Some("audio".to_string()),
            }
        );
    }

    #[test]
    fn non_object_element_is_unrecognized() {
        let block = ContentBlock::from(&json!(42));
        assert!(matches!(block.kind, BlockKind::Unrecognized { .. }));
        assert!(block.value.is_empty());
    }

    #[test]
    fn missing_value_is_empty() {
        let block = ContentBlock::from(&json!({ "type": "text", "sub_type": "heading" }));
        assert_eq!(block, ContentBlock::heading(""));
    }

    #[test]
    fn scalar_values_are_written_as_text() {
        let block = ContentBlock::from(&json!({ "type": "text", "value": 2024 }));
        assert_eq!(block, ContentBlock::paragraph("2024"));
        let block = ContentBlock::from(&json!({ "type": "text", "sub_type": "heading", "value": true }));
        assert_eq!(block, ContentBlock::heading("true"));
    }

    #[test]
    fn null_and_nested_values_are_empty() {
        let block = ContentBlock::from(&json!({ "type": "text", "value": null }));
        assert_eq!(block, ContentBlock::paragraph(""));
        let block = ContentBlock::from(&json!({ "type": "media", "sub_type": "image", "value": ["a"] }));
        assert_eq!(block, ContentBlock::image(""));
    }

    #[test]
    fn deserialize_tolerates_mixed_array() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(json!([
            { "type": "media", "sub_type": "video", "value": "v.mp4" },
            "stray",
            { "type": "text", "sub_type": "heading", "value": "H" }
        ]))
        .unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], ContentBlock::video("v.mp4"));
        assert!(matches!(blocks[1].kind, BlockKind::Unrecognized { .. }));
        assert_eq!(blocks[2], ContentBlock::heading("H"));
    }

    #[test]
    fn serialize_keeps_unrecognized_tags() {
        let block = ContentBlock::from(&json!({ "type": "gallery", "sub_type": "grid", "value": "x" }));
        let out = serde_json::to_value(&block).unwrap();
        assert_eq!(out, json!({ "type": "gallery", "sub_type": "grid", "value": "x" }));
    }

    #[test]
    fn serialize_known_kind_writes_canonical_tags() {
        let out = serde_json::to_value(ContentBlock::image("a.png")).unwrap();
        assert_eq!(out, json!({ "type": "media", "sub_type": "image", "value": "a.png" }));
    }
}
