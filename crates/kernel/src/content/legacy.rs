//! Conversion of pre-structured bodies into blocks.
//!
//! Article `content` and project `description` used to hold the whole body in
//! one string: either a serialized block list or plain text. Records that
//! still carry such a body are converted when the store loads them.

use serde_json::Value;

use super::block::{ContentBlock, blocks_from_values};

/// Convert a legacy body into a block list.
///
/// A serialized JSON array decodes to its blocks; anything else becomes a
/// single paragraph holding the whole string. An empty body yields no blocks.
pub fn blocks_from_legacy(body: &str) -> Vec<ContentBlock> {
    if body.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(values)) => blocks_from_values(&values),
        _ => vec![ContentBlock::paragraph(body)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_one_paragraph() {
        assert_eq!(
            blocks_from_legacy("Real-time monitoring system."),
            vec![ContentBlock::paragraph("Real-time monitoring system.")]
        );
    }

    #[test]
    fn serialized_array_becomes_blocks() {
        let body = r#"[{"type":"text","sub_type":"heading","value":"H"},{"type":"media","sub_type":"image","value":"i.png"}]"#;
        assert_eq!(
            blocks_from_legacy(body),
            vec![ContentBlock::heading("H"), ContentBlock::image("i.png")]
        );
    }

    #[test]
    fn json_scalar_is_kept_as_text() {
        assert_eq!(blocks_from_legacy("2024"), vec![ContentBlock::paragraph("2024")]);
    }

    #[test]
    fn empty_body_has_no_blocks() {
        assert!(blocks_from_legacy("").is_empty());
    }
}
