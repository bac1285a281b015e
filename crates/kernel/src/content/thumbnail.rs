//! Thumbnail resolution for cards.

use super::block::ContentBlock;

/// Image used when an item has neither a thumbnail nor an image block.
pub const DEFAULT_THUMBNAIL: &str = "/static/img/logo.png";

/// Pick the image shown on an item's card.
///
/// Order: the explicit thumbnail unless blank, then the first image block,
/// then [`DEFAULT_THUMBNAIL`]. The explicit thumbnail is returned untrimmed.
pub fn resolve_thumbnail<'a>(thumbnail: Option<&'a str>, blocks: &'a [ContentBlock]) -> &'a str {
    if let Some(thumb) = thumbnail.filter(|t| !t.trim().is_empty()) {
        return thumb;
    }

    blocks
        .iter()
        .find(|b| b.kind.is_image())
        .map_or(DEFAULT_THUMBNAIL, |b| b.value.as_str())
}
