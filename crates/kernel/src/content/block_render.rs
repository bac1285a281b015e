//! Server-side rendering of structured content blocks.
//!
//! Converts a block collection into the markup used by project and article
//! cards:
//! - Heading, paragraph, image, video
//! - Unrecognized blocks are skipped
//! - Serialized collections that fail to decode render as one paragraph
//!
//! Block values are written verbatim: the authoring backend owns
//! sanitization. [`RenderOptions::sanitized`] opts into cleaning text with
//! ammonia and escaping media references.

use crate::routes::helpers::html_escape;

use super::block::{BlockKind, ContentBlock};
use super::input::{BlocksInput, Resolved};

/// How block values are written into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Clean text values and escape media references.
    pub sanitize: bool,
}

impl RenderOptions {
    /// Values written exactly as supplied.
    pub const fn verbatim() -> Self {
        Self { sanitize: false }
    }

    pub const fn sanitized() -> Self {
        Self { sanitize: true }
    }

    fn text(self, value: &str) -> String {
        if self.sanitize {
            ammonia::clean(value)
        } else {
            value.to_string()
        }
    }

    fn src(self, value: &str) -> String {
        if self.sanitize {
            html_escape(value)
        } else {
            value.to_string()
        }
    }
}

/// Render a block collection in any accepted shape with verbatim values.
///
/// Never fails: absent or malformed input renders as an empty string, and a
/// string that is not a serialized collection renders as one paragraph.
pub fn render_content_blocks<'a>(input: impl Into<BlocksInput<'a>>) -> String {
    render_content_blocks_with(input, RenderOptions::verbatim())
}

/// Render a block collection in any accepted shape.
pub fn render_content_blocks_with<'a>(
    input: impl Into<BlocksInput<'a>>,
    options: RenderOptions,
) -> String {
    match input.into().resolve() {
        Resolved::Empty => String::new(),
        Resolved::Literal(text) => format!("<p>{}</p>", options.text(text)),
        Resolved::Blocks(blocks) => render_blocks(&blocks, options),
    }
}

/// Render typed blocks in order, concatenated without separators.
pub fn render_blocks(blocks: &[ContentBlock], options: RenderOptions) -> String {
    let mut html = String::new();
    for block in blocks {
        html.push_str(&render_block(block, options));
    }
    html
}

fn render_block(block: &ContentBlock, options: RenderOptions) -> String {
    match &block.kind {
        BlockKind::Heading => render_heading(&options.text(&block.value)),
        BlockKind::Paragraph => render_paragraph(&options.text(&block.value)),
        BlockKind::Image => render_image(&options.src(&block.value)),
        BlockKind::Video => render_video(&options.src(&block.value)),
        BlockKind::Unrecognized {
            block_type,
            sub_type,
        } => {
            tracing::trace!(%block_type, ?sub_type, "skipping unrecognized block");
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Individual block renderers
// ---------------------------------------------------------------------------

fn render_heading(text: &str) -> String {
    format!("<h5 class=\"block-heading\">{text}</h5>")
}

fn render_paragraph(text: &str) -> String {
    format!("<p class=\"block-paragraph\">{text}</p>")
}

fn render_image(src: &str) -> String {
    format!("<div class=\"block-media-container\"><img src=\"{src}\" class=\"block-img\"></div>")
}

/// Videos are embedded players sized by the container.
fn render_video(src: &str) -> String {
    format!(
        "<div class=\"block-media-container\">\
         <iframe src=\"{src}\" class=\"block-video\" frameborder=\"0\" allowfullscreen></iframe>\
         </div>"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
