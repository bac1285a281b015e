//! Content module.
//!
//! This module provides:
//! - ContentBlock: typed `(type, sub_type, value)` blocks with an open tag set
//! - BlocksInput: coercion of structured or serialized block collections
//! - Block rendering: blocks to card markup
//! - Thumbnail resolution and legacy body conversion

pub mod block;
pub mod block_render;
pub mod input;
mod legacy;
mod thumbnail;

pub use block::{BlockKind, ContentBlock};
pub use block_render::{RenderOptions, render_blocks, render_content_blocks, render_content_blocks_with};
pub use input::{BlocksInput, Resolved};
pub use legacy::blocks_from_legacy;
pub use thumbnail::{DEFAULT_THUMBNAIL, resolve_thumbnail};
