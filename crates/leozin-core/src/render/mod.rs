//! Message rendering
//!
//! Turns raw assistant text into display nodes: plain text, bold/italic
//! spans, line breaks, and autolinked URLs with friendly labels. Nodes carry
//! no markup; a [`Surface`](crate::surface::Surface) decides how they look.

use once_cell::sync::Lazy;

mod cache;
mod elements;
mod labels;
mod parser;

pub use cache::RenderCache;
pub use elements::{DisplayNode, EmphasisKind};
pub use labels::LabelTable;
pub use parser::TextRenderer;

/// Renderer with the built-in label table
static DEFAULT_RENDERER: Lazy<TextRenderer> = Lazy::new(TextRenderer::default);

/// Render message text with the built-in label table
///
/// `None` and the empty string both yield no nodes.
pub fn render<'a>(text: impl Into<Option<&'a str>>) -> Vec<DisplayNode> {
    DEFAULT_RENDERER.render(text)
}
