//! Rendering surfaces
//!
//! A surface materializes display nodes into some output: a string, an HTML
//! fragment, log events, terminal lines. Parsing never depends on which one
//! is used.

mod html;
mod plain;
mod trace;

pub use html::HtmlSurface;
pub use plain::PlainSurface;
pub use trace::TraceSurface;

use crate::render::{DisplayNode, EmphasisKind};

/// Target that display nodes are written into
pub trait Surface {
    type Output;

    fn text(&mut self, value: &str);
    fn emphasis(&mut self, kind: EmphasisKind, value: &str);
    fn line_break(&mut self);
    fn link(&mut self, url: &str, label: &str);

    /// Consume the surface and return what was built
    fn finish(self) -> Self::Output;
}

/// Feed `nodes` into `surface` in order
pub fn materialize<S: Surface>(nodes: &[DisplayNode], mut surface: S) -> S::Output {
    for node in nodes {
        match node {
            DisplayNode::Text(value) => surface.text(value),
            DisplayNode::Emphasis { kind, value } => surface.emphasis(*kind, value),
            DisplayNode::LineBreak => surface.line_break(),
            DisplayNode::Link { url, label } => surface.link(url, label),
        }
    }
    surface.finish()
}
