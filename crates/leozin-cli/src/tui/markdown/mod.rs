//! Message rendering for the terminal
//!
//! Parsing lives in `leozin_core::render`; this module only materializes
//! the resulting nodes as styled Ratatui lines.

use leozin_core::{materialize, DisplayNode};

use super::theme::Theme;

mod inline;
mod links;

use inline::LineSurface;
pub use links::RenderedMessage;

/// Render display nodes to styled lines with link tracking
pub fn render_lines(nodes: &[DisplayNode], theme: &Theme) -> RenderedMessage {
    materialize(nodes, LineSurface::new(theme))
}
