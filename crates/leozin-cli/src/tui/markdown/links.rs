//! Where link labels landed in a rendered reply
//!
//! The printer writes one span at a time to a stream. Before each span it
//! asks whether that span is exactly a link label, and if so brackets it
//! with OSC 8 open/close sequences.

use ratatui::text::Line;

/// A link label's position, in display columns of one rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// Target written into the OSC 8 sequence
    pub url: String,
    /// Index into `RenderedMessage::lines`
    pub line: usize,
    pub start_col: usize,
    /// Exclusive
    pub end_col: usize,
}

/// A reply ready for the printer: styled lines plus the link labels in them
#[derive(Debug, Clone, Default)]
pub struct RenderedMessage {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<LinkSpan>,
}

impl RenderedMessage {
    pub fn with_links(lines: Vec<Line<'static>>, links: Vec<LinkSpan>) -> Self {
        Self { lines, links }
    }

    /// The link whose label is the span covering `[start_col, end_col)` on
    /// `line`. A span that only overlaps a label is not a match.
    pub fn link_at(&self, line: usize, start_col: usize, end_col: usize) -> Option<&LinkSpan> {
        self.links
            .iter()
            .find(|l| l.line == line && l.start_col == start_col && l.end_col == end_col)
    }
}
