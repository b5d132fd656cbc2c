//! Display nodes to Ratatui lines

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use leozin_core::surface::Surface;
use leozin_core::EmphasisKind;

use super::links::{LinkSpan, RenderedMessage};
use crate::tui::theme::Theme;

/// Builds styled lines, tracking link columns as it goes
pub struct LineSurface<'a> {
    theme: &'a Theme,
    base_style: Style,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// Current column position in display width units
    current_col: usize,
    links: Vec<LinkSpan>,
}

impl<'a> LineSurface<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            base_style: Style::default().fg(theme.text_color),
            lines: Vec::new(),
            current: Vec::new(),
            current_col: 0,
            links: Vec::new(),
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        self.current_col += UnicodeWidthStr::width(text);
        self.current.push(Span::styled(text.to_string(), style));
    }
}

impl Surface for LineSurface<'_> {
    type Output = RenderedMessage;

    fn text(&mut self, value: &str) {
        self.push_span(value, self.base_style);
    }

    fn emphasis(&mut self, kind: EmphasisKind, value: &str) {
        let modifier = match kind {
            EmphasisKind::Bold => Modifier::BOLD,
            EmphasisKind::Italic => Modifier::ITALIC,
        };
        self.push_span(value, self.base_style.add_modifier(modifier));
    }

    fn line_break(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
        self.current_col = 0;
    }

    fn link(&mut self, url: &str, label: &str) {
        let start_col = self.current_col;
        let style = self
            .base_style
            .fg(self.theme.link_color)
            .add_modifier(Modifier::UNDERLINED);
        self.push_span(label, style);

        // Record link span (only if it has content)
        if self.current_col > start_col {
            self.links.push(LinkSpan {
                url: url.to_string(),
                line: self.lines.len(),
                start_col,
                end_col: self.current_col,
            });
        }
    }

    fn finish(mut self) -> RenderedMessage {
        if !self.current.is_empty() || !self.lines.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
        RenderedMessage::with_links(self.lines, self.links)
    }
}
