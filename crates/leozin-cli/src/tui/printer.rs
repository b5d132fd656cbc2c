//! Writes rendered lines to a terminal stream
//!
//! Spans are converted to crossterm styles; link labels are wrapped in OSC 8
//! sequences when the output supports them. Message text is untrusted, so
//! control characters never reach the stream.

use std::borrow::Cow;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Attributes, Color as CColor, ContentStyle, Print, PrintStyledContent, StyledContent,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::markdown::RenderedMessage;
use super::theme::Theme;

/// Width of the frame drawn around assistant replies
const FRAME_WIDTH: usize = 78;

/// Write rendered lines, each prefixed by `gutter` when given
pub fn write_lines<W: Write>(
    out: &mut W,
    rendered: &RenderedMessage,
    gutter: Option<&Span<'static>>,
    hyperlinks: bool,
) -> io::Result<()> {
    for (idx, line) in rendered.lines.iter().enumerate() {
        if let Some(gutter) = gutter {
            write_span(out, gutter)?;
        }

        let mut col = 0;
        for span in &line.spans {
            let width = UnicodeWidthStr::width(span.content.as_ref());
            let link = rendered
                .link_at(idx, col, col + width)
                .filter(|link| hyperlinks && !link.url.contains(is_unsafe_control));

            if let Some(link) = link {
                queue!(out, Print(format!("\x1b]8;;{}\x1b\\", link.url)))?;
            }
            write_span(out, span)?;
            if link.is_some() {
                queue!(out, Print("\x1b]8;;\x1b\\"))?;
            }
            col += width;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Write a reply inside a box, with a header line above it
pub fn write_framed<W: Write>(
    out: &mut W,
    header: &Line<'static>,
    rendered: &RenderedMessage,
    theme: &Theme,
    hyperlinks: bool,
) -> io::Result<()> {
    let border = Style::default().fg(theme.border_color);

    write_line(out, header)?;
    write_line(out, &Line::from(Span::styled(format!("┌{}", "─".repeat(FRAME_WIDTH)), border)))?;
    write_lines(out, rendered, Some(&Span::styled("│ ", border)), hyperlinks)?;
    write_line(out, &Line::from(Span::styled(format!("└{}", "─".repeat(FRAME_WIDTH)), border)))
}

/// Write a single styled line followed by a newline
pub fn write_line<W: Write>(out: &mut W, line: &Line<'static>) -> io::Result<()> {
    for span in &line.spans {
        write_span(out, span)?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

fn write_span<W: Write>(out: &mut W, span: &Span<'_>) -> io::Result<()> {
    let content = printable(span.content.as_ref());
    let styled = StyledContent::new(content_style(span.style), content.as_ref());
    queue!(out, PrintStyledContent(styled))
}

/// Replace C0/C1 control characters other than tab with U+FFFD
fn printable(text: &str) -> Cow<'_, str> {
    if text.contains(is_unsafe_control) {
        Cow::Owned(text.replace(is_unsafe_control, "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}

fn is_unsafe_control(c: char) -> bool {
    c.is_control() && c != '\t'
}

fn content_style(style: Style) -> ContentStyle {
    let mut attributes = Attributes::default();
    if style.add_modifier.contains(Modifier::BOLD) {
        attributes.set(Attribute::Bold);
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        attributes.set(Attribute::Italic);
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        attributes.set(Attribute::Underlined);
    }
    if style.add_modifier.contains(Modifier::DIM) {
        attributes.set(Attribute::Dim);
    }

    ContentStyle {
        foreground_color: style.fg.map(to_crossterm),
        background_color: style.bg.map(to_crossterm),
        underline_color: None,
        attributes,
    }
}

fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::markdown::render_lines;
    use leozin_core::render;

    fn print(text: &str, hyperlinks: bool) -> String {
        let theme = Theme::default();
        let rendered = render_lines(&render(text), &theme);
        let mut out = Vec::new();
        write_lines(&mut out, &rendered, None, hyperlinks).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hyperlink_wraps_label() {
        let out = print("veja https://facebook.com/jp", true);
        assert!(out.contains("\x1b]8;;https://facebook.com/jp\x1b\\"));
        assert!(out.contains("Facebook"));
        assert!(out.contains("\x1b]8;;\x1b\\"));
        assert!(!out.contains("https://facebook.com/jp\n"));
    }

    #[test]
    fn test_no_hyperlinks_when_disabled() {
        let out = print("veja https://facebook.com/jp", false);
        assert!(!out.contains("\x1b]8;;"));
        assert!(out.contains("Facebook"));
    }

    #[test]
    fn test_control_sequences_never_reach_output() {
        let out = print("oi \x1b]0;pwned\x07 https://x.com/\x1b[2J", true);

        assert!(!out.contains('\x07'));
        assert!(!out.contains("\x1b]0;"));
        assert!(!out.contains("\x1b[2J"));
        // A URL carrying control characters is shown without a hyperlink
        assert!(!out.contains("\x1b]8;;"));
        assert!(out.contains("oi \u{FFFD}]0;pwned\u{FFFD} "));
        assert!(out.contains("x.com"));
    }

    #[test]
    fn test_printable_keeps_tabs() {
        assert_eq!(printable("a\tb"), "a\tb");
        assert_eq!(printable("a\u{9b}31mb\x7f"), "a\u{FFFD}31mb\u{FFFD}");
        assert!(matches!(printable("sem controle"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_one_output_line_per_rendered_line() {
        let out = print("a\nb\nc", false);
        assert_eq!(out.matches('\n').count(), 3);
    }

    #[test]
    fn test_framed_output() {
        let theme = Theme::default();
        let rendered = render_lines(&render("**oi**"), &theme);
        let header = Line::from("Leozin responde:");
        let mut out = Vec::new();
        write_framed(&mut out, &header, &rendered, &theme, false).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Leozin responde:"));
        assert!(out.contains('┌'));
        assert!(out.contains("│ "));
        assert!(out.contains('└'));
        assert!(out.contains("oi"));
    }
}
