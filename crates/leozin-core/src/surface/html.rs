//! Escaped HTML fragment surface
//!
//! Output is safe to insert into a page: every value and attribute is
//! escaped, and only `strong`, `em`, `br` and `a` tags are produced.

use std::fmt::Write as _;

use super::Surface;
use crate::render::EmphasisKind;

#[derive(Debug, Default)]
pub struct HtmlSurface {
    out: String,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for HtmlSurface {
    type Output = String;

    fn text(&mut self, value: &str) {
        self.out.push_str(&escape_html(value));
    }

    fn emphasis(&mut self, kind: EmphasisKind, value: &str) {
        let tag = match kind {
            EmphasisKind::Bold => "strong",
            EmphasisKind::Italic => "em",
        };
        let _ = write!(self.out, "<{tag}>{}</{tag}>", escape_html(value));
    }

    fn line_break(&mut self) {
        self.out.push_str("<br>");
    }

    fn link(&mut self, url: &str, label: &str) {
        let _ = write!(
            self.out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(url),
            escape_html(label)
        );
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, DisplayNode};
    use crate::surface::materialize;

    #[test]
    fn test_html_fragment() {
        let nodes = render("**Oi** *você*\nveja https://facebook.com/jp");
        let html = materialize(&nodes, HtmlSurface::new());
        assert_eq!(
            html,
            "<strong>Oi</strong> <em>você</em><br>veja \
             <a href=\"https://facebook.com/jp\" target=\"_blank\" rel=\"noopener noreferrer\">Facebook</a>"
        );
    }

    #[test]
    fn test_markup_is_escaped() {
        let nodes = render("<img src=x onerror=alert(1)> & **<b>**");
        let html = materialize(&nodes, HtmlSurface::new());
        assert_eq!(
            html,
            "&lt;img src=x onerror=alert(1)&gt; &amp; <strong>&lt;b&gt;</strong>"
        );
    }

    #[test]
    fn test_link_attribute_is_escaped() {
        let nodes = vec![DisplayNode::link("https://x.com/\"onclick=", "x\"")];
        let html = materialize(&nodes, HtmlSurface::new());
        assert!(html.contains("href=\"https://x.com/&quot;onclick=\""));
        assert!(html.ends_with(">x&quot;</a>"));
    }
}
