//! Visible-text surface

use super::Surface;
use crate::render::EmphasisKind;

/// Collects the text a reader would see, with `\n` for line breaks
#[derive(Debug, Default)]
pub struct PlainSurface {
    out: String,
}

impl PlainSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for PlainSurface {
    type Output = String;

    fn text(&mut self, value: &str) {
        self.out.push_str(value);
    }

    fn emphasis(&mut self, _kind: EmphasisKind, value: &str) {
        self.out.push_str(value);
    }

    fn line_break(&mut self) {
        self.out.push('\n');
    }

    fn link(&mut self, _url: &str, label: &str) {
        self.out.push_str(label);
    }

    fn finish(self) -> String {
        self.out
    }
}
