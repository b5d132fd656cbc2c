//! Message text scanning
//!
//! Link detection is the outer pass. Every segment between links goes
//! through the emphasis scan, and whatever text remains is split on line
//! breaks. Link text is never re-scanned.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::{DisplayNode, EmphasisKind};
use super::labels::LabelTable;

/// `**bold**` or `*italic*`, no inner asterisks, never across a line break.
/// Alternation is leftmost-first, so bold wins at the same position.
static EMPHASIS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*([^*\n]+)\*\*|\*([^*\n]+)\*").expect("emphasis regex pattern is valid")
});

/// Bare URL candidates, delimited by whitespace or `<`
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:https?://|www\.)[^\s<]+").expect("URL regex pattern is valid")
});

/// Converts message text into display nodes
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    labels: LabelTable,
}

impl TextRenderer {
    pub fn new(labels: LabelTable) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Render a message. `None` and `""` both produce no nodes.
    pub fn render<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<DisplayNode> {
        let Some(text) = text.into() else {
            return Vec::new();
        };
        if text.is_empty() {
            return Vec::new();
        }

        let text = normalize_line_breaks(text);
        let mut nodes = Vec::new();
        let mut last_end = 0;

        for mat in URL_REGEX.find_iter(&text) {
            let Some(candidate) = trim_candidate(mat.as_str()) else {
                continue;
            };

            push_emphasized(&mut nodes, &text[last_end..mat.start()]);

            let url = if candidate.starts_with("www.") {
                format!("https://{candidate}")
            } else {
                candidate.to_string()
            };
            let label = self.labels.label_for(&url, candidate);
            nodes.push(DisplayNode::Link { url, label });

            // Trimmed characters flow into the next segment
            last_end = mat.start() + candidate.len();
        }

        push_emphasized(&mut nodes, &text[last_end..]);
        nodes
    }
}

/// Push a non-link segment, resolving `**bold**` and `*italic*` spans
fn push_emphasized(nodes: &mut Vec<DisplayNode>, segment: &str) {
    let mut last_end = 0;

    for caps in EMPHASIS_REGEX.captures_iter(segment) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (kind, inner) = match (caps.get(1), caps.get(2)) {
            (Some(inner), _) => (EmphasisKind::Bold, inner),
            (None, Some(inner)) => (EmphasisKind::Italic, inner),
            (None, None) => continue,
        };

        push_plain(nodes, &segment[last_end..whole.start()]);
        nodes.push(DisplayNode::Emphasis {
            kind,
            value: inner.as_str().to_string(),
        });
        last_end = whole.end();
    }

    push_plain(nodes, &segment[last_end..]);
}

/// Fold `\r\n` and the two-character `\n` escape into `'\n'`
fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') && !text.contains("\\n") {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace("\\n", "\n"))
}

/// Strip trailing sentence punctuation and emphasis markers from a URL
/// candidate.
///
/// Returns `None` when nothing is left after the scheme or `www.` prefix.
fn trim_candidate(candidate: &str) -> Option<&str> {
    let prefix_len = if candidate.starts_with("https://") {
        "https://".len()
    } else if candidate.starts_with("http://") {
        "http://".len()
    } else {
        "www.".len()
    };

    let mut end = candidate.len();
    while end > prefix_len {
        let current = &candidate[..end];
        let Some(last) = current.chars().next_back() else {
            break;
        };
        let trim = match last {
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '*' => true,
            ')' => current.matches(')').count() > current.matches('(').count(),
            _ => false,
        };
        if !trim {
            break;
        }
        end -= last.len_utf8();
    }

    (end > prefix_len).then(|| &candidate[..end])
}

/// Push plain text, alternating `Text` and `LineBreak` nodes
fn push_plain(nodes: &mut Vec<DisplayNode>, text: &str) {
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            nodes.push(DisplayNode::LineBreak);
        }
        if !line.is_empty() {
            nodes.push(DisplayNode::Text(line.to_string()));
        }
    }
}
