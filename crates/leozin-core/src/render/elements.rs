//! Display node types

use serde::{Deserialize, Serialize};

/// Which emphasis marker produced a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmphasisKind {
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
}

/// One unit of rendered message output
///
/// Values are raw text. Surfaces are responsible for escaping them for
/// whatever target they write to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DisplayNode {
    /// Plain text run (never contains a line break)
    Text(String),
    /// Bold or italic span with the markers removed
    Emphasis { kind: EmphasisKind, value: String },
    /// Hard line break
    LineBreak,
    /// Autolinked URL with a friendly label
    Link { url: String, label: String },
}

impl DisplayNode {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn bold(value: impl Into<String>) -> Self {
        Self::Emphasis {
            kind: EmphasisKind::Bold,
            value: value.into(),
        }
    }

    pub fn italic(value: impl Into<String>) -> Self {
        Self::Emphasis {
            kind: EmphasisKind::Italic,
            value: value.into(),
        }
    }

    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            url: url.into(),
            label: label.into(),
        }
    }

    /// The text a reader sees for this node
    pub fn visible_text(&self) -> &str {
        match self {
            DisplayNode::Text(value) | DisplayNode::Emphasis { value, .. } => value.as_str(),
            DisplayNode::LineBreak => "\n",
            DisplayNode::Link { label, .. } => label.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(DisplayNode::bold("oi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "emphasis", "data": {"kind": "bold", "value": "oi"}})
        );

        let json = serde_json::to_value(DisplayNode::LineBreak).unwrap();
        assert_eq!(json, serde_json::json!({"type": "line_break"}));
    }
}
