//! Structured log surface

use tracing::debug;

use super::Surface;
use crate::render::EmphasisKind;

/// Emits one `debug!` event per node; output is the node count
#[derive(Debug)]
pub struct TraceSurface {
    message_id: usize,
    count: usize,
}

impl TraceSurface {
    pub fn new(message_id: usize) -> Self {
        Self {
            message_id,
            count: 0,
        }
    }
}

impl Surface for TraceSurface {
    type Output = usize;

    fn text(&mut self, value: &str) {
        debug!(message_id = self.message_id, index = self.count, value, "text");
        self.count += 1;
    }

    fn emphasis(&mut self, kind: EmphasisKind, value: &str) {
        debug!(message_id = self.message_id, index = self.count, ?kind, value, "emphasis");
        self.count += 1;
    }

    fn line_break(&mut self) {
        debug!(message_id = self.message_id, index = self.count, "line break");
        self.count += 1;
    }

    fn link(&mut self, url: &str, label: &str) {
        debug!(message_id = self.message_id, index = self.count, url, label, "link");
        self.count += 1;
    }

    fn finish(self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::surface::materialize;

    #[test]
    fn test_counts_nodes() {
        let nodes = render("a\n**b** https://example.com");
        assert_eq!(materialize(&nodes, TraceSurface::new(7)), nodes.len());
        assert_eq!(nodes.len(), 5);
    }
}
