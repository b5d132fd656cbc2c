//! Render Cache
//!
//! Caches rendered node sequences so a transcript can be redrawn without
//! re-scanning every message.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::elements::DisplayNode;
use super::parser::TextRenderer;

/// Cached display nodes keyed by message content hash
#[derive(Debug, Default)]
pub struct RenderCache {
    cache: HashMap<u64, Arc<Vec<DisplayNode>>>,
}

impl RenderCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash used as the cache key for a message
    pub fn content_hash(content: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish()
    }

    /// Get or render nodes for `content`, caching the result
    ///
    /// Entries are not tied to a label table; call `clear()` after
    /// switching to a renderer with different labels.
    pub fn get_or_render(
        &mut self,
        renderer: &TextRenderer,
        content: &str,
    ) -> Arc<Vec<DisplayNode>> {
        let key = Self::content_hash(content);

        if let Some(cached) = self.cache.get(&key) {
            Arc::clone(cached)
        } else {
            let arc = Arc::new(renderer.render(content));
            self.cache.insert(key, Arc::clone(&arc));
            arc
        }
    }

    /// Get cached nodes without rendering
    pub fn get(&self, content: &str) -> Option<Arc<Vec<DisplayNode>>> {
        self.cache.get(&Self::content_hash(content)).cloned()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_rendered_nodes() {
        let renderer = TextRenderer::default();
        let mut cache = RenderCache::new();

        let first = cache.get_or_render(&renderer, "**oi**");
        let second = cache.get_or_render(&renderer, "**oi**");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.as_slice(), &[DisplayNode::bold("oi")]);
    }

    #[test]
    fn test_clear() {
        let renderer = TextRenderer::default();
        let mut cache = RenderCache::new();
        cache.get_or_render(&renderer, "a");
        cache.get_or_render(&renderer, "b");
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }
}
