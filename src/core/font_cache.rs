//! Font cache with LRU eviction
//!
//! Key format: descriptor ("Serif 150") -> ResolvedFont
//! Owned by the compositor and lives as long as it does, so distinct
//! descriptors are resolved once across many generations.

use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Result;
use log::debug;
use lru::LruCache;

use super::fonts::{parse_descriptor, FontSource, ResolvedFont};

/// Default number of descriptors kept before eviction
pub const DEFAULT_CAPACITY: usize = 256;

/// Cache statistics for monitoring
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 { 0.0 } else { self.hits as f64 / total as f64 }
    }
}

/// Descriptor -> font cache, bounded by entry count.
#[derive(Debug)]
pub struct FontCache {
    cache: LruCache<String, Arc<ResolvedFont>>,
    stats: CacheStats,
}

impl FontCache {
    /// Create a cache holding at most `capacity` descriptors (min 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        debug!("FontCache created: capacity={}", capacity);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Cached font for `desc`, resolving through `source` on a miss.
    ///
    /// Failed resolutions are not cached; the next request retries.
    pub fn get_or_resolve(&mut self, desc: &str, source: &dyn FontSource) -> Result<Arc<ResolvedFont>> {
        if let Some(font) = self.cache.get(desc) {
            self.stats.hits += 1;
            return Ok(Arc::clone(font));
        }
        self.stats.misses += 1;

        let (name, size) = parse_descriptor(desc)?;
        let Some(family) = source.resolve(name) else {
            anyhow::bail!("unknown font family '{}'", name);
        };

        let font = Arc::new(ResolvedFont { family, size });
        if let Some((evicted, _)) = self.cache.push(desc.to_string(), Arc::clone(&font)) {
            if evicted != desc {
                debug!("LRU evicted font: {}", evicted);
            }
        }
        debug!("Cached font: {} -> {}", desc, font.family);
        Ok(font)
    }

    /// Check if descriptor is cached (without updating LRU)
    pub fn contains(&self, desc: &str) -> bool {
        self.cache.peek(desc).is_some()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drop every entry and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = CacheStats::default();
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
