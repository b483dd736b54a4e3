//! In-process identity cache with Moka.
//!
//! Values are stored as JSON strings. A tag index maps each identity to the
//! keys whose cached set contains it, for tag-based invalidation. Every save
//! gets a generation number; index entries carry the generation they were
//! written for, and Moka's eviction listener removes them when that value
//! is replaced, invalidated, expired or evicted.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dashmap::DashMap;
use moka::notification::RemovalCause;
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::TagCache;
use crate::config::Config;
use crate::error::NavigationResult;
use crate::models::Identities;

/// Default TTL for cached identity sets (1 hour).
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Default maximum number of cached identity sets.
pub const DEFAULT_MAX_CAPACITY: u64 = 10_000;

/// Identity -> (cache key -> generation of the value that contains it).
type TagIndex = DashMap<String, HashMap<String, u64>>;

/// Stored form of one identity set.
#[derive(Debug, Serialize, Deserialize)]
struct CachedIdentities {
    generation: u64,
    identities: Identities,
}

impl CachedIdentities {
    fn decode(encoded: &str) -> serde_json::Result<Self> {
        serde_json::from_str(encoded)
    }
}

/// Moka-backed [`TagCache`].
pub struct MokaTagCache {
    local: Cache<String, String>,

    tag_index: Arc<TagIndex>,

    next_generation: AtomicU64,
}

impl MokaTagCache {
    /// Create a cache with the given capacity and TTL.
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let tag_index: Arc<TagIndex> = Arc::new(DashMap::new());

        let listener_index = Arc::clone(&tag_index);
        let local = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .eviction_listener(move |key: Arc<String>, value: String, cause: RemovalCause| {
                match CachedIdentities::decode(&value) {
                    Ok(removed) => unindex(&listener_index, &key, &removed),
                    Err(e) => warn!(error = %e, key = %key, ?cause, "undecodable cache value removed"),
                }
            })
            .build();

        Self {
            local,
            tag_index,
            next_generation: AtomicU64::new(1),
        }
    }

    /// Create a cache sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.cache_max_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    /// Drop every cached identity set that contains `tag`.
    ///
    /// Returns the number of keys invalidated.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        // Deliver pending expiry notifications so the index is current.
        self.local.run_pending_tasks();

        let Some((_, keys)) = self.tag_index.remove(tag) else {
            debug!(tag = %tag, "no cached navigation for tag");
            return 0;
        };

        let mut invalidated = 0;
        for (key, generation) in &keys {
            let current = self
                .local
                .get(key)
                .and_then(|encoded| CachedIdentities::decode(&encoded).ok());
            if current.is_some_and(|c| c.generation == *generation) {
                self.local.invalidate(key);
                invalidated += 1;
            }
        }

        debug!(tag = %tag, keys_invalidated = invalidated, "tag invalidated");
        invalidated
    }

    /// Get cache statistics (for monitoring).
    pub fn stats(&self) -> CacheStats {
        self.local.run_pending_tasks();
        CacheStats {
            entry_count: self.local.entry_count(),
            indexed_tags: self.tag_index.len(),
        }
    }
}

/// Remove the index entries written for `removed`, leaving entries of any
/// newer value under the same key.
fn unindex(index: &TagIndex, key: &str, removed: &CachedIdentities) {
    for tag in &removed.identities {
        let now_empty = match index.get_mut(tag) {
            Some(mut keys) => {
                if keys.get(key) == Some(&removed.generation) {
                    keys.remove(key);
                }
                keys.is_empty()
            }
            None => false,
        };
        if now_empty {
            index.remove_if(tag, |_, keys| keys.is_empty());
        }
    }
}

impl Default for MokaTagCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CAPACITY, Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

impl TagCache for MokaTagCache {
    fn save(&self, key: &str, identities: &Identities) -> NavigationResult<()> {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let encoded = serde_json::to_string(&CachedIdentities {
            generation,
            identities: identities.clone(),
        })?;

        // The replaced value is unindexed by the eviction listener.
        self.local.insert(key.to_string(), encoded);
        for tag in identities {
            self.tag_index
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string(), generation);
        }

        debug!(key = %key, identities = identities.len(), generation, "cache set");
        Ok(())
    }

    fn load(&self, key: &str) -> NavigationResult<Option<Identities>> {
        let Some(encoded) = self.local.get(key) else {
            return Ok(None);
        };

        match CachedIdentities::decode(&encoded) {
            Ok(cached) => {
                debug!(key = %key, "cache hit");
                Ok(Some(cached.identities))
            }
            Err(e) => {
                warn!(error = %e, key = %key, "failed to decode cached identities");
                Err(e.into())
            }
        }
    }

    fn invalidate(&self, key: &str) -> NavigationResult<()> {
        self.local.invalidate(key);
        debug!(key = %key, "cache invalidated");
        Ok(())
    }
}

impl std::fmt::Debug for MokaTagCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaTagCache").finish()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of cached identity sets.
    pub entry_count: u64,

    /// Number of identities present in the tag index.
    pub indexed_tags: usize,
}
