//! Identity cache used by the navigation builder.
//!
//! Each build stores the identities it touched under a key derived from the
//! builder namespace, root category and navigation type. Later renders ask
//! for those identities without rebuilding the tree.

mod local;

use std::sync::Arc;

use crate::error::NavigationResult;
use crate::models::{CategoryId, Identities, NavigationType};

pub use local::{CacheStats, DEFAULT_MAX_CAPACITY, DEFAULT_TTL_SECS, MokaTagCache};

/// Key-value store of identity sets.
pub trait TagCache {
    /// Store `identities` under `key`, replacing any previous value.
    fn save(&self, key: &str, identities: &Identities) -> NavigationResult<()>;

    /// Load the identities stored under `key`, if any.
    fn load(&self, key: &str) -> NavigationResult<Option<Identities>>;

    /// Drop the value stored under `key`.
    fn invalidate(&self, key: &str) -> NavigationResult<()>;
}

impl<T: TagCache + ?Sized> TagCache for &T {
    fn save(&self, key: &str, identities: &Identities) -> NavigationResult<()> {
        (**self).save(key, identities)
    }

    fn load(&self, key: &str) -> NavigationResult<Option<Identities>> {
        (**self).load(key)
    }

    fn invalidate(&self, key: &str) -> NavigationResult<()> {
        (**self).invalidate(key)
    }
}

impl<T: TagCache + ?Sized> TagCache for Arc<T> {
    fn save(&self, key: &str, identities: &Identities) -> NavigationResult<()> {
        (**self).save(key, identities)
    }

    fn load(&self, key: &str) -> NavigationResult<Option<Identities>> {
        (**self).load(key)
    }

    fn invalidate(&self, key: &str) -> NavigationResult<()> {
        (**self).invalidate(key)
    }
}

/// Cache key for one navigation: `{namespace}/{root}/{navigation_type}`.
pub fn identity_key(namespace: &str, root: CategoryId, navigation_type: NavigationType) -> String {
    format!("{namespace}/{root}/{navigation_type}")
}
