//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cache::{DEFAULT_MAX_CAPACITY, DEFAULT_TTL_SECS};

/// Default cache key namespace, named after the builder type.
pub const DEFAULT_NAMESPACE: &str = "catalog_navigation::navigation::NavigationBuilder";

/// Default maximum category tree depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Navigation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of every identity cache key.
    pub cache_namespace: String,

    /// Lifetime of cached identity sets in seconds (default: 3600).
    pub cache_ttl_secs: u64,

    /// Maximum number of cached identity sets (default: 10000).
    pub cache_max_capacity: u64,

    /// Deepest category level a build will descend to (default: 64).
    pub max_depth: usize,

    /// Category tree file to load when none is given on the command line.
    pub category_tree_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_namespace: DEFAULT_NAMESPACE.to_string(),
            cache_ttl_secs: DEFAULT_TTL_SECS,
            cache_max_capacity: DEFAULT_MAX_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
            category_tree_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let cache_namespace = lookup("NAVIGATION_CACHE_NAMESPACE")
            .filter(|ns| !ns.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let cache_ttl_secs = lookup("NAVIGATION_CACHE_TTL_SECS")
            .unwrap_or_else(|| DEFAULT_TTL_SECS.to_string())
            .parse()
            .context("NAVIGATION_CACHE_TTL_SECS must be a valid u64")?;

        let cache_max_capacity = lookup("NAVIGATION_CACHE_MAX_CAPACITY")
            .unwrap_or_else(|| DEFAULT_MAX_CAPACITY.to_string())
            .parse()
            .context("NAVIGATION_CACHE_MAX_CAPACITY must be a valid u64")?;

        let max_depth = lookup("NAVIGATION_MAX_DEPTH")
            .unwrap_or_else(|| DEFAULT_MAX_DEPTH.to_string())
            .parse()
            .context("NAVIGATION_MAX_DEPTH must be a valid usize")?;

        let category_tree_path = lookup("CATEGORY_TREE_PATH").map(PathBuf::from);

        Ok(Self {
            cache_namespace,
            cache_ttl_secs,
            cache_max_capacity,
            max_depth,
            category_tree_path,
        })
    }
}
