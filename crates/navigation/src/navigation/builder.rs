//! Navigation builder.

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::cache::{TagCache, identity_key};
use crate::config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_NAMESPACE};
use crate::error::{NavigationError, NavigationResult};
use crate::models::{Category, CategoryId, Identities, NavigationItem, NavigationType};
use crate::store::CategoryStore;

/// Result of a traversal: the menu and the identities it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    /// Visible top-level items in store order.
    pub items: Vec<NavigationItem>,

    /// Identities of every category present in `items`.
    pub identities: Identities,
}

/// Builds navigation menus from a [`CategoryStore`] and records their
/// identities in a [`TagCache`].
pub struct NavigationBuilder<S, C> {
    store: S,
    cache: C,
    namespace: String,
    max_depth: usize,

    /// Identities of the last successful build, the fallback when the cache
    /// has nothing for a key.
    last_identities: RwLock<Identities>,
}

impl<S: CategoryStore, C: TagCache> NavigationBuilder<S, C> {
    /// Create a builder with the default namespace and depth limit.
    pub fn new(store: S, cache: C) -> Self {
        Self {
            store,
            cache,
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            last_identities: RwLock::new(Identities::new()),
        }
    }

    /// Create a builder using the namespace and depth limit from `config`.
    pub fn from_config(store: S, cache: C, config: &Config) -> Self {
        Self::new(store, cache)
            .with_namespace(config.cache_namespace.clone())
            .with_max_depth(config.max_depth)
    }

    /// Set the cache key namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set how many levels below the root a build may descend.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Cache key the identities of `(root, navigation_type)` are stored under.
    pub fn cache_key(&self, root: CategoryId, navigation_type: NavigationType) -> String {
        identity_key(&self.namespace, root, navigation_type)
    }

    /// Build the navigation below `root` and cache its identities.
    ///
    /// The cached identity set for this root and channel is overwritten only
    /// once the whole tree has been walked. Any store failure aborts the
    /// build without touching the cache.
    pub fn build(
        &self,
        root: CategoryId,
        navigation_type: NavigationType,
    ) -> NavigationResult<Vec<NavigationItem>> {
        let Navigation { items, identities } = self.traverse(root, navigation_type)?;

        let key = self.cache_key(root, navigation_type);
        self.cache.save(&key, &identities)?;

        info!(
            root,
            navigation_type = %navigation_type,
            items = items.iter().map(NavigationItem::count).sum::<usize>(),
            identities = identities.len(),
            "navigation built"
        );

        *self.last_identities.write() = identities;
        Ok(items)
    }

    /// Walk the tree below `root` without touching the cache.
    pub fn traverse(
        &self,
        root: CategoryId,
        navigation_type: NavigationType,
    ) -> NavigationResult<Navigation> {
        debug!(root, navigation_type = %navigation_type, "building navigation");

        let root_category = self.store.get(root)?;
        let mut navigation = Navigation::default();

        for category in self.store.children(&root_category)? {
            if !navigation_type.is_visible(&category) {
                continue;
            }
            let item = self.build_subtree(
                root,
                &category,
                navigation_type,
                1,
                &mut navigation.identities,
            )?;
            navigation.items.push(item);
        }

        Ok(navigation)
    }

    fn build_subtree(
        &self,
        root: CategoryId,
        category: &Category,
        navigation_type: NavigationType,
        depth: usize,
        identities: &mut Identities,
    ) -> NavigationResult<NavigationItem> {
        if depth > self.max_depth {
            return Err(NavigationError::DepthExceeded {
                root,
                max_depth: self.max_depth,
            });
        }

        let mut item = NavigationItem::from_category(category);
        identities.extend(category.identities.iter().cloned());

        if !self.store.has_children(category) {
            return Ok(item);
        }

        let mut sub_items = Vec::new();
        for child in self.store.children(category)? {
            if !navigation_type.is_visible(&child) {
                continue;
            }
            sub_items.push(self.build_subtree(
                root,
                &child,
                navigation_type,
                depth + 1,
                identities,
            )?);
        }

        item.set_sub_items(sub_items);
        Ok(item)
    }

    /// Identities of the navigation for `(root, navigation_type)`.
    ///
    /// Reads the cache; when nothing is cached for the key, returns the
    /// identities of this builder's last successful build, which is empty
    /// for a fresh builder and may belong to a different root.
    pub fn identities(
        &self,
        root: CategoryId,
        navigation_type: NavigationType,
    ) -> NavigationResult<Identities> {
        let key = self.cache_key(root, navigation_type);
        if let Some(cached) = self.cache.load(&key)? {
            return Ok(cached);
        }

        debug!(key = %key, "identities not cached, using last build");
        Ok(self.last_identities.read().clone())
    }

    /// Drop the cached identities for `(root, navigation_type)`.
    pub fn invalidate(
        &self,
        root: CategoryId,
        navigation_type: NavigationType,
    ) -> NavigationResult<()> {
        self.cache.invalidate(&self.cache_key(root, navigation_type))
    }
}

impl<S, C> std::fmt::Debug for NavigationBuilder<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationBuilder")
            .field("namespace", &self.namespace)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
