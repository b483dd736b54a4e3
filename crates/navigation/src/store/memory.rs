//! In-process category store backed by DashMap.

use dashmap::DashMap;
use tracing::debug;

use super::CategoryStore;
use crate::error::{NavigationError, NavigationResult};
use crate::models::{Category, CategoryId};

/// Category store holding every category in memory.
///
/// Categories can be inserted or replaced through a shared reference, so a
/// store may be updated while builders hold it.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    categories: DashMap<CategoryId, Category>,
}

impl InMemoryCategoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category, returning the previous version.
    pub fn insert(&self, category: Category) -> Option<Category> {
        self.categories.insert(category.id, category)
    }

    /// Remove a category.
    ///
    /// Parents still referencing it will fail child lookups with `NotFound`.
    pub fn remove(&self, id: CategoryId) -> Option<Category> {
        self.categories.remove(&id).map(|(_, category)| category)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.categories.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<Category> for InMemoryCategoryStore {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let store = Self::new();
        for category in iter {
            store.insert(category);
        }
        store
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn get(&self, id: CategoryId) -> NavigationResult<Category> {
        self.categories
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(NavigationError::NotFound(id))
    }

    fn children(&self, category: &Category) -> NavigationResult<Vec<Category>> {
        let mut children = Vec::with_capacity(category.children.len());
        for &child_id in &category.children {
            let child = self.get(child_id)?;
            if !child.is_active {
                debug!(category = child_id, parent = category.id, "skipping inactive child");
                continue;
            }
            children.push(child);
        }
        Ok(children)
    }
}
