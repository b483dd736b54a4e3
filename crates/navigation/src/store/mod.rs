//! Category storage consumed by the navigation builder.
//!
//! The builder never owns categories; it asks a [`CategoryStore`] for the
//! root and for each visited category's children.

mod memory;
mod tree;

use std::sync::Arc;

use crate::error::NavigationResult;
use crate::models::{Category, CategoryId};

pub use memory::InMemoryCategoryStore;
pub use tree::CategoryTree;

/// Read access to the category tree.
pub trait CategoryStore {
    /// Fetch a category by id.
    ///
    /// Fails with [`NavigationError::NotFound`](crate::NavigationError::NotFound)
    /// when the id is unknown.
    fn get(&self, id: CategoryId) -> NavigationResult<Category>;

    /// Fetch the children of `category` in display order, each fully
    /// populated with display fields, visibility flags and identities.
    fn children(&self, category: &Category) -> NavigationResult<Vec<Category>>;

    /// Structural check for children; may be true when no child is visible.
    fn has_children(&self, category: &Category) -> bool {
        category.has_children()
    }
}

impl<T: CategoryStore + ?Sized> CategoryStore for &T {
    fn get(&self, id: CategoryId) -> NavigationResult<Category> {
        (**self).get(id)
    }

    fn children(&self, category: &Category) -> NavigationResult<Vec<Category>> {
        (**self).children(category)
    }

    fn has_children(&self, category: &Category) -> bool {
        (**self).has_children(category)
    }
}

impl<T: CategoryStore + ?Sized> CategoryStore for Arc<T> {
    fn get(&self, id: CategoryId) -> NavigationResult<Category> {
        (**self).get(id)
    }

    fn children(&self, category: &Category) -> NavigationResult<Vec<Category>> {
        (**self).children(category)
    }

    fn has_children(&self, category: &Category) -> bool {
        (**self).has_children(category)
    }
}
