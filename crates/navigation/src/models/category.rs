//! Category model as seen by the navigation builder.
//!
//! Categories are owned by a [`CategoryStore`](crate::store::CategoryStore);
//! the builder only reads them. Children are referenced by id so a store can
//! load them lazily and fully populated.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Category identifier.
pub type CategoryId = u64;

/// Deduplicated set of cache invalidation identities.
pub type Identities = BTreeSet<String>;

/// Prefix of the conventional per-category invalidation tag.
pub const CATEGORY_CACHE_TAG: &str = "cat_c";

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,

    /// Display name.
    pub name: String,

    /// URL key used to link to the category page.
    #[serde(default)]
    pub url_key: Option<String>,

    /// Sort position among siblings.
    #[serde(default)]
    pub position: i32,

    /// Inactive categories are never returned as children.
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Whether the category appears in the desktop menu.
    #[serde(default = "default_true")]
    pub include_in_menu: bool,

    /// Whether the category appears in the mobile navigation.
    #[serde(default = "default_true")]
    pub include_in_mobile_navigation: bool,

    /// Child category ids in display order.
    #[serde(default)]
    pub children: Vec<CategoryId>,

    /// Cache invalidation identities for this category.
    #[serde(default)]
    pub identities: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Category {
    /// Create an active category, visible on both channels, with no children
    /// and the default identity.
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url_key: None,
            position: 0,
            is_active: true,
            include_in_menu: true,
            include_in_mobile_navigation: true,
            children: Vec::new(),
            identities: vec![default_identity(id)],
        }
    }

    /// Structural check: does this category declare any children at all.
    ///
    /// Independent of whether any child is visible.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The conventional invalidation identity for a category, `cat_c_<id>`.
pub fn default_identity(id: CategoryId) -> String {
    format!("{CATEGORY_CACHE_TAG}_{id}")
}
