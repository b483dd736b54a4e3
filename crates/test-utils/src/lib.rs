//! Catalog navigation test utilities.
//!
//! Builders for category fixtures and small helpers for asserting on
//! navigation trees.

use catalog_navigation::models::category::default_identity;
use catalog_navigation::{Category, CategoryId, Identities, InMemoryCategoryStore, NavigationItem};

/// Create a test category with default values: active, visible on both
/// channels, no children, identity `cat_c_<id>`.
pub fn test_category(id: CategoryId, name: &str) -> TestCategory {
    TestCategory {
        id,
        name: name.to_string(),
        url_key: None,
        position: 0,
        is_active: true,
        include_in_menu: true,
        include_in_mobile_navigation: true,
        children: Vec::new(),
        identities: vec![default_identity(id)],
    }
}

/// A category builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestCategory {
    pub id: CategoryId,
    pub name: String,
    pub url_key: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub include_in_menu: bool,
    pub include_in_mobile_navigation: bool,
    pub children: Vec<CategoryId>,
    pub identities: Vec<String>,
}

impl TestCategory {
    /// Set the child ids.
    pub fn with_children(mut self, children: &[CategoryId]) -> Self {
        self.children = children.to_vec();
        self
    }

    /// Replace the identities.
    pub fn with_identities(mut self, identities: &[&str]) -> Self {
        self.identities = identities.iter().map(|i| i.to_string()).collect();
        self
    }

    /// Set the URL key.
    pub fn with_url_key(mut self, url_key: &str) -> Self {
        self.url_key = Some(url_key.to_string());
        self
    }

    /// Set the sort position.
    pub fn at_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Hide from the desktop menu.
    pub fn hidden_on_desktop(mut self) -> Self {
        self.include_in_menu = false;
        self
    }

    /// Hide from the mobile navigation.
    pub fn hidden_on_mobile(mut self) -> Self {
        self.include_in_mobile_navigation = false;
        self
    }

    /// Hide on both channels.
    pub fn hidden(self) -> Self {
        self.hidden_on_desktop().hidden_on_mobile()
    }

    /// Set as inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Convert to a category.
    pub fn build(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            url_key: self.url_key,
            position: self.position,
            is_active: self.is_active,
            include_in_menu: self.include_in_menu,
            include_in_mobile_navigation: self.include_in_mobile_navigation,
            children: self.children,
            identities: self.identities,
        }
    }
}

impl From<TestCategory> for Category {
    fn from(value: TestCategory) -> Self {
        value.build()
    }
}

/// Create an in-memory store from test categories.
pub fn test_store(categories: impl IntoIterator<Item = TestCategory>) -> InMemoryCategoryStore {
    categories.into_iter().map(TestCategory::build).collect()
}

/// Build an identity set from string slices.
pub fn identities(tags: &[&str]) -> Identities {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Category ids of a navigation forest in depth-first preorder.
pub fn forest_ids(items: &[NavigationItem]) -> Vec<CategoryId> {
    items.iter().flat_map(NavigationItem::ids).collect()
}

/// Identities of the categories present in a navigation forest, looked up
/// in `store`.
pub fn forest_identities(
    items: &[NavigationItem],
    store: &InMemoryCategoryStore,
) -> Identities {
    use catalog_navigation::CategoryStore;

    forest_ids(items)
        .into_iter()
        .filter_map(|id| store.get(id).ok())
        .flat_map(|category| category.identities)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults() {
        let category = test_category(5, "Shoes").build();
        assert!(category.is_active);
        assert!(category.include_in_menu);
        assert!(category.include_in_mobile_navigation);
        assert_eq!(category.identities, vec!["cat_c_5".to_string()]);
    }

    #[test]
    fn hidden_clears_both_flags() {
        let category = test_category(5, "Shoes").hidden().build();
        assert!(!category.include_in_menu);
        assert!(!category.include_in_mobile_navigation);
    }

    #[test]
    fn converts_into_category() {
        let category = Category::from(
            test_category(8, "Bags")
                .with_url_key("bags")
                .at_position(4)
                .with_children(&[9]),
        );
        assert_eq!(category.url_key.as_deref(), Some("bags"));
        assert_eq!(category.position, 4);
        assert_eq!(category.children, vec![9]);
    }

    #[test]
    fn test_store_contains_every_category() {
        let store = test_store([test_category(1, "A"), test_category(2, "B")]);
        assert_eq!(store.len(), 2);
    }
}
