//! Navigation item: one visible category in a built menu.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryId};

/// A node of the navigation tree.
///
/// Holds a copy of the display fields of its source category and the
/// visible sub-items in store order. Created fresh by every build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Source category id.
    pub id: CategoryId,

    /// Display name.
    pub name: String,

    /// URL key of the category page.
    pub url_key: Option<String>,

    /// Sort position copied from the category.
    pub position: i32,

    /// Visible child items.
    pub sub_items: Vec<NavigationItem>,
}

impl NavigationItem {
    /// Create an item without sub-items from a category.
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            url_key: category.url_key.clone(),
            position: category.position,
            sub_items: Vec::new(),
        }
    }

    /// Replace the sub-items.
    pub fn set_sub_items(&mut self, sub_items: Vec<NavigationItem>) {
        self.sub_items = sub_items;
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Number of items in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.sub_items.iter().map(Self::count).sum::<usize>()
    }

    /// Category ids of this subtree in depth-first preorder.
    pub fn ids(&self) -> Vec<CategoryId> {
        let mut ids = Vec::with_capacity(self.count());
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<CategoryId>) {
        ids.push(self.id);
        for item in &self.sub_items {
            item.collect_ids(ids);
        }
    }

    /// Find an item by category id in this subtree.
    pub fn find(&self, id: CategoryId) -> Option<&NavigationItem> {
        if self.id == id {
            return Some(self);
        }
        self.sub_items.iter().find_map(|item| item.find(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample() -> NavigationItem {
        let mut root = NavigationItem::from_category(&Category::new(10, "Women"));
        let mut tops = NavigationItem::from_category(&Category::new(11, "Tops"));
        tops.set_sub_items(vec![NavigationItem::from_category(&Category::new(
            12, "Jackets",
        ))]);
        root.set_sub_items(vec![
            tops,
            NavigationItem::from_category(&Category::new(13, "Bottoms")),
        ]);
        root
    }

    #[test]
    fn from_category_copies_display_fields() {
        let mut category = Category::new(5, "Gear");
        category.url_key = Some("gear".to_string());
        category.position = 3;

        let item = NavigationItem::from_category(&category);
        assert_eq!(item.id, 5);
        assert_eq!(item.name, "Gear");
        assert_eq!(item.url_key.as_deref(), Some("gear"));
        assert_eq!(item.position, 3);
        assert!(!item.has_sub_items());
    }

    #[test]
    fn count_and_preorder_ids() {
        let root = sample();
        assert_eq!(root.count(), 4);
        assert_eq!(root.ids(), vec![10, 11, 12, 13]);
    }

    #[test]
    fn find_descendant() {
        let root = sample();
        assert_eq!(root.find(12).map(|i| i.name.as_str()), Some("Jackets"));
        assert!(root.find(99).is_none());
    }
}
