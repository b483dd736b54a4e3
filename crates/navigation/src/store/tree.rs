//! Category tree files.
//!
//! A tree file lists every category once, with children referenced by id:
//!
//! ```yaml
//! categories:
//!   - id: 2
//!     name: Default Category
//!     children: [3, 4]
//!   - id: 3
//!     name: Women
//!     include_in_mobile_navigation: false
//!   - id: 4
//!     name: Men
//!     identities: [cat_c_4, cat_c_p_4]
//! ```
//!
//! YAML (`.yaml`, `.yml`) and JSON (`.json`) are accepted. Categories without
//! identities get the default `cat_c_<id>` tag.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::InMemoryCategoryStore;
use crate::error::{NavigationError, NavigationResult};
use crate::models::Category;
use crate::models::category::default_identity;

const INLINE_SOURCE: &str = "<inline>";

/// Parsed contents of a category tree file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTree {
    pub categories: Vec<Category>,
}

impl CategoryTree {
    /// Parse a YAML tree.
    pub fn from_yaml_str(source: &str) -> NavigationResult<Self> {
        parse_yaml(source, INLINE_SOURCE)
    }

    /// Parse a JSON tree.
    pub fn from_json_str(source: &str) -> NavigationResult<Self> {
        parse_json(source, INLINE_SOURCE)
    }

    /// Read a tree file, choosing the format by extension.
    pub fn load(path: &Path) -> NavigationResult<Self> {
        let shown = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| NavigationError::TreeFile {
            path: shown.clone(),
            details: e.to_string(),
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let tree = match extension.as_deref() {
            Some("yaml" | "yml") => parse_yaml(&source, &shown)?,
            Some("json") => parse_json(&source, &shown)?,
            _ => {
                return Err(NavigationError::TreeFile {
                    path: shown,
                    details: "expected a .yaml, .yml or .json file".to_string(),
                });
            }
        };

        debug!(path = %shown, categories = tree.categories.len(), "loaded category tree");
        Ok(tree)
    }

    /// Build a store from the tree.
    ///
    /// Rejects duplicate ids and assigns the default identity to categories
    /// that declare none.
    pub fn into_store(self) -> NavigationResult<InMemoryCategoryStore> {
        let mut seen = HashSet::with_capacity(self.categories.len());
        let store = InMemoryCategoryStore::new();

        for mut category in self.categories {
            if !seen.insert(category.id) {
                return Err(NavigationError::DuplicateCategory(category.id));
            }
            if category.identities.is_empty() {
                category.identities.push(default_identity(category.id));
            }
            store.insert(category);
        }

        Ok(store)
    }
}

fn parse_yaml(source: &str, path: &str) -> NavigationResult<CategoryTree> {
    serde_yml::from_str(source).map_err(|e| NavigationError::TreeFile {
        path: path.to_string(),
        details: e.to_string(),
    })
}

fn parse_json(source: &str, path: &str) -> NavigationResult<CategoryTree> {
    serde_json::from_str(source).map_err(|e| NavigationError::TreeFile {
        path: path.to_string(),
        details: e.to_string(),
    })
}
