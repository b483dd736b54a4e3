//! Catalog and navigation models.

pub mod category;
pub mod navigation_item;
pub mod navigation_type;

pub use category::{Category, CategoryId, Identities};
pub use navigation_item::NavigationItem;
pub use navigation_type::NavigationType;
