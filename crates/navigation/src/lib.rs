//! Catalog navigation library.
//!
//! Builds desktop and mobile navigation menus from a category tree and
//! records the cache invalidation identities touched by each build.
//! The `catnav` binary wraps this library for use from the command line.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod store;

pub use cache::{MokaTagCache, TagCache};
pub use config::Config;
pub use error::{NavigationError, NavigationResult};
pub use models::{Category, CategoryId, Identities, NavigationItem, NavigationType};
pub use navigation::NavigationBuilder;
pub use store::{CategoryStore, CategoryTree, InMemoryCategoryStore};
