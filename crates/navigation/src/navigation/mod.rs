//! Navigation building.
//!
//! A build walks the category tree depth-first from a root, keeps only the
//! categories visible on the requested channel, and records the identities
//! of every category that made it into the menu.

mod builder;

pub use builder::{Navigation, NavigationBuilder};
