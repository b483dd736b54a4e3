//! Navigation error types.

use thiserror::Error;

use crate::models::CategoryId;

/// Errors raised while building or caching navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The category store has no category with this id.
    #[error("category {0} not found")]
    NotFound(CategoryId),

    /// A navigation type string other than "desktop" or "mobile".
    #[error("unknown navigation type '{0}', expected 'desktop' or 'mobile'")]
    UnknownNavigationType(String),

    /// The category tree is deeper than the configured limit.
    #[error("category tree under root {root} exceeds maximum depth of {max_depth}")]
    DepthExceeded { root: CategoryId, max_depth: usize },

    /// A cached identity set could not be encoded or decoded.
    #[error("failed to encode or decode cached identities")]
    CacheCodec(#[from] serde_json::Error),

    /// A category tree file could not be read or parsed.
    #[error("category tree file '{path}': {details}")]
    TreeFile { path: String, details: String },

    /// The same category id was declared twice in one tree.
    #[error("category {0} declared more than once")]
    DuplicateCategory(CategoryId),
}

/// Result type alias using NavigationError.
pub type NavigationResult<T> = Result<T, NavigationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            NavigationError::NotFound(42).to_string(),
            "category 42 not found"
        );
        assert_eq!(
            NavigationError::UnknownNavigationType("tablet".to_string()).to_string(),
            "unknown navigation type 'tablet', expected 'desktop' or 'mobile'"
        );
        assert_eq!(
            NavigationError::DepthExceeded {
                root: 2,
                max_depth: 8
            }
            .to_string(),
            "category tree under root 2 exceeds maximum depth of 8"
        );
    }
}
