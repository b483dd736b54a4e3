//! Navigation channel selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::NavigationError;

/// Which channel a navigation is built for.
///
/// Selects the visibility flag consulted for each category and the cache
/// key the resulting identities are stored under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationType {
    #[default]
    Desktop,
    Mobile,
}

impl NavigationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationType::Desktop => "desktop",
            NavigationType::Mobile => "mobile",
        }
    }

    /// Whether `category` is shown on this channel.
    pub fn is_visible(&self, category: &Category) -> bool {
        match self {
            NavigationType::Desktop => category.include_in_menu,
            NavigationType::Mobile => category.include_in_mobile_navigation,
        }
    }
}

impl fmt::Display for NavigationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationType {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(NavigationType::Desktop),
            "mobile" => Ok(NavigationType::Mobile),
            other => Err(NavigationError::UnknownNavigationType(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_types() {
        assert_eq!(
            "desktop".parse::<NavigationType>().unwrap(),
            NavigationType::Desktop
        );
        assert_eq!(
            "mobile".parse::<NavigationType>().unwrap(),
            NavigationType::Mobile
        );
    }

    #[test]
    fn unknown_type_fails_fast() {
        let err = "tablet".parse::<NavigationType>().unwrap_err();
        assert!(matches!(err, NavigationError::UnknownNavigationType(t) if t == "tablet"));
        assert!("Desktop".parse::<NavigationType>().is_err());
    }

    #[test]
    fn default_is_desktop() {
        assert_eq!(NavigationType::default(), NavigationType::Desktop);
        assert_eq!(NavigationType::default().to_string(), "desktop");
    }

    #[test]
    fn visibility_flag_per_channel() {
        let mut category = Category::new(4, "Sale");
        category.include_in_menu = false;
        assert!(!NavigationType::Desktop.is_visible(&category));
        assert!(NavigationType::Mobile.is_visible(&category));

        category.include_in_menu = true;
        category.include_in_mobile_navigation = false;
        assert!(NavigationType::Desktop.is_visible(&category));
        assert!(!NavigationType::Mobile.is_visible(&category));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&NavigationType::Mobile).unwrap(),
            "\"mobile\""
        );
    }
}
