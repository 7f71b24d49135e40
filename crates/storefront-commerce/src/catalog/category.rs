//! Category selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the pass-through category choice.
pub const ALL_CATEGORIES: &str = "All";

/// Which category a listing is restricted to.
///
/// Converts to and from its label, so `"All"` round-trips to
/// [`CategoryFilter::All`] and anything else is an exact category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only products whose category equals this name (case-sensitive).
    Named(String),
}

impl CategoryFilter {
    /// Create a filter from a label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label)
        }
    }

    /// Check if this filter lets everything through.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check a product category against this filter.
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    /// Get the label shown in a category picker.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert_eq!(CategoryFilter::new("All"), CategoryFilter::All);
        assert!(CategoryFilter::All.accepts("Fashion"));
        // The sentinel is exact; lower-case "all" names a category.
        assert_eq!(
            CategoryFilter::new("all"),
            CategoryFilter::Named("all".to_string())
        );
    }

    #[test]
    fn test_named_is_case_sensitive() {
        let filter = CategoryFilter::new("Home & Kitchen");
        assert!(filter.accepts("Home & Kitchen"));
        assert!(!filter.accepts("home & kitchen"));
        assert!(!filter.accepts("Electronics"));
    }

    #[test]
    fn test_label_round_trip() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let filter: CategoryFilter = serde_json::from_str("\"Fashion\"").unwrap();
        assert_eq!(filter.label(), "Fashion");
    }
}
