//! Query spec builder.

use crate::catalog::CategoryFilter;
use crate::error::CommerceError;
use crate::search::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort options for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by rating, high to low.
    RatingDesc,
}

impl SortKey {
    /// Every sort key, in picker order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ];

    /// Machine-friendly name (e.g., "price-asc").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }

    /// Label shown in a sort picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Rating: High to Low",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    /// Accepts the machine name (with `-` or `_`) or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        SortKey::ALL
            .into_iter()
            .find(|key| {
                key.as_str() == normalized || key.display_name().to_lowercase() == normalized
            })
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

/// One filter/sort request over the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuerySpec {
    /// Category restriction.
    pub category: CategoryFilter,
    /// Free-text search; empty matches everything.
    pub search_text: String,
    /// Sort option.
    pub sort: SortKey,
}

impl QuerySpec {
    /// Create a spec that returns the whole catalog in relevance order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category restriction.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Filters implied by this spec, in pipeline order.
    ///
    /// Pass-through stages ("All", empty search) contribute nothing.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let CategoryFilter::Named(name) = &self.category {
            filters.push(Filter::category(name.clone()));
        }
        if !self.search_text.is_empty() {
            filters.push(Filter::text(&self.search_text));
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let spec = QuerySpec::new()
            .with_category("Fashion")
            .with_search("shoes")
            .with_sort(SortKey::PriceDesc);

        assert_eq!(spec.category, CategoryFilter::Named("Fashion".to_string()));
        assert_eq!(spec.search_text, "shoes");
        assert_eq!(spec.sort, SortKey::PriceDesc);
        assert_eq!(spec.filters().len(), 2);
    }

    #[test]
    fn test_default_spec_has_no_filters() {
        let spec = QuerySpec::new().with_category("All");
        assert!(spec.filters().is_empty());
        assert_eq!(spec.sort, SortKey::Relevance);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price-asc".parse::<SortKey>(), Ok(SortKey::PriceAsc));
        assert_eq!("PRICE_DESC".parse::<SortKey>(), Ok(SortKey::PriceDesc));
        assert_eq!(
            "Rating: High to Low".parse::<SortKey>(),
            Ok(SortKey::RatingDesc)
        );
        assert_eq!(
            "newest".parse::<SortKey>(),
            Err(CommerceError::UnknownSortKey("newest".to_string()))
        );
    }

    #[test]
    fn test_sort_key_serde() {
        let json = serde_json::to_string(&SortKey::RatingDesc).unwrap();
        assert_eq!(json, "\"rating-desc\"");
    }
}
