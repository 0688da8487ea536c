//! Query parameters for the filtered recipe listing.

use serde::{Deserialize, Serialize};

use super::recipe::{Category, DifficultyLevel};

/// Ordered query string pairs, forwarded to the service verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair. Repeated keys are kept.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.push((key.into(), value.to_string()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

/// Sort direction understood by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Typed builder for the well-known filter parameters.
///
/// Unset fields are left out of the query so the service applies its own
/// defaults (page 0, size 10, newest first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    pub category: Option<Category>,
    pub cheap: Option<bool>,
    pub quick: Option<bool>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort_by: Option<String>,
    pub direction: Option<SortDirection>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn with_cheap(mut self, cheap: bool) -> Self {
        self.cheap = Some(cheap);
        self
    }

    #[must_use]
    pub const fn with_quick(mut self, quick: bool) -> Self {
        self.quick = Some(quick);
        self
    }

    #[must_use]
    pub const fn with_difficulty(mut self, level: DifficultyLevel) -> Self {
        self.difficulty_level = Some(level);
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by.into());
        self.direction = Some(direction);
        self
    }

    /// Convert into query pairs in a stable order.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(category) = self.category {
            params.push("category", category.as_api_str());
        }
        if let Some(cheap) = self.cheap {
            params.push("cheap", cheap);
        }
        if let Some(quick) = self.quick {
            params.push("quick", quick);
        }
        if let Some(level) = self.difficulty_level {
            params.push("difficultyLevel", level.as_api_str());
        }
        if let Some(page) = self.page {
            params.push("page", page);
        }
        if let Some(size) = self.size {
            params.push("size", size);
        }
        if let Some(ref sort_by) = self.sort_by {
            params.push("sortBy", sort_by);
        }
        if let Some(direction) = self.direction {
            params.push("direction", direction.as_api_str());
        }
        params
    }
}

impl From<&RecipeFilter> for QueryParams {
    fn from(filter: &RecipeFilter) -> Self {
        filter.to_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_produces_no_params() {
        assert!(RecipeFilter::new().to_query().is_empty());
    }

    #[test]
    fn test_filter_to_query_order_and_values() {
        let params = RecipeFilter::new()
            .with_category(Category::Pasta)
            .with_quick(true)
            .with_difficulty(DifficultyLevel::Medium)
            .with_page(2, 20)
            .with_sort("averageRating", SortDirection::Asc)
            .to_query();

        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("category", "NUDELN"),
                ("quick", "true"),
                ("difficultyLevel", "MITTEL"),
                ("page", "2"),
                ("size", "20"),
                ("sortBy", "averageRating"),
                ("direction", "ASC"),
            ]
        );
    }

    #[test]
    fn test_query_params_keep_arbitrary_pairs() {
        let params = RecipeFilter::new()
            .with_cheap(false)
            .to_query()
            .with("custom", "x y")
            .with("custom", 2);
        assert_eq!(params.len(), 3);
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs[1], ("custom", "x y"));
        assert_eq!(pairs[2], ("custom", "2"));
    }

    #[test]
    fn test_query_params_from_iterator() {
        let params: QueryParams = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(params.iter().next(), Some(("a", "1")));
    }
}
