use crate::error::FetchError;
use crate::fetchers::RecipeApi;
use crate::model::RecipeSummary;
use log::info;

/// The most recent search and its results
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

impl Search {
    /// Run `query` against the API.
    ///
    /// A new `Search` only exists once the fetch succeeded, so a failed
    /// search never leaves a half-filled model behind.
    pub async fn perform_search(api: &dyn RecipeApi, query: &str) -> Result<Self, FetchError> {
        let results = api.search(query).await?;
        info!("Search {:?} returned {} results", query, results.len());
        Ok(Search {
            query: query.to_string(),
            results,
        })
    }

    pub fn pagination(&self, page: usize, page_size: usize) -> Pagination {
        Pagination::new(page, self.results.len(), page_size)
    }
}

/// Slice `items[(page-1)*page_size .. page*page_size]`, clamped to the
/// available length. Page numbers start at 1; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Position within a paginated result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub pages: usize,
}

impl Pagination {
    pub fn new(page: usize, total: usize, page_size: usize) -> Self {
        let pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Pagination {
            page: page.max(1),
            pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1 && self.pages > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 2, 10), &items[10..20]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
    }

    #[test]
    fn test_paginate_clamps_past_end() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert_eq!(paginate(&items, 0, 2), &[1, 2]);
    }

    #[test]
    fn test_pagination_buttons() {
        let first = Pagination::new(1, 25, 10);
        assert_eq!(first.pages, 3);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let middle = Pagination::new(2, 25, 10);
        assert!(middle.has_prev());
        assert!(middle.has_next());

        let last = Pagination::new(3, 25, 10);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let single = Pagination::new(1, 4, 10);
        assert!(!single.has_prev());
        assert!(!single.has_next());
    }
}
