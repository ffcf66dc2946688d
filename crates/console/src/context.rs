//! Per-screen filter context.

use client::{ListQuery, DEFAULT_PAGE_SIZE};
use shared::pagination::SortOrder;

/// Initial filter state for one list screen.
///
/// Each screen receives its own context at construction instead of
/// registering a "current filter type" on a shared service, so two screens
/// mounted at the same time cannot clobber each other's filters. After
/// construction the controller owns the state; the context is never
/// consulted again.
#[derive(Debug, Clone, PartialEq)]
pub struct ListContext<F> {
    pub page: i64,
    pub limit: i64,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub search: Option<String>,
    pub filter: F,
}

impl<F: Default> Default for ListContext<F> {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: SortOrder::Asc,
            search: None,
            filter: F::default(),
        }
    }
}

impl<F> ListContext<F> {
    /// A fresh context with entity-specific filters preset.
    pub fn with_filter(filter: F) -> Self
    where
        F: Default,
    {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub(crate) fn into_query(self) -> ListQuery<F> {
        ListQuery {
            page: self.page,
            limit: self.limit,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            search: self.search,
            filter: self.filter,
        }
    }
}
