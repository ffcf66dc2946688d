//! Page-based pagination types shared by resource clients and controllers.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of pages shown on each side of the current page in the
/// navigation window (window holds at most 5 entries).
const PAGE_WINDOW_RADIUS: i64 = 2;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction. Sorting the same column twice flips it.
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Wire representation used in `sortOrder` query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pagination metadata as reported by the server.
///
/// `total_pages` is authoritative; the client never recomputes it from
/// item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_pages: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<i64>,
}

/// A bounded slice of a resource collection plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Page numbers for navigation: a window of at most five entries centered
/// on `current`, clamped to `[1, total_pages]`.
///
/// Returns an empty range when `total_pages` is not positive (e.g. no
/// metadata has been loaded yet).
pub fn page_window(current: i64, total_pages: i64) -> RangeInclusive<i64> {
    if total_pages <= 0 {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }

    let current = current.clamp(1, total_pages);
    let start = (current - PAGE_WINDOW_RADIUS).max(1);
    let end = (current + PAGE_WINDOW_RADIUS).min(total_pages);
    start..=end
}
