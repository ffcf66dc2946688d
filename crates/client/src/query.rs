//! Wire-level list query parameters.

use shared::pagination::SortOrder;

/// Default page size for list screens.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Entity-specific filter parameters appended to a list request.
pub trait QueryFilter {
    fn append_params(&self, params: &mut Vec<(String, String)>);
}

/// No extra filters.
impl QueryFilter for () {
    fn append_params(&self, _params: &mut Vec<(String, String)>) {}
}

/// Full filter state for one paginated list request.
///
/// `page` is 1-based. Sort parameters are only sent when a sort field is
/// selected; an empty search term is not sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    pub page: i64,
    pub limit: i64,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub search: Option<String>,
    pub filter: F,
}

impl<F: Default> Default for ListQuery<F> {
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

impl<F: QueryFilter> ListQuery<F> {
    /// Builds the query-string parameters for a list request.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy".to_string(), sort_by.clone()));
            params.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        }

        if let Some(search) = &self.search {
            if !search.is_empty() {
                params.push(("search".to_string(), search.clone()));
            }
        }

        self.filter.append_params(&mut params);
        params
    }
}
