//! Generic list controller: pagination, sorting, search and filters for
//! every list screen in the console.

use std::ops::RangeInclusive;

use client::{ClientError, ListQuery, ResourceApi};
use shared::pagination::{page_window, Page, PageMeta, SortOrder};
use tracing::{error, warn};

use crate::context::ListContext;

/// Ties a finished load back to the request that produced it.
///
/// Loads are never cancelled; instead every load gets a fresh ticket and a
/// response is applied only if its ticket is still the latest one issued.
/// An earlier request that resolves late can therefore never overwrite the
/// state of a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

/// Controller state behind one paginated list screen.
///
/// Owns the full filter state (page, size, sort, search, entity filters);
/// the view renders `items`/`pagination`/`loading`/`error` and forwards
/// user events to the `on_*` methods.
pub struct ListController<R: ResourceApi> {
    client: R,
    query: ListQuery<R::Filter>,
    items: Vec<R::Entity>,
    pagination: Option<PageMeta>,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl<R: ResourceApi> ListController<R> {
    /// Creates a controller for `client` starting from the screen's filter
    /// context. Nothing is loaded until [`load`](Self::load) is called.
    pub fn new(client: R, context: ListContext<R::Filter>) -> Self {
        Self {
            client,
            query: context.into_query(),
            items: Vec::new(),
            pagination: None,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&PageMeta> {
        self.pagination.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &ListQuery<R::Filter> {
        &self.query
    }

    pub fn resource_name(&self) -> &'static str {
        self.client.resource_name()
    }

    /// Starts a load: bumps the request sequence, raises the loading flag
    /// and clears any previous error.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        LoadTicket {
            seq: self.latest_seq,
        }
    }

    /// Applies a finished load.
    ///
    /// Responses from superseded loads are discarded: only the response
    /// matching the latest issued ticket may touch items and pagination.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Page<R::Entity>, ClientError>,
    ) {
        if ticket.seq != self.latest_seq {
            warn!(
                resource = self.client.resource_name(),
                stale_seq = ticket.seq,
                latest_seq = self.latest_seq,
                "discarding stale list response"
            );
            return;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.pagination = Some(page.pagination);
            }
            Err(err) => {
                error!(
                    resource = self.client.resource_name(),
                    error = %err,
                    "failed to load list"
                );
                self.error = Some(format!(
                    "Failed to load {} list",
                    self.client.resource_name()
                ));
            }
        }
    }

    /// Issues one list request reflecting the current filter state and
    /// applies the result.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.client.list(&self.query).await;
        self.finish_load(ticket, result);
    }

    /// Column-header click: sorting the current field again flips the
    /// direction; a new field starts ascending.
    pub fn on_sort(&mut self, field: &str) {
        match self.query.sort_by.as_deref() {
            Some(current) if current == field => {
                self.query.sort_order = self.query.sort_order.toggled();
            }
            _ => {
                self.query.sort_by = Some(field.to_string());
                self.query.sort_order = SortOrder::Asc;
            }
        }
    }

    /// Moves to another page; size, sort and search are preserved.
    pub fn on_page_change(&mut self, page: i64) {
        self.query.page = page.max(1);
    }

    /// Changes the page size; always returns to the first page.
    pub fn on_page_size_change(&mut self, limit: i64) {
        self.query.limit = limit.max(1);
        self.query.page = 1;
    }

    /// Updates the free-text search term; a changed term returns to the
    /// first page, re-submitting the same term does not.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        let term = if term.is_empty() { None } else { Some(term) };
        if term != self.query.search {
            self.query.search = term;
            self.query.page = 1;
        }
    }

    /// Replaces the entity-specific filters and returns to the first page.
    pub fn set_filter(&mut self, filter: R::Filter) {
        self.query.filter = filter;
        self.query.page = 1;
    }

    /// Page numbers for the navigation bar: a window of at most five pages
    /// around the current one, empty until pagination metadata is loaded.
    pub fn page_numbers(&self) -> RangeInclusive<i64> {
        match &self.pagination {
            Some(meta) => page_window(self.query.page, meta.total_pages),
            None => page_window(0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::pagination::PageMeta;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use uuid::Uuid;
    use validator::Validate;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: Uuid,
        label: String,
    }

    fn widget(label: &str) -> Widget {
        Widget {
            id: Uuid::new_v4(),
            label: label.to_string(),
        }
    }

    #[derive(Debug, Clone, Validate)]
    struct WidgetDraft {
        #[validate(length(min = 1))]
        #[allow(dead_code)]
        label: String,
    }

    /// In-memory stand-in for a resource client. Records every query and
    /// replays queued responses.
    struct FakeWidgets {
        list_calls: Mutex<Vec<ListQuery<()>>>,
        list_responses: Mutex<VecDeque<Result<Page<Widget>, ClientError>>>,
    }

    impl FakeWidgets {
        fn new() -> Self {
            Self {
                list_calls: Mutex::new(Vec::new()),
                list_responses: Mutex::new(VecDeque::new()),
            }
        }

        fn respond_with(self, response: Result<Page<Widget>, ClientError>) -> Self {
            self.list_responses.lock().unwrap().push_back(response);
            self
        }

        fn page(items: Vec<Widget>, total_pages: i64) -> Page<Widget> {
            Page {
                data: items,
                pagination: PageMeta {
                    total_pages,
                    current_page: Some(1),
                    total_items: None,
                },
            }
        }

        fn failure() -> ClientError {
            ClientError::Status {
                status: 500,
                message: "boom".to_string(),
            }
        }
    }

    #[async_trait]
    impl ResourceApi for FakeWidgets {
        type Entity = Widget;
        type Create = WidgetDraft;
        type Update = WidgetDraft;
        type Filter = ();

        fn resource_name(&self) -> &'static str {
            "widget"
        }

        async fn list(&self, query: &ListQuery<()>) -> Result<Page<Widget>, ClientError> {
            self.list_calls.lock().unwrap().push(query.clone());
            self.list_responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Self::page(vec![], 0)))
        }

        async fn get(&self, _id: Uuid) -> Result<Widget, ClientError> {
            unimplemented!("not used by list controller tests")
        }

        async fn create(&self, _payload: &WidgetDraft) -> Result<Widget, ClientError> {
            unimplemented!("not used by list controller tests")
        }

        async fn update(
            &self,
            _id: Uuid,
            _payload: &WidgetDraft,
        ) -> Result<Widget, ClientError> {
            unimplemented!("not used by list controller tests")
        }
    }

    fn controller(fake: FakeWidgets) -> ListController<FakeWidgets> {
        ListController::new(fake, ListContext::default())
    }

    #[tokio::test]
    async fn test_load_issues_one_request_with_current_filter_state() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![widget("a")], 3)));
        let mut list = controller(fake);

        list.on_page_change(2);
        list.on_sort("label");
        list.set_search("wid");
        // set_search resets to page 1; move again to check the issued query
        list.on_page_change(2);
        list.load().await;

        let calls = list.client.list_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page, 2);
        assert_eq!(calls[0].sort_by.as_deref(), Some("label"));
        assert_eq!(calls[0].sort_order, SortOrder::Asc);
        assert_eq!(calls[0].search.as_deref(), Some("wid"));
    }

    #[tokio::test]
    async fn test_load_success_replaces_items_and_pagination() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![widget("a"), widget("b")], 5)));
        let mut list = controller(fake);

        list.load().await;

        assert_eq!(list.items().len(), 2);
        assert_eq!(list.pagination().unwrap().total_pages, 5);
        assert!(!list.loading());
        assert!(list.error().is_none());
    }

    #[tokio::test]
    async fn test_load_does_not_disturb_filter_state() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![], 1)));
        let mut list = controller(fake);

        list.on_page_size_change(25);
        list.on_sort("label");
        let before = list.query().clone();

        list.load().await;

        assert_eq!(*list.query(), before);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_and_keeps_items() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![widget("kept")], 1)))
            .respond_with(Err(FakeWidgets::failure()));
        let mut list = controller(fake);

        list.load().await;
        list.load().await;

        assert_eq!(list.error(), Some("Failed to load widget list"));
        assert!(!list.loading());
        // previous page stays on screen behind the error banner
        assert_eq!(list.items().len(), 1);
    }

    #[tokio::test]
    async fn test_reload_clears_previous_error() {
        let fake = FakeWidgets::new()
            .respond_with(Err(FakeWidgets::failure()))
            .respond_with(Ok(FakeWidgets::page(vec![widget("a")], 1)));
        let mut list = controller(fake);

        list.load().await;
        assert!(list.error().is_some());

        list.load().await;
        assert!(list.error().is_none());
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = controller(FakeWidgets::new());

        let first = list.begin_load();
        let second = list.begin_load();

        // The superseded request resolves first; it must not apply.
        list.finish_load(first, Ok(FakeWidgets::page(vec![widget("stale")], 9)));
        assert!(list.items().is_empty());
        assert!(list.pagination().is_none());
        assert!(list.loading());

        list.finish_load(second, Ok(FakeWidgets::page(vec![widget("fresh")], 2)));
        assert_eq!(list.items()[0].label, "fresh");
        assert_eq!(list.pagination().unwrap().total_pages, 2);
        assert!(!list.loading());
    }

    #[test]
    fn test_stale_response_after_newer_one_is_discarded() {
        let mut list = controller(FakeWidgets::new());

        let first = list.begin_load();
        let second = list.begin_load();

        list.finish_load(second, Ok(FakeWidgets::page(vec![widget("fresh")], 2)));
        list.finish_load(first, Ok(FakeWidgets::page(vec![widget("stale")], 9)));

        assert_eq!(list.items()[0].label, "fresh");
        assert_eq!(list.pagination().unwrap().total_pages, 2);
    }

    #[test]
    fn test_sort_same_field_alternates_direction() {
        let mut list = controller(FakeWidgets::new());

        list.on_sort("label");
        assert_eq!(list.query().sort_by.as_deref(), Some("label"));
        assert_eq!(list.query().sort_order, SortOrder::Asc);

        list.on_sort("label");
        assert_eq!(list.query().sort_order, SortOrder::Desc);

        list.on_sort("label");
        assert_eq!(list.query().sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_sort_new_field_resets_to_ascending() {
        let mut list = controller(FakeWidgets::new());

        list.on_sort("label");
        list.on_sort("label");
        assert_eq!(list.query().sort_order, SortOrder::Desc);

        list.on_sort("created_at");
        assert_eq!(list.query().sort_by.as_deref(), Some("created_at"));
        assert_eq!(list.query().sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_page_size_change_always_resets_page() {
        let mut list = controller(FakeWidgets::new());

        list.on_page_change(7);
        list.on_page_size_change(50);

        assert_eq!(list.query().page, 1);
        assert_eq!(list.query().limit, 50);
    }

    #[test]
    fn test_page_change_preserves_other_state() {
        let mut list = controller(FakeWidgets::new());

        list.on_page_size_change(25);
        list.on_sort("label");
        list.set_search("x");
        list.on_page_change(3);

        assert_eq!(list.query().page, 3);
        assert_eq!(list.query().limit, 25);
        assert_eq!(list.query().sort_by.as_deref(), Some("label"));
        assert_eq!(list.query().search.as_deref(), Some("x"));
    }

    #[test]
    fn test_changed_search_resets_page() {
        let mut list = controller(FakeWidgets::new());

        list.on_page_change(5);
        list.set_search("invoice");
        assert_eq!(list.query().page, 1);
    }

    #[test]
    fn test_unchanged_search_keeps_page() {
        let mut list = controller(FakeWidgets::new());

        list.set_search("invoice");
        list.on_page_change(4);
        list.set_search("invoice");
        assert_eq!(list.query().page, 4);
    }

    #[test]
    fn test_clearing_search_resets_page() {
        let mut list = controller(FakeWidgets::new());

        list.set_search("invoice");
        list.on_page_change(4);
        list.set_search("");
        assert_eq!(list.query().page, 1);
        assert_eq!(list.query().search, None);
    }

    #[test]
    fn test_page_numbers_empty_before_first_load() {
        let list = controller(FakeWidgets::new());
        assert!(list.page_numbers().next().is_none());
    }

    #[tokio::test]
    async fn test_page_numbers_follow_loaded_metadata() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![widget("a")], 10)));
        let mut list = controller(fake);

        list.on_page_change(5);
        list.load().await;

        let numbers: Vec<i64> = list.page_numbers().collect();
        assert_eq!(numbers, vec![3, 4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_zero_results_trusts_server_metadata() {
        let fake = FakeWidgets::new()
            .respond_with(Ok(FakeWidgets::page(vec![], 0)));
        let mut list = controller(fake);

        list.load().await;

        assert!(list.items().is_empty());
        assert_eq!(list.pagination().unwrap().total_pages, 0);
        assert!(list.page_numbers().next().is_none());
    }
}
