//! Paginated list controller.

use serde::{Deserialize, Serialize};

use super::Ticket;
use crate::envelope::Pagination;

/// Sort direction accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value for the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Filter and pagination configuration for a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 12,
            category: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl ListQuery {
    /// Render as query pairs using the API's camelCase parameter names.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_str().to_string()));
        }
        pairs
    }
}

/// Whether an in-flight fetch replaces or extends the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Initial,
    Append,
}

/// View state of a list controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading(LoadKind),
    Ready,
    Failed(String),
}

/// One page of a list response: the items plus the envelope's pagination.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Drives a paginated list with incremental loading.
///
/// Items are appended in server-supplied order and never re-sorted or
/// deduplicated; the backend must not return duplicates across pages.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    query: ListQuery,
    items: Vec<T>,
    has_more: bool,
    phase: ListPhase,
    generation: u64,
}

impl<T> ListController<T> {
    /// Create an idle controller with the given query.
    #[must_use]
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            has_more: false,
            phase: ListPhase::Idle,
            generation: 0,
        }
    }

    /// The current query, as it should be sent to the API.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The accumulated items, in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether the latest response reported further pages.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// The current view phase.
    #[must_use]
    pub const fn phase(&self) -> &ListPhase {
        &self.phase
    }

    /// Error message if the controller is in the failed phase.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Begin an initial load, discarding accumulated items.
    ///
    /// Fetches whatever page the query currently names (a shopper can land
    /// on a deep page link). Invalidates any in-flight fetch.
    pub fn begin(&mut self) -> Ticket {
        self.items.clear();
        self.has_more = false;
        self.start(LoadKind::Initial)
    }

    /// Begin a load-more fetch for the next page.
    ///
    /// Only valid from the ready phase with more pages available; returns
    /// `None` otherwise.
    pub fn begin_append(&mut self) -> Option<Ticket> {
        if self.phase != ListPhase::Ready || !self.has_more {
            return None;
        }
        self.query.page += 1;
        Some(self.start(LoadKind::Append))
    }

    /// Change the category filter.
    ///
    /// Any change to a non-page field resets the page to 1 and discards the
    /// accumulated list.
    pub fn set_category(&mut self, category: Option<String>) {
        if self.query.category != category {
            self.query.category = category;
            self.reset_for_filter_change();
        }
    }

    /// Change the sort field and direction.
    pub fn set_sort(&mut self, sort_by: Option<String>, sort_order: Option<SortOrder>) {
        if self.query.sort_by != sort_by || self.query.sort_order != sort_order {
            self.query.sort_by = sort_by;
            self.query.sort_order = sort_order;
            self.reset_for_filter_change();
        }
    }

    /// Change the page size.
    pub fn set_limit(&mut self, limit: u32) {
        if self.query.limit != limit {
            self.query.limit = limit;
            self.reset_for_filter_change();
        }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` (and changes nothing) when the ticket is stale, i.e.
    /// a newer fetch or filter change superseded the one that produced this
    /// outcome.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<Page<T>, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        let ListPhase::Loading(kind) = &self.phase else {
            return false;
        };
        let kind = *kind;

        match outcome {
            Ok(page) => {
                match kind {
                    LoadKind::Initial => self.items = page.items,
                    LoadKind::Append => self.items.extend(page.items),
                }
                // hasMore is taken verbatim from the latest response only
                self.has_more = page.pagination.is_some_and(|p| p.has_more);
                self.phase = ListPhase::Ready;
            }
            Err(message) => {
                self.phase = ListPhase::Failed(message);
            }
        }
        true
    }

    fn start(&mut self, kind: LoadKind) -> Ticket {
        self.generation += 1;
        self.phase = ListPhase::Loading(kind);
        Ticket(self.generation)
    }

    fn reset_for_filter_change(&mut self) {
        self.query.page = 1;
        self.items.clear();
        self.has_more = false;
        self.phase = ListPhase::Idle;
        // Invalidate in-flight fetches issued under the old filter
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, has_more: bool) -> Page<u32> {
        Page {
            items,
            pagination: Some(Pagination {
                page: 1,
                limit: 12,
                total: None,
                has_more,
            }),
        }
    }

    #[test]
    fn test_initial_load_replaces_items_in_order() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        assert_eq!(controller.phase(), &ListPhase::Loading(LoadKind::Initial));

        assert!(controller.resolve(ticket, Ok(page(vec![1, 2, 3], true))));
        assert_eq!(controller.phase(), &ListPhase::Ready);
        assert_eq!(controller.items(), &[1, 2, 3]);
        assert!(controller.has_more());
    }

    #[test]
    fn test_append_concatenates_preserving_order() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.resolve(ticket, Ok(page(vec![1, 2], true)));

        let ticket = controller.begin_append().unwrap();
        assert_eq!(controller.query().page, 2);
        controller.resolve(ticket, Ok(page(vec![3, 4], false)));

        assert_eq!(controller.items(), &[1, 2, 3, 4]);
        assert!(!controller.has_more());
        // No further pages, so load-more is no longer offered
        assert!(controller.begin_append().is_none());
    }

    #[test]
    fn test_has_more_reflects_latest_response_only() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.resolve(ticket, Ok(page(vec![1], true)));

        let ticket = controller.begin_append().unwrap();
        controller.resolve(
            ticket,
            Ok(Page {
                items: vec![2],
                pagination: None,
            }),
        );
        // Absent pagination means no more pages
        assert!(!controller.has_more());
    }

    #[test]
    fn test_initial_failure() {
        let mut controller = ListController::<u32>::new(ListQuery::default());
        let ticket = controller.begin();
        assert!(controller.resolve(ticket, Err("Request failed".to_string())));
        assert_eq!(controller.error(), Some("Request failed"));
        assert!(controller.items().is_empty());
    }

    #[test]
    fn test_append_failure_keeps_accumulated_items() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.resolve(ticket, Ok(page(vec![1, 2], true)));

        let ticket = controller.begin_append().unwrap();
        controller.resolve(ticket, Err("boom".to_string()));
        assert_eq!(controller.error(), Some("boom"));
        assert_eq!(controller.items(), &[1, 2]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = ListController::new(ListQuery::default());
        let stale = controller.begin();
        // A second fetch supersedes the first before it resolves
        let fresh = controller.begin();

        assert!(!controller.resolve(stale, Ok(page(vec![9, 9], false))));
        assert_eq!(controller.phase(), &ListPhase::Loading(LoadKind::Initial));
        assert!(controller.items().is_empty());

        assert!(controller.resolve(fresh, Ok(page(vec![1], false))));
        assert_eq!(controller.items(), &[1]);
    }

    #[test]
    fn test_filter_change_resets_page_and_items() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.resolve(ticket, Ok(page(vec![1, 2], true)));
        let ticket = controller.begin_append().unwrap();
        controller.resolve(ticket, Ok(page(vec![3], true)));
        assert_eq!(controller.query().page, 2);

        controller.set_category(Some("fashion".to_string()));
        assert_eq!(controller.query().page, 1);
        assert!(controller.items().is_empty());
        assert_eq!(controller.phase(), &ListPhase::Idle);
    }

    #[test]
    fn test_filter_change_invalidates_in_flight_fetch() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.set_sort(Some("price".to_string()), Some(SortOrder::Desc));
        // The response for the old filter arrives late and is dropped
        assert!(!controller.resolve(ticket, Ok(page(vec![7], false))));
        assert!(controller.items().is_empty());
    }

    #[test]
    fn test_unchanged_filter_does_not_reset() {
        let mut controller = ListController::new(ListQuery::default());
        let ticket = controller.begin();
        controller.resolve(ticket, Ok(page(vec![1], true)));

        controller.set_category(None);
        assert_eq!(controller.phase(), &ListPhase::Ready);
        assert_eq!(controller.items(), &[1]);
    }

    #[test]
    fn test_begin_append_requires_ready_phase() {
        let mut controller = ListController::<u32>::new(ListQuery::default());
        assert!(controller.begin_append().is_none());
        let _ticket = controller.begin();
        assert!(controller.begin_append().is_none());
    }

    #[test]
    fn test_query_pairs_use_wire_names() {
        let query = ListQuery {
            page: 2,
            limit: 24,
            category: Some("groceries".to_string()),
            sort_by: Some("price".to_string()),
            sort_order: Some(SortOrder::Asc),
        };
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "24".to_string()),
                ("category", "groceries".to_string()),
                ("sortBy", "price".to_string()),
                ("sortOrder", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_omit_unset_filters() {
        let query = ListQuery::default();
        assert_eq!(
            query.to_query_pairs(),
            vec![("page", "1".to_string()), ("limit", "12".to_string())]
        );
    }
}
