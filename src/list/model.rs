//! The `ListState` struct: construction, inputs and accessors.
//!
//! The derivation itself (filter then sort) lives in `filtering.rs`; the page
//! moves live in `api.rs`.

use super::types::{Change, Item, Listener, SortKey, VisiblePage, PAGE_SIZE};
use crate::paginator;
use std::fmt;

/// Full record set plus the three view parameters that select what is shown.
///
/// `ListState` never discards records: search and sort are re-derived from
/// the full set whenever an input changes, so clearing the search brings
/// every record back.
///
/// # Examples
///
/// ```
/// use rolodex::list::{ListState, SortKey};
/// use rolodex::record::UserRecord;
///
/// let mut list = ListState::new();
/// list.load(vec![
///     UserRecord::new("Zoe", "Adams"),
///     UserRecord::new("Anna", "Berg"),
///     UserRecord::new("Jan", "Novak"),
/// ]);
///
/// let page = list.visible_page();
/// assert_eq!(page.records[0].display_name(), "Anna Berg");
/// assert_eq!((page.page, page.total_pages), (1, 1));
///
/// list.set_search_text("an");
/// assert_eq!(list.match_count(), 2);
///
/// list.set_sort_key(SortKey::None);
/// assert_eq!(list.visible_page().records[0].display_name(), "Anna Berg");
/// ```
pub struct ListState<I: Item> {
    pub(super) items: Vec<I>,
    pub(super) search_text: String,
    pub(super) sort_key: SortKey,

    // Indices into `items` after filtering and sorting, in display order.
    pub(super) ordered: Vec<usize>,
    pub(super) paginator: paginator::Model,

    pub(super) listeners: Vec<Listener>,
}

impl<I: Item> Default for ListState<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> fmt::Debug for ListState<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("items", &self.items.len())
            .field("search_text", &self.search_text)
            .field("sort_key", &self.sort_key)
            .field("matches", &self.ordered.len())
            .field("page", &self.page())
            .field("total_pages", &self.total_pages())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<I: Item> ListState<I> {
    /// Creates an empty list sorted by name, on page 1 of 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            search_text: String::new(),
            sort_key: SortKey::default(),
            ordered: Vec::new(),
            paginator: paginator::Model::new().with_per_page(PAGE_SIZE),
            listeners: Vec::new(),
        }
    }

    /// Sets the initial sort key (builder pattern).
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self.refresh();
        self
    }

    /// Replaces every record, clears the search and returns to page 1.
    ///
    /// The sort key is kept; it is a preference of the user, not part of the
    /// loaded data.
    pub fn load(&mut self, records: Vec<I>) {
        tracing::debug!(count = records.len(), "loading records");
        self.items = records;
        self.search_text.clear();
        self.paginator.page = 0;
        self.refresh();
        self.notify(Change::Loaded);
    }

    /// Sets the search text and returns to page 1.
    ///
    /// Matching is a case-insensitive substring test against each record's
    /// `filter_value()`. An empty text matches everything. Re-applying the
    /// current text on page 1 changes nothing and sends no notification.
    pub fn set_search_text(&mut self, text: &str) {
        if self.search_text == text && self.paginator.on_first_page() {
            return;
        }
        self.search_text = text.to_string();
        self.paginator.page = 0;
        self.refresh();
        tracing::debug!(query = %self.search_text, matches = self.ordered.len(), "search changed");
        self.notify(Change::SearchChanged);
    }

    /// Sets the sort key and returns to page 1.
    ///
    /// Re-applying the current key on page 1 is a no-op.
    pub fn set_sort_key(&mut self, key: SortKey) {
        if self.sort_key == key && self.paginator.on_first_page() {
            return;
        }
        self.sort_key = key;
        self.paginator.page = 0;
        self.refresh();
        tracing::debug!(sort = %key, "sort changed");
        self.notify(Change::SortChanged);
    }

    /// Registers a callback that runs after every effective state change.
    ///
    /// ```
    /// use rolodex::list::{Change, ListState};
    /// use rolodex::record::UserRecord;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    ///
    /// let mut list: ListState<UserRecord> = ListState::new();
    /// list.subscribe(move |change| sink.lock().unwrap().push(change));
    /// list.load(vec![UserRecord::new("Ada", "Lovelace")]);
    /// list.next_page(); // only one page: nothing happens
    ///
    /// assert_eq!(*seen.lock().unwrap(), vec![Change::Loaded]);
    /// ```
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Computes the records on the current page.
    pub fn visible_page(&self) -> VisiblePage<I> {
        let (start, end) = self.paginator.get_slice_bounds(self.ordered.len());
        let records = self.ordered[start..end]
            .iter()
            .map(|&index| self.items[index].clone())
            .collect();

        VisiblePage {
            records,
            page: self.page(),
            total_pages: self.total_pages(),
        }
    }

    /// Returns the record shown at `row` of the current page, if any.
    pub fn record_on_page(&self, row: usize) -> Option<&I> {
        let (start, end) = self.paginator.get_slice_bounds(self.ordered.len());
        let position = start.checked_add(row).filter(|&p| p < end)?;
        self.ordered.get(position).map(|&index| &self.items[index])
    }

    /// Number of records on the current page.
    pub fn rows_on_page(&self) -> usize {
        self.paginator.items_on_page(self.ordered.len())
    }

    /// One-based number of the current page.
    pub fn page(&self) -> usize {
        self.paginator.page + 1
    }

    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages
    }

    /// Current search text as typed.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current sort key.
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Number of loaded records, ignoring the search.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records that match the current search.
    pub fn match_count(&self) -> usize {
        self.ordered.len()
    }

    /// Renders the pagination indicator for the current page.
    pub fn pagination_view(&self) -> String {
        self.paginator.view()
    }

    pub(super) fn notify(&mut self, change: Change) {
        for listener in self.listeners.iter_mut() {
            listener(change);
        }
    }
}
