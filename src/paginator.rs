//! Page arithmetic and the pagination indicator.
//!
//! The paginator does not hold any records. It tracks how many items exist,
//! how many fit on a page and which page is current, and it renders the
//! indicator shown under the list ("Page 2 of 5").
//!
//! Pages are zero-based internally; `ListState` converts to the one-based
//! numbers users see.

/// Pagination state and rendering.
///
/// # Examples
///
/// ```rust
/// use rolodex::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(10);
/// paginator.set_total_items(25);
///
/// assert_eq!(paginator.total_pages, 3);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 1);
/// assert_eq!(paginator.get_slice_bounds(25), (10, 20));
/// assert_eq!(paginator.view(), "Page 2 of 3");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page, zero-based.
    pub page: usize,
    /// The number of items per page.
    pub per_page: usize,
    /// The total number of pages.
    pub total_pages: usize,
    /// Indicator format; the first `%d` is the current page, the second
    /// the page count.
    pub format: String,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 1,
            total_pages: 1,
            format: "Page %d of %d".to_string(),
        }
    }
}

impl Model {
    /// Creates a new paginator model with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Calculates and sets the total number of pages from an item count.
    ///
    /// The result is always at least 1, even for 0 items. A current page
    /// that falls off the end is pulled back to the last page.
    ///
    /// ```rust
    /// use rolodex::paginator::Model;
    ///
    /// let mut paginator = Model::new().with_per_page(10);
    /// paginator.set_total_items(95);
    /// assert_eq!(paginator.total_pages, 10);
    ///
    /// paginator.page = 9;
    /// paginator.set_total_items(0);
    /// assert_eq!(paginator.total_pages, 1);
    /// assert_eq!(paginator.page, 0);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        if items == 0 {
            self.total_pages = 1;
        } else {
            self.total_pages = items.div_ceil(self.per_page);
        }

        if self.page >= self.total_pages {
            self.page = self.total_pages.saturating_sub(1);
        }
    }

    /// Number of items on the current page for a list of `total_items`.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        if total_items == 0 {
            return 0;
        }
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Start (inclusive) and end (exclusive) indices of the current page in
    /// a list of `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Moves to the previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Moves to the next page; no-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Whether the current page is the first one.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last one.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages.saturating_sub(1)
    }

    /// Renders the indicator, e.g. "Page 2 of 3".
    pub fn view(&self) -> String {
        self.format
            .replacen("%d", &(self.page + 1).to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }
}
