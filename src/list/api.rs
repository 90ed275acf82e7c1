//! Page navigation for the list state.
//!
//! Moving past either end is not an error; the call simply does nothing and
//! no notification is sent.

use super::types::{Change, Item};
use super::ListState;

impl<I: Item> ListState<I> {
    /// Advances one page unless already on the last page.
    pub fn next_page(&mut self) {
        if self.paginator.on_last_page() {
            return;
        }
        self.paginator.next_page();
        tracing::debug!(page = self.page(), "next page");
        self.notify(Change::PageChanged);
    }

    /// Goes back one page unless already on the first page.
    pub fn prev_page(&mut self) {
        if self.paginator.on_first_page() {
            return;
        }
        self.paginator.prev_page();
        tracing::debug!(page = self.page(), "previous page");
        self.notify(Change::PageChanged);
    }

    /// Whether a previous page exists.
    pub fn has_prev_page(&self) -> bool {
        !self.paginator.on_first_page()
    }

    /// Whether a next page exists.
    pub fn has_next_page(&self) -> bool {
        !self.paginator.on_last_page()
    }
}
