//! Key bindings for list navigation and interaction.
//!
//! ## Browsing
//!
//! - **Rows**: `↑/k` (up), `↓/j` (down)
//! - **Pages**: `→/l/pgdn` (next page), `←/h/pgup` (prev page)
//! - **Sort**: `s` (cycle name → size → none)
//! - **Search**: `/` (start typing a query)
//! - **Details**: `enter` (open the highlighted record)
//! - **Reload**: `r` (fetch a fresh set of records)
//! - **Quit**: `q`, or `ctrl+c` from anywhere
//!
//! ## Searching
//!
//! - **Done**: `enter` or `esc` (keep the query, back to browsing)
//!
//! ## Details popup
//!
//! - **Close**: `esc`, `enter` or `x`

use crate::key::{self, Binding};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for browsing, searching and the detail popup.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move the highlight up one row.
    pub cursor_up: Binding,
    /// Move the highlight down one row.
    pub cursor_down: Binding,
    /// Go to the next page.
    pub next_page: Binding,
    /// Go to the previous page.
    pub prev_page: Binding,
    /// Cycle the sort key.
    pub cycle_sort: Binding,
    /// Start typing a search query.
    pub search: Binding,
    /// Leave search mode keeping the query.
    pub accept_search: Binding,
    /// Open the detail popup for the highlighted row.
    pub open_details: Binding,
    /// Close the detail popup.
    pub close_details: Binding,
    /// Fetch a fresh record set.
    pub reload: Binding,
    /// Quit.
    pub quit: Binding,
    /// Quit from any mode.
    pub force_quit: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            next_page: Binding::new(vec![KeyCode::Right, KeyCode::Char('l'), KeyCode::PageDown])
                .with_help("→/l", "next"),
            prev_page: Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "previous"),
            cycle_sort: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            search: Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: Binding::new(vec![KeyCode::Enter, KeyCode::Esc])
                .with_help("enter", "done"),
            open_details: Binding::new(vec![KeyCode::Enter]).with_help("enter", "details"),
            close_details: Binding::new(vec![KeyCode::Esc, KeyCode::Enter, KeyCode::Char('x')])
                .with_help("esc/x", "close"),
            reload: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reload"),
            quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

impl key::KeyMap for ListKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.prev_page,
            &self.next_page,
            &self.cycle_sort,
            &self.search,
            &self.open_details,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            // Navigation
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.next_page,
                &self.prev_page,
            ],
            // View
            vec![
                &self.cycle_sort,
                &self.search,
                &self.accept_search,
                &self.reload,
            ],
            // Details and quit
            vec![
                &self.open_details,
                &self.close_details,
                &self.quit,
                &self.force_quit,
            ],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;

    #[test]
    fn test_full_help_covers_every_binding() {
        let keymap = ListKeyMap::default();
        let count: usize = keymap.full_help().iter().map(Vec::len).sum();
        assert_eq!(count, 12);
    }

    #[test]
    fn test_short_help_mentions_paging() {
        let keymap = ListKeyMap::default();
        let line = crate::key::help_line(&keymap.short_help());
        assert!(line.contains("→/l next"));
        assert!(line.contains("←/h previous"));
    }
}
