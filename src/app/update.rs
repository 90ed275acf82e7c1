//! Key handling for the application model.

use super::{App, Mode};
use bubbletea_rs::{Cmd, KeyMsg};
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    pub(crate) fn handle_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.force_quit.matches(msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.detail.is_shown() {
            if self.keymap.close_details.matches(msg) {
                self.detail.close();
            }
            return None;
        }

        match self.mode {
            Mode::Searching => self.handle_search_key(msg),
            Mode::Browsing => self.handle_browse_key(msg),
        }
    }

    fn handle_search_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.accept_search.matches(msg) {
            self.mode = Mode::Browsing;
            return None;
        }

        let mut query = self.list.search_text().to_string();
        match msg.key {
            KeyCode::Backspace => {
                if query.pop().is_none() {
                    return None;
                }
            }
            KeyCode::Char(c)
                if !msg
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                query.push(c);
            }
            _ => return None,
        }

        self.list.set_search_text(&query);
        self.cursor = 0;

        // Clearing the query asks the provider for a fresh set.
        if query.is_empty() {
            tracing::debug!("search cleared, reloading");
            return self.fetch();
        }
        None
    }

    fn handle_browse_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        let keys = &self.keymap;

        if keys.quit.matches(msg) {
            return Some(bubbletea_rs::quit());
        }

        if keys.cursor_up.matches(msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if keys.cursor_down.matches(msg) {
            let last = self.list.rows_on_page().saturating_sub(1);
            self.cursor = (self.cursor + 1).min(last);
        } else if keys.next_page.matches(msg) {
            self.list.next_page();
            self.clamp_cursor();
        } else if keys.prev_page.matches(msg) {
            self.list.prev_page();
            self.clamp_cursor();
        } else if keys.cycle_sort.matches(msg) {
            let next = self.list.sort_key().next();
            self.list.set_sort_key(next);
            self.cursor = 0;
        } else if keys.search.matches(msg) {
            self.mode = Mode::Searching;
        } else if keys.open_details.matches(msg) {
            if let Some(record) = self.list.record_on_page(self.cursor) {
                self.detail.open(record.clone());
            }
        } else if keys.reload.matches(msg) {
            return self.fetch();
        }

        None
    }

    fn clamp_cursor(&mut self) {
        let last = self.list.rows_on_page().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}
