//! Rendering for the application model.

use super::{App, Mode};
use crate::key::{self, KeyMap};

impl App {
    pub(crate) fn render(&self) -> String {
        if self.detail.is_shown() {
            return self.detail.view();
        }

        let styles = &self.styles;
        let mut sections = vec![styles.title.clone().render("Users")];

        match self.mode {
            Mode::Searching => sections.push(format!(
                "{}{}",
                styles.search_prompt.clone().render("Search: "),
                styles.search_text.clone().render(self.list.search_text())
            )),
            Mode::Browsing if !self.list.search_text().is_empty() => sections.push(
                styles
                    .search_text
                    .clone()
                    .render(&format!("Filter: {}", self.list.search_text())),
            ),
            Mode::Browsing => {}
        }

        sections.push(String::new());
        sections.push(self.list.view_rows(self.cursor, styles, self.width));
        sections.push(String::new());
        sections.push(self.list.view_pager(styles));
        sections.push(self.status_line());
        sections.push(
            styles
                .help
                .clone()
                .render(&key::help_line(&self.keymap.short_help())),
        );

        sections.join("\n")
    }

    fn status_line(&self) -> String {
        if let Some(error) = &self.status {
            return self.styles.status_error.clone().render(error);
        }

        let mut line = format!(
            "{} of {} users • sorted by {}",
            self.list.match_count(),
            self.list.len(),
            self.list.sort_key().label()
        );
        if self.is_loading() {
            line.push_str(" • loading…");
        }
        self.styles.status_bar.clone().render(&line)
    }
}
