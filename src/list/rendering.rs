//! View rendering for the list state.
//!
//! - Row rendering for the current page, with a highlighted row
//! - Pager rendering: page indicator plus Previous/Next controls

use super::style::{ListStyles, ELLIPSIS};
use super::types::Item;
use super::ListState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl<I: Item> ListState<I> {
    /// Renders the rows of the current page, one per line.
    ///
    /// `cursor` is the highlighted row within the page. Names wider than
    /// `width` columns are cut with an ellipsis; a `width` of 0 disables
    /// cutting.
    pub fn view_rows(&self, cursor: usize, styles: &ListStyles, width: usize) -> String {
        let page = self.visible_page();
        if page.records.is_empty() {
            let message = if self.search_text.is_empty() {
                "No users.".to_string()
            } else {
                format!("No users match \"{}\".", self.search_text)
            };
            return styles.no_items.clone().render(&message);
        }

        page.records
            .iter()
            .enumerate()
            .map(|(row, item)| {
                // Two columns for the "> " marker or the row padding.
                let label = truncate(&item.to_string(), width.saturating_sub(2));
                if row == cursor {
                    styles.selected_row.clone().render(&format!("> {}", label))
                } else {
                    styles.normal_row.clone().render(&label)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders "Page X of Y" followed by Previous/Next controls.
    ///
    /// The controls only appear when there is more than one page; each is
    /// dimmed when it would do nothing.
    pub fn view_pager(&self, styles: &ListStyles) -> String {
        let indicator = styles.pagination.clone().render(&self.pagination_view());
        if self.total_pages() <= 1 {
            return indicator;
        }

        let control = |label: &str, enabled: bool| {
            if enabled {
                styles.control_enabled.clone().render(label)
            } else {
                styles.control_disabled.clone().render(label)
            }
        };

        format!(
            "{}  {}  {}",
            indicator,
            control("‹ Previous", self.has_prev_page()),
            control("Next ›", self.has_next_page()),
        )
    }
}

/// Cuts `s` to at most `width` display columns, marking the cut with an
/// ellipsis. A `width` of 0 returns `s` unchanged.
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Ada Lovelace", 20), "Ada Lovelace");
        assert_eq!(truncate("Ada Lovelace", 0), "Ada Lovelace");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        assert_eq!(truncate("Ada Lovelace", 6), "Ada L…");
    }

    #[test]
    fn test_truncate_respects_wide_characters() {
        // Each ideograph is two columns wide.
        assert_eq!(truncate("山田太郎", 5), "山田…");
    }
}
