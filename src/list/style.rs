//! Styling for the list view.
//!
//! All default styles use `AdaptiveColor`, which picks a light or dark
//! variant to match the terminal background.
//!
//! ## Example
//!
//! ```rust
//! use rolodex::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.title = Style::new()
//!     .foreground(AdaptiveColor { Light: "#1a1a1a", Dark: "#ffffff" })
//!     .bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode ellipsis appended to names cut at the window edge.
pub const ELLIPSIS: &str = "…";

/// Styles for every element of the list view.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Title bar ("Users").
    pub title: Style,
    /// Search prompt while typing.
    pub search_prompt: Style,
    /// Search text while typing.
    pub search_text: Style,
    /// Unselected row.
    pub normal_row: Style,
    /// Highlighted row.
    pub selected_row: Style,
    /// Message shown when nothing matches.
    pub no_items: Style,
    /// "Page X of Y" indicator.
    pub pagination: Style,
    /// Enabled Previous/Next control.
    pub control_enabled: Style,
    /// Disabled Previous/Next control.
    pub control_disabled: Style,
    /// Status line (counts, sort key, loading).
    pub status_bar: Style,
    /// Error status line.
    pub status_error: Style,
    /// Help line.
    pub help: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_text: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            normal_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .padding_left(2),
            selected_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pagination: Style::new().foreground(subdued_color.clone()),
            control_enabled: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            control_disabled: Style::new().foreground(very_subdued_color),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_error: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
            help: Style::new().foreground(subdued_color),
        }
    }
}
