//! Detail popup for a single user.
//!
//! The popup has two states, [`Visibility::Hidden`] (initial) and
//! [`Visibility::Shown`]. Selecting a record shows it; a close request hides
//! it again. The fields are passed through exactly as the provider sent
//! them.
//!
//! ```
//! use rolodex::detail::{DetailView, Visibility};
//! use rolodex::record::UserRecord;
//!
//! let mut detail = DetailView::new();
//! assert_eq!(detail.visibility(), Visibility::Hidden);
//!
//! detail.open(UserRecord::new("Ada", "Lovelace").with_location("London", "Greater London"));
//! let fields = detail.fields().unwrap();
//! assert_eq!(fields.name, "Ada Lovelace");
//! assert_eq!(fields.city, "London");
//!
//! detail.close();
//! assert!(!detail.is_shown());
//! ```

use crate::record::UserRecord;
use lipgloss_extras::prelude::*;

/// Whether the popup is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not displayed.
    #[default]
    Hidden,
    /// Displayed on top of the list.
    Shown,
}

/// The values shown in the popup, borrowed from the selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailFields<'a> {
    /// First and last name.
    pub name: &'a str,
    /// Large portrait URL.
    pub photo_url: &'a str,
    /// E-mail address.
    pub email: &'a str,
    /// Phone number.
    pub phone: &'a str,
    /// City.
    pub city: &'a str,
    /// State or region.
    pub state: &'a str,
}

/// Styles for the popup.
#[derive(Debug, Clone)]
pub struct DetailStyles {
    /// Name heading.
    pub heading: Style,
    /// Field labels ("Email:").
    pub label: Style,
    /// Field values.
    pub value: Style,
    /// Close hint at the bottom.
    pub hint: Style,
}

impl Default for DetailStyles {
    fn default() -> Self {
        Self {
            heading: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true)
                .padding(0, 1, 0, 1),
            label: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#777777",
            }),
            value: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            hint: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#5C5C5C",
            }),
        }
    }
}

/// Popup state: visibility plus the record being shown.
#[derive(Debug, Clone, Default)]
pub struct DetailView {
    visibility: Visibility,
    record: Option<UserRecord>,
    // Cached at open time; the record is immutable while shown.
    name: String,
    styles: DetailStyles,
}

impl DetailView {
    /// Creates a hidden popup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `record`.
    pub fn open(&mut self, record: UserRecord) {
        tracing::debug!(user = %record, "opening details");
        self.name = record.display_name();
        self.record = Some(record);
        self.visibility = Visibility::Shown;
    }

    /// Hides the popup.
    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the popup is on screen.
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// The record being shown, if the popup is open.
    pub fn record(&self) -> Option<&UserRecord> {
        match self.visibility {
            Visibility::Shown => self.record.as_ref(),
            Visibility::Hidden => None,
        }
    }

    /// Fields of the shown record, if the popup is open.
    pub fn fields(&self) -> Option<DetailFields<'_>> {
        let record = self.record()?;
        Some(DetailFields {
            name: &self.name,
            photo_url: &record.picture.large,
            email: &record.email,
            phone: &record.phone,
            city: &record.location.city,
            state: &record.location.state,
        })
    }

    /// Renders the popup, or an empty string while hidden.
    pub fn view(&self) -> String {
        let Some(fields) = self.fields() else {
            return String::new();
        };

        let line = |label: &str, value: &str| {
            format!(
                "{} {}",
                self.styles.label.clone().render(label),
                self.styles.value.clone().render(value)
            )
        };

        [
            self.styles.heading.clone().render(fields.name),
            String::new(),
            line("Photo:", fields.photo_url),
            line("Email:", fields.email),
            line("Phone:", fields.phone),
            line(
                "Location:",
                &format!("{}, {}", fields.city, fields.state),
            ),
            String::new(),
            self.styles.hint.clone().render("esc/x close"),
        ]
        .join("\n")
    }
}
