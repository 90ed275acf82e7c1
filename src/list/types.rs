//! Core types and traits for the list pipeline.
//!
//! This module contains the vocabulary shared by the list state and its
//! callers:
//! - `Item` trait for records that can be searched and ordered
//! - `SortKey` for the ordering selected by the user
//! - `VisiblePage` for the derived slice handed to the rendering layer
//! - `Change` for state-changed notifications

use std::cmp::Ordering;
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Number of records shown on a single page.
pub const PAGE_SIZE: usize = 10;

/// Trait for records that can be searched and ordered by a list.
///
/// `filter_value()` is what the search box matches against, `sort_value()`
/// is what name ordering compares. The `Display` rendering is what the list
/// shows for each row.
///
/// # Examples
///
/// ```
/// use rolodex::list::Item;
/// use std::fmt;
///
/// #[derive(Clone)]
/// struct Tag(String);
///
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "#{}", self.0)
///     }
/// }
///
/// impl Item for Tag {
///     fn filter_value(&self) -> String {
///         self.0.to_lowercase()
///     }
/// }
///
/// assert_eq!(Tag("Rust".into()).sort_value(), "#Rust");
/// ```
pub trait Item: Display + Clone {
    /// Returns the text searched by the filter, already lowercased.
    fn filter_value(&self) -> String;

    /// Returns the text compared by name ordering and measured by length
    /// ordering. Defaults to the `Display` rendering.
    fn sort_value(&self) -> String {
        self.to_string()
    }
}

/// Ordering applied to the filtered records.
///
/// The string forms are the values accepted by `--sort`, so a key can be
/// parsed straight from configuration:
///
/// ```
/// use rolodex::list::SortKey;
/// use std::str::FromStr;
///
/// assert_eq!(SortKey::from_str("size").unwrap(), SortKey::ByNameLength);
/// assert_eq!(SortKey::default(), SortKey::ByName);
/// assert_eq!(SortKey::ByName.to_string(), "name");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SortKey {
    /// Alphabetical by display name.
    #[default]
    #[strum(serialize = "name")]
    ByName,
    /// Shortest display name first.
    #[strum(serialize = "size")]
    ByNameLength,
    /// Order in which the provider returned the records.
    #[strum(serialize = "none")]
    None,
}

impl SortKey {
    /// Returns the key that follows this one in the selector.
    ///
    /// Cycles `name -> size -> none -> name`.
    pub fn next(self) -> Self {
        match self {
            SortKey::ByName => SortKey::ByNameLength,
            SortKey::ByNameLength => SortKey::None,
            SortKey::None => SortKey::ByName,
        }
    }

    /// Human readable label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::ByName => "name",
            SortKey::ByNameLength => "name length",
            SortKey::None => "original order",
        }
    }

    /// Compares two sort values under this key.
    ///
    /// `SortKey::None` treats every pair as equal, which together with a
    /// stable sort keeps the input order.
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortKey::ByName => collate(a, b),
            SortKey::ByNameLength => a.chars().count().cmp(&b.chars().count()),
            SortKey::None => Ordering::Equal,
        }
    }
}

/// Locale-like string comparison.
///
/// Letters are compared case- and accent-insensitively first. Remaining
/// ties put lowercase before uppercase and plain letters before accented
/// ones, the way dictionary collation does.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold)
        .cmp(b.chars().flat_map(fold));
    primary
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn fold(c: char) -> std::char::ToLowercase {
    let base = match c {
        'À'..='Å' | 'à'..='å' | 'Ā'..='ą' => 'a',
        'Ç' | 'ç' | 'Ć'..='č' => 'c',
        'Ď'..='đ' => 'd',
        'È'..='Ë' | 'è'..='ë' | 'Ē'..='ě' => 'e',
        'Ĝ'..='ģ' => 'g',
        'Ì'..='Ï' | 'ì'..='ï' | 'Ĩ'..='ı' => 'i',
        'Ñ' | 'ñ' | 'Ń'..='ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | 'Ō'..='ő' => 'o',
        'Ŕ'..='ř' => 'r',
        'Ś'..='š' => 's',
        'Ţ'..='ť' => 't',
        'Ù'..='Ü' | 'ù'..='ü' | 'Ũ'..='ų' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        'Ź'..='ž' => 'z',
        other => other,
    };
    base.to_lowercase()
}

/// The page of records currently visible, plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePage<I: Item> {
    /// Records on the current page, in display order.
    pub records: Vec<I>,
    /// One-based page number.
    pub page: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
}

impl<I: Item> VisiblePage<I> {
    /// Whether a "Previous" control should be enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a "Next" control should be enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Notification emitted after the list state changed.
///
/// Subscribers re-query `visible_page()` on any variant; the variant only
/// says which input moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new record set replaced the old one.
    Loaded,
    /// The search text changed.
    SearchChanged,
    /// The sort key changed.
    SortChanged,
    /// The page number changed.
    PageChanged,
}

/// Callback registered with `ListState::subscribe`.
pub type Listener = Box<dyn FnMut(Change) + Send>;
