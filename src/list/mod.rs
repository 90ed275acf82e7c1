//! Searchable, sortable, paginated list state.
//!
//! This module exposes a generic `ListState<I: Item>` plus supporting types:
//! - `Item`: implement for your record type; must be `Display + Clone` and
//!   return a `filter_value()` (and optionally a `sort_value()`)
//! - `SortKey`: name, name length, or original order
//! - `VisiblePage`: the derived page handed to the rendering layer
//! - `Change`: notification sent to subscribers after every state change
//!
//! ## Derivation
//!
//! The full record set is never modified by searching or sorting. Each
//! change to the search text or sort key rebuilds the display order from
//! scratch:
//!
//! ```text
//! all records ──filter──▶ matches ──stable sort──▶ ordered ──slice──▶ page
//! ```
//!
//! Pages hold `PAGE_SIZE` records. The page number is reset to 1 by every
//! input change except page moves, and is always kept inside
//! `1..=total_pages`, where `total_pages` is at least 1 even when nothing
//! matches.
//!
//! ## Submodules
//!
//! - `keys`: key bindings used by the terminal front end to drive a list
//! - `style`: lipgloss styles for rows, pager and status line

/// Key bindings for driving a list from the keyboard.
pub mod keys;

/// Visual styling for list rows, pager controls and status lines.
pub mod style;

mod api;
mod filtering;
mod model;
mod rendering;
mod types;


pub use keys::ListKeyMap;
pub use model::ListState;
pub use style::ListStyles;
pub use types::{collate, Change, Item, Listener, SortKey, VisiblePage, PAGE_SIZE};
