#![warn(missing_docs)]

//! # rolodex
//!
//! A terminal browser for remote user directories, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Rolodex fetches a batch of user records from a randomuser-compatible API
//! and shows them as a list that can be searched, sorted and paged. Selecting
//! a row opens a popup with the user's contact details.
//!
//! The list logic lives in [`list::ListState`] and is independent of the
//! terminal: every change to its inputs (records, search text, sort key)
//! recomputes the visible page, and the page index always stays within
//! `1..=total_pages`.
//!
//! ```rust
//! use rolodex::prelude::*;
//!
//! let mut list = ListState::new();
//! list.load(vec![
//!     UserRecord::new("Zoe", "Adams"),
//!     UserRecord::new("Anna", "Berg"),
//!     UserRecord::new("Bob", "Anderson"),
//! ]);
//!
//! list.set_search_text("an");
//! let page = list.visible_page();
//! assert_eq!(page.records.len(), 1);
//! assert_eq!(page.records[0].display_name(), "Anna Berg");
//! assert_eq!(list.pagination_view(), "Page 1 of 1");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`record`] | User record as delivered by the provider |
//! | [`list`] | Filter, sort and paginate pipeline plus its views |
//! | [`paginator`] | Page arithmetic and the page indicator |
//! | [`detail`] | Detail popup for one record |
//! | [`fetch`] | HTTP client for the user directory |
//! | [`key`] | Key bindings with help text |
//! | [`app`] | The bubbletea-rs application model |
//! | [`config`] | Command-line and environment configuration |
//! | [`logging`] | Tracing subscriber setup |

pub mod app;
pub mod config;
pub mod detail;
pub mod fetch;
pub mod key;
pub mod list;
pub mod logging;
pub mod paginator;
pub mod record;

pub use app::App;
pub use config::{Args, Config, ConfigError};
pub use detail::{DetailFields, DetailView, Visibility};
pub use fetch::{FetchError, UserClient};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use list::{Change, Item, ListKeyMap, ListState, ListStyles, SortKey, VisiblePage, PAGE_SIZE};
pub use paginator::Model as Paginator;
pub use record::UserRecord;

/// Prelude module for convenient imports.
///
/// ```rust
/// use rolodex::prelude::*;
///
/// let list: ListState<UserRecord> = ListState::new().with_sort_key(SortKey::ByNameLength);
/// assert_eq!(list.total_pages(), 1);
/// ```
pub mod prelude {
    pub use crate::app::App;
    pub use crate::config::Config;
    pub use crate::detail::{DetailView, Visibility};
    pub use crate::fetch::{FetchError, UserClient};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::list::{Change, Item, ListKeyMap, ListState, ListStyles, SortKey, VisiblePage};
    pub use crate::paginator::Model as Paginator;
    pub use crate::record::UserRecord;
}
