//! Terminal front end.
//!
//! [`App`] is a bubbletea-rs model that owns one [`ListState`] and one
//! [`DetailView`] for the session and translates key presses into their
//! operations. It is the only place that talks to the network: loads run as
//! commands and come back as [`UsersLoadedMsg`] or [`FetchFailedMsg`].
//!
//! ## Modes
//!
//! - **Browsing**: move the highlight, page, sort, open details
//! - **Searching**: typed characters edit the query, the list follows live
//! - **Details**: the popup is shown; only close and quit keys work
//!
//! Several loads may be in flight at once (initial load, cleared search,
//! reload). They are not ordered; whichever response arrives last is what
//! the list shows.

mod update;
mod view;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::detail::DetailView;
use crate::fetch::{FetchError, UserClient};
use crate::list::{ListKeyMap, ListState, ListStyles};
use crate::record::UserRecord;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::sync::OnceLock;

// Start-up only: bubbletea's `Model::init` takes no arguments.
static STARTUP: OnceLock<Config> = OnceLock::new();

/// Stores the configuration `App::init` starts from.
///
/// The bubbletea runtime constructs the model itself, so the binary hands
/// the parsed configuration over here before starting the program. Returns
/// `false` if a configuration was already installed.
pub fn install_config(config: Config) -> bool {
    STARTUP.set(config).is_ok()
}

/// A batch of users arrived.
#[derive(Debug)]
pub struct UsersLoadedMsg(pub Vec<UserRecord>);

/// A load failed.
#[derive(Debug)]
pub struct FetchFailedMsg(pub FetchError);

/// What key presses currently drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the list.
    #[default]
    Browsing,
    /// Editing the search query.
    Searching,
}

/// The application model.
pub struct App {
    pub(crate) client: Option<UserClient>,
    pub(crate) list: ListState<UserRecord>,
    pub(crate) detail: DetailView,
    pub(crate) mode: Mode,
    // Highlighted row within the current page.
    pub(crate) cursor: usize,
    pub(crate) in_flight: usize,
    pub(crate) status: Option<String>,
    pub(crate) keymap: ListKeyMap,
    pub(crate) styles: ListStyles,
    pub(crate) width: usize,
}

impl App {
    /// Creates the model with an empty list sorted per `config`.
    ///
    /// A client that cannot be built is reported in the status line; the
    /// list then stays empty.
    pub fn new(config: &Config) -> Self {
        let (client, status) = match UserClient::new(config) {
            Ok(client) => (Some(client), None),
            Err(err) => {
                tracing::error!(error = %err, "cannot create user client");
                (None, Some(format!("Could not load users: {}", err)))
            }
        };

        Self {
            client,
            list: ListState::new().with_sort_key(config.sort),
            detail: DetailView::new(),
            mode: Mode::default(),
            cursor: 0,
            in_flight: 0,
            status,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
            width: 0,
        }
    }

    /// The list state.
    pub fn list(&self) -> &ListState<UserRecord> {
        &self.list
    }

    /// The detail popup.
    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Highlighted row within the current page.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Last error shown in the status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Starts a load and returns the command that performs it.
    pub(crate) fn fetch(&mut self) -> Option<Cmd> {
        let Some(client) = self.client.clone() else {
            tracing::warn!("no user client; skipping load");
            return None;
        };

        self.in_flight += 1;
        Some(Box::pin(async move {
            let msg: Msg = match client.fetch().await {
                Ok(users) => Box::new(UsersLoadedMsg(users)),
                Err(err) => Box::new(FetchFailedMsg(err)),
            };
            Some(msg)
        }))
    }

    fn on_loaded(&mut self, users: Vec<UserRecord>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::info!(count = users.len(), "users loaded");
        self.list.load(users);
        self.cursor = 0;
        self.status = None;
    }

    fn on_failed(&mut self, err: &FetchError) {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::error!(error = %err, "loading users failed");
        self.status = Some(format!("Could not load users: {}", err));
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = STARTUP.get().cloned().unwrap_or_default();
        let mut app = Self::new(&config);
        let cmd = app.fetch();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(window) = msg.downcast_ref::<bubbletea_rs::WindowSizeMsg>() {
            self.width = window.width as usize;
            return None;
        }

        if let Some(UsersLoadedMsg(users)) = msg.downcast_ref::<UsersLoadedMsg>() {
            self.on_loaded(users.clone());
            return None;
        }

        if let Some(FetchFailedMsg(err)) = msg.downcast_ref::<FetchFailedMsg>() {
            self.on_failed(err);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::KeyMsg>() {
            return self.handle_key(key_msg);
        }

        None
    }

    fn view(&self) -> String {
        self.render()
    }
}
