use super::*;
use crate::config::Config;
use crate::detail::Visibility;
use crate::list::SortKey;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn press(app: &mut App, code: KeyCode) -> Option<Cmd> {
    app.update(Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn users(names: &[(&str, &str)]) -> Vec<UserRecord> {
    names
        .iter()
        .map(|(first, last)| UserRecord::new(first, last))
        .collect()
}

fn numbered(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| UserRecord::new(&format!("User{:02}", i), "Test"))
        .collect()
}

fn loaded(records: Vec<UserRecord>) -> App {
    let mut app = App::new(&Config::default());
    app.update(Box::new(UsersLoadedMsg(records)) as Msg);
    app
}

fn strip(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
}

#[test]
fn test_new_app_uses_configured_sort() {
    let config = Config {
        sort: SortKey::ByNameLength,
        ..Config::default()
    };
    let app = App::new(&config);
    assert_eq!(app.list().sort_key(), SortKey::ByNameLength);
    assert!(app.list().is_empty());
    assert_eq!(app.mode(), Mode::Browsing);
    assert!(!app.is_loading());
}

#[test]
fn test_loaded_message_fills_list() {
    let app = loaded(numbered(25));
    assert_eq!(app.list().len(), 25);
    assert_eq!(app.list().total_pages(), 3);
    assert_eq!(app.list().page(), 1);
    assert!(app.status().is_none());
}

#[test]
fn test_fetch_tracks_in_flight_loads() {
    let mut app = App::new(&Config::default());
    assert!(app.fetch().is_some());
    assert!(app.fetch().is_some());
    assert!(app.is_loading());

    app.update(Box::new(UsersLoadedMsg(numbered(3))) as Msg);
    assert!(app.is_loading());
    app.update(Box::new(UsersLoadedMsg(numbered(5))) as Msg);
    assert!(!app.is_loading());
    // Last response wins.
    assert_eq!(app.list().len(), 5);
}

#[test]
fn test_failed_load_keeps_records_and_reports() {
    let mut app = loaded(numbered(4));
    let err = crate::fetch::parse_users("not json").unwrap_err();
    app.update(Box::new(FetchFailedMsg(err)) as Msg);

    assert_eq!(app.list().len(), 4);
    let status = app.status().unwrap();
    assert!(status.starts_with("Could not load users"));
    assert!(strip(&app.view()).contains("Could not load users"));
}

#[test]
fn test_paging_keys_stop_at_bounds() {
    let mut app = loaded(numbered(25));

    press(&mut app, KeyCode::Left);
    assert_eq!(app.list().page(), 1);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.list().page(), 3);

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.list().page(), 3);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.list().page(), 2);
}

#[test]
fn test_cursor_stays_within_page() {
    let mut app = loaded(numbered(25));
    for _ in 0..15 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.cursor(), 9);

    // The last page only has five rows.
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor(), 4);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.cursor(), 2);
}

#[test]
fn test_sort_key_cycles_and_resets_page() {
    let mut app = loaded(numbered(25));
    press(&mut app, KeyCode::Right);
    assert_eq!(app.list().page(), 2);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.list().sort_key(), SortKey::ByNameLength);
    assert_eq!(app.list().page(), 1);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.list().sort_key(), SortKey::None);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.list().sort_key(), SortKey::ByName);
}

#[test]
fn test_search_filters_live_by_first_name() {
    let mut app = loaded(users(&[
        ("Anna", "Berg"),
        ("Hannah", "Smith"),
        ("Bob", "Anderson"),
    ]));

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.mode(), Mode::Searching);
    type_text(&mut app, "AN");

    assert_eq!(app.list().search_text(), "AN");
    assert_eq!(app.list().match_count(), 2);
    let names: Vec<String> = app
        .list()
        .visible_page()
        .records
        .iter()
        .map(UserRecord::display_name)
        .collect();
    assert_eq!(names, vec!["Anna Berg", "Hannah Smith"]);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode(), Mode::Browsing);
    assert_eq!(app.list().search_text(), "AN");
}

#[test]
fn test_search_mode_types_command_letters() {
    let mut app = loaded(users(&[("Quinn", "Ross")]));
    press(&mut app, KeyCode::Char('/'));

    // 'q' and 's' are text here, not quit and sort.
    assert!(press(&mut app, KeyCode::Char('q')).is_none());
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.list().search_text(), "qs");
    assert_eq!(app.list().sort_key(), SortKey::ByName);
}

#[test]
fn test_clearing_search_reloads() {
    let mut app = loaded(users(&[("Anna", "Berg")]));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zz");
    assert_eq!(app.list().match_count(), 0);
    assert!(strip(&app.view()).contains("No users match \"zz\"."));

    assert!(press(&mut app, KeyCode::Backspace).is_none());
    let cmd = press(&mut app, KeyCode::Backspace);
    assert!(cmd.is_some());
    assert!(app.is_loading());
    assert_eq!(app.list().match_count(), 1);

    // Backspace on an empty query does nothing.
    assert!(press(&mut app, KeyCode::Backspace).is_none());
}

#[test]
fn test_details_open_and_close() {
    let mut app = loaded(users(&[("Zoe", "Adams"), ("Anna", "Berg")]));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.detail().visibility(), Visibility::Shown);
    assert_eq!(app.detail().fields().unwrap().name, "Zoe Adams");
    assert!(strip(&app.view()).contains("Zoe Adams"));

    // List keys are ignored while the popup is up.
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.list().sort_key(), SortKey::ByName);

    press(&mut app, KeyCode::Char('x'));
    assert!(!app.detail().is_shown());

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.detail().is_shown());
}

#[test]
fn test_enter_on_empty_page_opens_nothing() {
    let mut app = loaded(Vec::new());
    press(&mut app, KeyCode::Enter);
    assert!(!app.detail().is_shown());
    assert!(strip(&app.view()).contains("No users."));
}

#[test]
fn test_quit_keys() {
    let mut app = loaded(numbered(3));
    assert!(press(&mut app, KeyCode::Char('q')).is_some());

    press(&mut app, KeyCode::Char('/'));
    let ctrl_c = app.update(Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg);
    assert!(ctrl_c.is_some());
    assert_eq!(app.list().search_text(), "");
}

#[test]
fn test_reload_key_starts_fetch() {
    let mut app = loaded(numbered(3));
    assert!(press(&mut app, KeyCode::Char('r')).is_some());
    assert!(app.is_loading());
}

#[test]
fn test_view_shows_pager_and_status() {
    let mut app = loaded(numbered(25));
    press(&mut app, KeyCode::Right);

    let text = strip(&app.view());
    assert!(text.contains("Users"));
    assert!(text.contains("> User10 Test"));
    assert!(text.contains("Page 2 of 3"));
    assert!(text.contains("‹ Previous"));
    assert!(text.contains("Next ›"));
    assert!(text.contains("25 of 25 users • sorted by name"));
}

#[test]
fn test_window_size_sets_row_width() {
    let mut app = loaded(users(&[("Bartholomew", "Featherstonehaugh")]));
    app.update(Box::new(bubbletea_rs::WindowSizeMsg {
        width: 12,
        height: 20,
    }) as Msg);

    let text = strip(&app.view());
    assert!(text.contains("> Bartholom…"));
}

#[test]
fn test_init_reads_installed_config_once() {
    let config = Config {
        sort: SortKey::None,
        ..Config::default()
    };
    assert!(install_config(config));
    assert!(!install_config(Config::default()));

    let (app, cmd) = <App as BubbleTeaModel>::init();
    assert_eq!(app.list().sort_key(), SortKey::None);
    assert!(cmd.is_some());
    assert!(app.is_loading());
}
