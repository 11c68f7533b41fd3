use std::time::{Duration, Instant};

use simple_browser::app::{BrowserWindow, STATUS_FAILED, STATUS_LOADED, STATUS_LOADING};
use simple_browser::engine::headless::HeadlessFactory;
use simple_browser::types::config::BrowserConfig;
use simple_browser::types::engine::EngineEvent;

const HOME: &str = "https://www.google.com";

fn open() -> BrowserWindow<HeadlessFactory> {
    BrowserWindow::open(BrowserConfig::default(), HeadlessFactory::new()).unwrap()
}

fn tab_id(window: &BrowserWindow<HeadlessFactory>, index: usize) -> String {
    window.tab(index).unwrap().id().to_string()
}

fn finish(window: &mut BrowserWindow<HeadlessFactory>, id: &str, success: bool, url: &str) {
    window.handle_engine_event(
        id,
        EngineEvent::LoadFinished {
            success,
            url: url.to_string(),
        },
    );
}

#[test]
fn test_startup_has_one_tab_at_home() {
    let window = open();
    assert_eq!(window.tab_count(), 1);
    assert_eq!(window.active_index(), Some(0));
    assert_eq!(window.active_tab().unwrap().current_location(), HOME);
    assert_eq!(window.url_bar_text(), HOME);
    assert_eq!(window.active_tab().unwrap().label(), "New Tab");
    assert!(!window.is_progress_visible());
}

#[test]
fn test_new_tab_without_target_becomes_active_at_home() {
    let mut window = open();
    let id = window.add_tab(None).unwrap();

    assert_eq!(window.tab_count(), 2);
    assert_eq!(window.active_index(), Some(1));
    assert_eq!(window.active_tab().unwrap().id(), id);
    assert_eq!(window.url_bar_text(), HOME);
    assert!(window.tab(0).is_some() && window.tab(1).is_some());
    assert_eq!(window.window_title(), "New Tab - Simple Browser");
}

#[test]
fn test_new_tab_with_target_navigates_immediately() {
    let mut window = open();
    window.add_tab(Some("rust-lang.org")).unwrap();
    assert_eq!(window.url_bar_text(), "http://rust-lang.org");
}

#[test]
fn test_new_tab_with_empty_target_stays_home() {
    let mut window = open();
    window.add_tab(Some("")).unwrap();
    assert_eq!(window.url_bar_text(), HOME);
}

#[test]
fn test_add_tab_failure_leaves_window_untouched() {
    let mut factory = HeadlessFactory::new();
    factory.fail_next();
    let mut window = BrowserWindow::new(BrowserConfig::default(), factory);
    assert!(window.add_tab(None).is_err());
    assert_eq!(window.tab_count(), 0);
    assert!(window.add_tab(None).is_ok());
    assert_eq!(window.tab_count(), 1);
}

#[test]
fn test_submit_url_bar_prefixes_scheme() {
    let mut window = open();
    window.set_url_bar_text("example.com");
    window.submit_url_bar();
    assert_eq!(window.active_tab().unwrap().current_location(), "http://example.com");
}

#[test]
fn test_submit_url_bar_keeps_explicit_scheme() {
    let mut window = open();
    window.set_url_bar_text("https://example.com/path");
    window.submit_url_bar();
    assert_eq!(
        window.active_tab().unwrap().current_location(),
        "https://example.com/path"
    );
}

#[test]
fn test_close_tab_with_many_removes_one() {
    let mut window = open();
    window.add_tab(None).unwrap();
    window.add_tab(None).unwrap();

    window.close_tab(1).unwrap();
    assert_eq!(window.tab_count(), 2);
}

#[test]
fn test_close_sole_tab_resets_home() {
    let mut window = open();
    window.set_url_bar_text("example.com");
    window.submit_url_bar();

    window.close_tab(0).unwrap();
    assert_eq!(window.tab_count(), 1);
    assert_eq!(window.active_tab().unwrap().current_location(), HOME);
}

#[test]
fn test_close_active_tab_mirrors_new_active() {
    let mut window = open();
    window.add_tab(Some("example.com")).unwrap();
    window.on_tab_activated(0).unwrap();
    window.add_tab(Some("example.org")).unwrap();
    // Tabs: [home, example.com, example.org], active = 2
    window.close_tab(2).unwrap();
    assert_eq!(window.active_index(), Some(1));
    assert_eq!(window.url_bar_text(), "http://example.com");
}

#[test]
fn test_close_background_tab_keeps_typed_url() {
    let mut window = open();
    window.add_tab(Some("example.com")).unwrap();
    window.add_tab(Some("example.org")).unwrap();
    let active = tab_id(&window, 2);
    window.set_url_bar_text("rust-lang.o");

    window.close_tab(0).unwrap();
    assert_eq!(window.active_index(), Some(1));
    assert_eq!(tab_id(&window, 1), active);
    assert_eq!(window.url_bar_text(), "rust-lang.o");
}

#[test]
fn test_tab_activation_mirrors_location_and_label() {
    let mut window = open();
    let first = tab_id(&window, 0);
    window.handle_engine_event(&first, EngineEvent::TitleChanged("Google".into()));
    window.add_tab(Some("example.com")).unwrap();

    window.on_tab_activated(0).unwrap();
    assert_eq!(window.url_bar_text(), HOME);
    assert_eq!(window.window_title(), "Google - Simple Browser");

    window.on_tab_activated(1).unwrap();
    assert_eq!(window.url_bar_text(), "http://example.com");
    assert!(window.on_tab_activated(7).is_err());
}

#[test]
fn test_load_cycle_drives_progress_and_status() {
    let mut window = open();
    let id = tab_id(&window, 0);

    window.handle_engine_event(&id, EngineEvent::LoadStarted);
    assert!(window.is_progress_visible());
    assert_eq!(window.status_text(), Some(STATUS_LOADING));

    window.handle_engine_event(&id, EngineEvent::LoadProgress(42));
    assert_eq!(window.progress(), 42);

    window.handle_engine_event(&id, EngineEvent::TitleChanged("Google".into()));
    finish(&mut window, &id, true, "https://www.google.com/?hl=en");

    assert!(!window.is_progress_visible());
    assert_eq!(window.status_text(), Some(STATUS_LOADED));
    assert_eq!(window.url_bar_text(), "https://www.google.com/?hl=en");
    assert_eq!(window.window_title(), "Google - Simple Browser");
}

#[test]
fn test_failed_load_keeps_url_field() {
    let mut window = open();
    let id = tab_id(&window, 0);
    window.set_url_bar_text("typed.example");

    window.handle_engine_event(&id, EngineEvent::LoadStarted);
    finish(&mut window, &id, false, "http://unreachable.invalid");

    assert_eq!(window.status_text(), Some(STATUS_FAILED));
    assert_eq!(window.url_bar_text(), "typed.example");
    assert!(!window.is_progress_visible());
}

#[test]
fn test_background_load_does_not_touch_url_field() {
    let mut window = open();
    let background = tab_id(&window, 0);
    window.add_tab(Some("example.com")).unwrap();

    finish(&mut window, &background, true, "https://www.google.com/");
    assert_eq!(window.url_bar_text(), "http://example.com");
}

#[test]
fn test_title_change_updates_label_and_truncates() {
    let mut window = open();
    let id = tab_id(&window, 0);
    window.handle_engine_event(
        &id,
        EngineEvent::TitleChanged("The Rust Programming Language".into()),
    );
    assert_eq!(window.tab(0).unwrap().label(), "The Rust Progra...");
    assert_eq!(
        window.window_title(),
        "The Rust Programming Language - Simple Browser"
    );
}

#[test]
fn test_events_for_closed_tab_are_dropped() {
    let mut window = open();
    window.add_tab(None).unwrap();
    let closed = tab_id(&window, 1);
    window.close_tab(1).unwrap();

    window.handle_engine_event(&closed, EngineEvent::LoadStarted);
    assert!(!window.is_progress_visible());
    assert_eq!(window.status_text(), None);
}

#[test]
fn test_events_for_unknown_tab_change_nothing() {
    let mut window = open();
    window.set_url_bar_text("typed");
    finish(&mut window, "no-such-tab", true, "https://example.com/");
    assert_eq!(window.url_bar_text(), "typed");
    assert_eq!(window.status_text(), None);
}

#[test]
fn test_status_message_expires() {
    let mut window = open();
    let id = tab_id(&window, 0);
    finish(&mut window, &id, true, HOME);

    let deadline = window.next_deadline().expect("timed status");
    assert!(!window.tick(deadline - Duration::from_millis(1)));
    assert_eq!(window.status_text(), Some(STATUS_LOADED));
    assert!(window.tick(deadline));
    assert_eq!(window.status_text(), None);
    assert!(window.next_deadline().is_none());
}

#[test]
fn test_loading_status_has_no_deadline() {
    let mut window = open();
    let id = tab_id(&window, 0);
    window.handle_engine_event(&id, EngineEvent::LoadStarted);
    assert!(window.next_deadline().is_none());
    assert!(!window.tick(Instant::now() + Duration::from_secs(60)));
}

#[test]
fn test_toolbar_actions_reach_active_tab() {
    let mut window = open();
    window.set_url_bar_text("a.example");
    window.submit_url_bar();
    window.set_url_bar_text("b.example");
    window.submit_url_bar();

    window.back();
    assert_eq!(window.active_tab().unwrap().current_location(), "http://a.example");
    window.forward();
    assert_eq!(window.active_tab().unwrap().current_location(), "http://b.example");
    window.reload();
    assert_eq!(window.active_tab().unwrap().engine().reload_count(), 1);
    window.home();
    assert_eq!(window.active_tab().unwrap().current_location(), HOME);
}

#[test]
fn test_toolbar_actions_without_tabs_are_noops() {
    let mut window = BrowserWindow::new(BrowserConfig::default(), HeadlessFactory::new());
    window.back();
    window.forward();
    window.reload();
    window.home();
    window.submit_url_bar();
    assert_eq!(window.tab_count(), 0);
}

#[test]
fn test_custom_home_url() {
    let config = BrowserConfig {
        home_url: "https://example.org".to_string(),
        ..BrowserConfig::default()
    };
    let mut window = BrowserWindow::open(config, HeadlessFactory::new()).unwrap();
    assert_eq!(window.url_bar_text(), "https://example.org");
    window.set_url_bar_text("elsewhere.test");
    window.submit_url_bar();
    window.close_tab(0).unwrap();
    assert_eq!(
        window.active_tab().unwrap().current_location(),
        "https://example.org"
    );
}

#[test]
fn test_chrome_state_snapshot() {
    let mut window = open();
    window.add_tab(Some("example.com")).unwrap();
    let state = window.chrome_state();

    assert_eq!(state.tabs.len(), 2);
    assert_eq!(state.active_index, Some(1));
    assert!(!state.tabs[0].active);
    assert!(state.tabs[1].active);
    assert_eq!(state.tabs[1].url, "http://example.com");
    assert_eq!(state.url_bar, "http://example.com");
    assert_eq!(state.window_title, window.window_title());
}
