//! Simple Browser: a minimal tabbed web browser shell.
//!
//! Entry point: opens the browser window and runs until it is closed.
//! When built without the `gui` feature, runs a console demo of the window
//! model on a headless engine.

use log::warn;

use simple_browser::services::config_loader::{ConfigLoader, ConfigLoaderTrait};
use simple_browser::types::config::BrowserConfig;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Reads the optional config file. A broken file is reported and ignored.
fn load_config() -> BrowserConfig {
    let loader = ConfigLoader::default();
    loader.load().unwrap_or_else(|e| {
        warn!("{} ({}), using defaults", e, loader.config_path().display());
        BrowserConfig::default()
    })
}

#[cfg(feature = "gui")]
fn main() {
    init_logging();
    let config = load_config();
    if let Err(e) = simple_browser::ui::webview_app::run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    use simple_browser::app::BrowserWindow;
    use simple_browser::engine::headless::HeadlessFactory;
    use simple_browser::types::engine::EngineEvent;

    init_logging();
    let config = load_config();

    println!();
    println!("  Simple Browser v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!();

    let mut window = match BrowserWindow::open(config, HeadlessFactory::new()) {
        Ok(window) => window,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    show(&window, "startup");

    let first = window.tabs()[0].id().to_string();
    window.handle_engine_event(&first, EngineEvent::LoadStarted);
    window.handle_engine_event(&first, EngineEvent::LoadProgress(60));
    window.handle_engine_event(&first, EngineEvent::TitleChanged("Google".into()));
    window.handle_engine_event(
        &first,
        EngineEvent::LoadFinished {
            success: true,
            url: "https://www.google.com/".into(),
        },
    );
    show(&window, "home page loaded");

    if let Err(e) = window.add_tab(None) {
        log::error!("{}", e);
    }
    window.set_url_bar_text("example.com");
    window.submit_url_bar();
    show(&window, "second tab, typed example.com");

    if let Err(e) = window.close_tab(1) {
        log::error!("{}", e);
    }
    if let Err(e) = window.close_tab(0) {
        log::error!("{}", e);
    }
    show(&window, "closed both tabs");
}

#[cfg(not(feature = "gui"))]
fn show<F: simple_browser::engine::EngineFactory>(
    window: &simple_browser::app::BrowserWindow<F>,
    step: &str,
) {
    println!("── {} ──", step);
    println!("  title:  {}", window.window_title());
    println!("  url:    {}", window.url_bar_text());
    println!("  status: {}", window.status_text().unwrap_or(""));
    for (i, tab) in window.tabs().iter().enumerate() {
        let marker = if Some(i) == window.active_index() { "*" } else { " " };
        println!("  {} [{}] {:<18} {}", marker, i, tab.label(), tab.current_location());
    }
    println!();
}
