//! Browser window model.
//!
//! Holds everything the window shows (tab strip, URL field, progress bar,
//! status line, title) and wires user actions to the active tab. The UI
//! layer only forwards input here and redraws from [`BrowserWindow::chrome_state`].

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::engine::EngineFactory;
use crate::managers::tab_manager::{CloseOutcome, TabManager, TabManagerTrait};
use crate::services::navigation;
use crate::tab::BrowserTab;
use crate::types::chrome::{ChromeCommand, ChromeState};
use crate::types::config::BrowserConfig;
use crate::types::engine::{EngineEvent, WindowNotice};
use crate::types::errors::{EngineError, TabError};

pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_LOADED: &str = "Page loaded";
pub const STATUS_FAILED: &str = "Page failed to load";

/// Status-bar text, optionally cleared at a deadline.
#[derive(Debug, Clone, PartialEq)]
struct StatusMessage {
    text: String,
    expires_at: Option<Instant>,
}

/// The single top-level browser window.
pub struct BrowserWindow<F: EngineFactory> {
    config: BrowserConfig,
    factory: F,
    tabs: TabManager<F::Engine>,
    url_bar: String,
    progress: u8,
    progress_visible: bool,
    status: Option<StatusMessage>,
    title: String,
}

impl<F: EngineFactory> BrowserWindow<F> {
    /// Creates a window with no tabs. Use [`BrowserWindow::open`] for the
    /// normal startup state.
    pub fn new(config: BrowserConfig, factory: F) -> Self {
        let title = config.window_title.clone();
        Self {
            config,
            factory,
            tabs: TabManager::new(),
            url_bar: String::new(),
            progress: 0,
            progress_visible: false,
            status: None,
            title,
        }
    }

    /// Creates the window with its first tab pointed at the home page.
    pub fn open(config: BrowserConfig, factory: F) -> Result<Self, EngineError> {
        let mut window = Self::new(config, factory);
        window.add_tab(None)?;
        Ok(window)
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    // ─── Tab strip ───

    /// Opens a tab at the home page, then at `target` if one is given.
    /// The new tab is appended and made active. Returns its id.
    pub fn add_tab(&mut self, target: Option<&str>) -> Result<String, EngineError> {
        let id = Uuid::new_v4().to_string();
        let engine = self.factory.create(&id, &self.config.home_url)?;
        let mut tab = BrowserTab::new(id.clone(), engine);

        if let Some(target) = target.filter(|t| !t.is_empty()) {
            tab.navigate(target);
        }

        let index = self.tabs.add_tab(tab, true);
        info!("opened tab {} at index {}", id, index);
        self.mirror_active();
        Ok(id)
    }

    /// Closes the tab at `index`, or sends the last remaining tab home.
    /// The URL field is only rewritten when a different tab becomes active.
    pub fn close_tab(&mut self, index: usize) -> Result<(), TabError> {
        let before = self.active_tab_id();
        match self.tabs.close_tab(index, &self.config.home_url)? {
            CloseOutcome::Removed(_) => {
                if self.active_tab_id() != before {
                    self.mirror_active();
                }
            }
            CloseOutcome::Reset => debug!("last tab reset to home"),
        }
        Ok(())
    }

    fn active_tab_id(&self) -> Option<String> {
        self.tabs.get_active_tab().map(|t| t.id().to_string())
    }

    /// Makes the tab at `index` active and mirrors it into the URL field and title.
    pub fn on_tab_activated(&mut self, index: usize) -> Result<(), TabError> {
        self.tabs.switch_tab(index)?;
        self.mirror_active();
        Ok(())
    }

    fn mirror_active(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab() {
            self.url_bar = tab.current_location();
            self.title = navigation::window_title(tab.label(), &self.config.window_title);
        }
    }

    // ─── Toolbar ───

    /// Replaces the URL-field text, as typing does.
    pub fn set_url_bar_text(&mut self, text: &str) {
        self.url_bar = text.to_string();
    }

    /// Navigates the active tab to whatever the URL field holds.
    pub fn submit_url_bar(&mut self) {
        let text = self.url_bar.clone();
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.navigate(&text);
        }
    }

    pub fn back(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.go_back();
        }
    }

    pub fn forward(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.go_forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.reload();
        }
    }

    pub fn home(&mut self) {
        let home = self.config.home_url.clone();
        if let Some(tab) = self.tabs.get_active_tab_mut() {
            tab.navigate(&home);
        }
    }

    /// Dispatches a chrome action. Failures are logged; the chrome simply
    /// redraws from the unchanged state.
    pub fn apply_command(&mut self, cmd: ChromeCommand) {
        let result = match cmd {
            ChromeCommand::Ready => Ok(()),
            ChromeCommand::Back => {
                self.back();
                Ok(())
            }
            ChromeCommand::Forward => {
                self.forward();
                Ok(())
            }
            ChromeCommand::Reload => {
                self.reload();
                Ok(())
            }
            ChromeCommand::Home => {
                self.home();
                Ok(())
            }
            ChromeCommand::NewTab => self.add_tab(None).map(|_| ()).map_err(|e| e.to_string()),
            ChromeCommand::Navigate { url } => {
                self.set_url_bar_text(&url);
                self.submit_url_bar();
                Ok(())
            }
            ChromeCommand::SwitchTab { index } => {
                self.on_tab_activated(index).map_err(|e| e.to_string())
            }
            ChromeCommand::CloseTab { index } => self.close_tab(index).map_err(|e| e.to_string()),
        };
        if let Err(e) = result {
            warn!("chrome command failed: {}", e);
        }
    }

    // ─── Engine notifications ───

    /// Applies an engine event raised by the tab with `tab_id`.
    ///
    /// Events from tabs that were already closed are dropped.
    pub fn handle_engine_event(&mut self, tab_id: &str, event: EngineEvent) {
        let index = match self.tabs.find_index(tab_id) {
            Ok(index) => index,
            Err(e) => {
                debug!("dropping {:?}: {}", event, e);
                return;
            }
        };
        let is_active = self.tabs.active_index() == Some(index);
        let Some(tab) = self.tabs.get_tab_mut(index) else {
            return;
        };
        let notice = tab.handle_engine_event(event);
        self.apply_notice(notice, is_active);
    }

    fn apply_notice(&mut self, notice: WindowNotice, is_active: bool) {
        match notice {
            WindowNotice::Busy => {
                self.progress = 0;
                self.progress_visible = true;
                self.show_status(STATUS_LOADING, None);
            }
            WindowNotice::Progress(value) => {
                self.progress = value;
            }
            WindowNotice::LoadFinished {
                success,
                url,
                title,
            } => {
                self.progress_visible = false;
                let timeout = Some(Duration::from_millis(self.config.status_timeout_ms));
                if success {
                    info!("loaded {}", url);
                    self.show_status(STATUS_LOADED, timeout);
                    if is_active {
                        self.url_bar = url;
                        self.title = navigation::window_title(&title, &self.config.window_title);
                    }
                } else {
                    info!("failed to load {}", url);
                    self.show_status(STATUS_FAILED, timeout);
                }
            }
            WindowNotice::TitleChanged { title, .. } => {
                if is_active {
                    self.title = navigation::window_title(&title, &self.config.window_title);
                }
            }
        }
    }

    // ─── Status bar ───

    /// Shows `text` in the status bar, cleared after `timeout` if given.
    pub fn show_status(&mut self, text: &str, timeout: Option<Duration>) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            expires_at: timeout.map(|t| Instant::now() + t),
        });
    }

    /// Clears an expired status message. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .status
            .as_ref()
            .and_then(|s| s.expires_at)
            .is_some_and(|deadline| deadline <= now);
        if expired {
            self.status = None;
        }
        expired
    }

    /// When the current status message is due to disappear.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.status.as_ref().and_then(|s| s.expires_at)
    }

    // ─── Accessors ───

    pub fn tab_count(&self) -> usize {
        self.tabs.tab_count()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.active_index()
    }

    pub fn active_tab(&self) -> Option<&BrowserTab<F::Engine>> {
        self.tabs.get_active_tab()
    }

    pub fn tab(&self, index: usize) -> Option<&BrowserTab<F::Engine>> {
        self.tabs.get_tab(index)
    }

    pub fn tabs(&self) -> &[BrowserTab<F::Engine>] {
        self.tabs.get_all_tabs()
    }

    pub fn url_bar_text(&self) -> &str {
        &self.url_bar
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_progress_visible(&self) -> bool {
        self.progress_visible
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn window_title(&self) -> &str {
        &self.title
    }

    /// Snapshot for redrawing the chrome views.
    pub fn chrome_state(&self) -> ChromeState {
        let active = self.tabs.active_index();
        ChromeState {
            tabs: self
                .tabs
                .get_all_tabs()
                .iter()
                .enumerate()
                .map(|(i, t)| t.summary(Some(i) == active))
                .collect(),
            active_index: active,
            url_bar: self.url_bar.clone(),
            progress: self.progress,
            progress_visible: self.progress_visible,
            status: self.status_text().map(str::to_string),
            window_title: self.title.clone(),
        }
    }
}
