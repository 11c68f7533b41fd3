//! A single browser tab: one engine plus the bookkeeping the tab strip needs.

use log::{debug, warn};

use crate::engine::Engine;
use crate::services::navigation::{self, NEW_TAB_LABEL};
use crate::types::engine::{EngineEvent, WindowNotice};
use crate::types::errors::EngineError;
use crate::types::tab::TabSummary;

/// A tab owning its engine.
///
/// Engine events go in through [`BrowserTab::handle_engine_event`] and come
/// out as [`WindowNotice`]s. The tab never looks at window state.
#[derive(Debug)]
pub struct BrowserTab<E: Engine> {
    id: String,
    engine: E,
    title: String,
    label: String,
    loading: bool,
    progress: u8,
}

impl<E: Engine> BrowserTab<E> {
    pub fn new(id: impl Into<String>, engine: E) -> Self {
        Self {
            id: id.into(),
            engine,
            title: String::new(),
            label: NEW_TAB_LABEL.to_string(),
            loading: false,
            progress: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Last title reported by the engine, empty until the first one arrives.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tab-strip label: the truncated title, or "New Tab".
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Normalizes `target` and asks the engine to load it.
    pub fn navigate(&mut self, target: &str) {
        let url = navigation::normalize_url(target);
        debug!("tab {} navigate {}", self.id, url);
        let result = self.engine.load_url(&url);
        self.log_failure("navigate", result);
    }

    pub fn go_back(&mut self) {
        let result = self.engine.back();
        self.log_failure("back", result);
    }

    pub fn go_forward(&mut self) {
        let result = self.engine.forward();
        self.log_failure("forward", result);
    }

    pub fn reload(&mut self) {
        let result = self.engine.reload();
        self.log_failure("reload", result);
    }

    pub fn current_location(&self) -> String {
        self.engine.url()
    }

    /// Updates tab state from an engine event and returns what the window must do.
    pub fn handle_engine_event(&mut self, event: EngineEvent) -> WindowNotice {
        match event {
            EngineEvent::LoadStarted => {
                self.loading = true;
                self.progress = 0;
                WindowNotice::Busy
            }
            EngineEvent::LoadProgress(value) => {
                self.progress = value.min(100);
                WindowNotice::Progress(self.progress)
            }
            EngineEvent::LoadFinished { success, url } => {
                self.loading = false;
                self.progress = 100;
                WindowNotice::LoadFinished {
                    success,
                    url,
                    title: self.title.clone(),
                }
            }
            EngineEvent::TitleChanged(title) => {
                self.label = navigation::tab_label(&title);
                self.title = title;
                WindowNotice::TitleChanged {
                    title: self.title.clone(),
                    label: self.label.clone(),
                }
            }
        }
    }

    pub fn summary(&self, active: bool) -> TabSummary {
        TabSummary {
            id: self.id.clone(),
            label: self.label.clone(),
            title: self.title.clone(),
            url: self.current_location(),
            loading: self.loading,
            active,
        }
    }

    fn log_failure(&self, action: &str, result: Result<(), EngineError>) {
        if let Err(e) = result {
            warn!("tab {} {} failed: {}", self.id, action, e);
        }
    }
}
