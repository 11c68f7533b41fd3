//! An engine with no view: it only keeps a navigation history.
//!
//! Backs the console demo and the tests. Load events never fire on their
//! own; callers feed [`EngineEvent`](crate::types::engine::EngineEvent)s to
//! the window to simulate the engine.

use log::trace;

use super::{Engine, EngineFactory};
use crate::types::errors::EngineError;

/// History-only engine.
#[derive(Debug, Default, Clone)]
pub struct HeadlessEngine {
    history: Vec<String>,
    cursor: usize,
    reloads: usize,
}

impl HeadlessEngine {
    pub fn new(url: &str) -> Self {
        Self {
            history: vec![url.to_string()],
            cursor: 0,
            reloads: 0,
        }
    }

    /// Every address loaded, oldest first. Entries after a back-then-load are dropped.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }
}

impl Engine for HeadlessEngine {
    fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(url.to_string());
        self.cursor = self.history.len() - 1;
        trace!("headless load {}", url);
        Ok(())
    }

    fn back(&mut self) -> Result<(), EngineError> {
        if self.can_go_back() {
            self.cursor -= 1;
        }
        Ok(())
    }

    fn forward(&mut self) -> Result<(), EngineError> {
        if self.can_go_forward() {
            self.cursor += 1;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        self.reloads += 1;
        Ok(())
    }

    fn url(&self) -> String {
        self.history.get(self.cursor).cloned().unwrap_or_default()
    }
}

/// Factory handing out [`HeadlessEngine`]s.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    created: usize,
    fail_next: bool,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of engines created so far.
    pub fn created(&self) -> usize {
        self.created
    }

    /// Makes the next `create` call fail, as a web view that cannot be built would.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl EngineFactory for HeadlessFactory {
    type Engine = HeadlessEngine;

    fn create(&mut self, tab_id: &str, url: &str) -> Result<HeadlessEngine, EngineError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(EngineError::Create(format!("refused view for tab {}", tab_id)));
        }
        self.created += 1;
        Ok(HeadlessEngine::new(url))
    }
}
