use log::info;

use crate::engine::Engine;
use crate::tab::BrowserTab;
use crate::types::errors::TabError;

/// What `close_tab` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab with this id was removed and its engine dropped.
    Removed(String),
    /// The tab was the last one, so it was sent home instead of closed.
    Reset,
}

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    type Engine: Engine;

    fn add_tab(&mut self, tab: BrowserTab<Self::Engine>, active: bool) -> usize;
    fn close_tab(&mut self, index: usize, home_url: &str) -> Result<CloseOutcome, TabError>;
    fn switch_tab(&mut self, index: usize) -> Result<(), TabError>;
    fn get_tab(&self, index: usize) -> Option<&BrowserTab<Self::Engine>>;
    fn get_tab_mut(&mut self, index: usize) -> Option<&mut BrowserTab<Self::Engine>>;
    fn find_index(&self, tab_id: &str) -> Result<usize, TabError>;
    fn get_all_tabs(&self) -> &[BrowserTab<Self::Engine>];
    fn get_active_tab(&self) -> Option<&BrowserTab<Self::Engine>>;
    fn get_active_tab_mut(&mut self) -> Option<&mut BrowserTab<Self::Engine>>;
    fn active_index(&self) -> Option<usize>;
    fn tab_count(&self) -> usize;
}

/// Ordered tab strip. Insertion order is display order.
pub struct TabManager<E: Engine> {
    tabs: Vec<BrowserTab<E>>,
    active: Option<usize>,
}

impl<E: Engine> TabManager<E> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), TabError> {
        if index < self.tabs.len() {
            Ok(())
        } else {
            Err(TabError::InvalidIndex(index))
        }
    }
}

impl<E: Engine> Default for TabManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> TabManagerTrait for TabManager<E> {
    type Engine = E;

    /// Appends a tab. Returns its index.
    /// The first tab always becomes active.
    fn add_tab(&mut self, tab: BrowserTab<E>, active: bool) -> usize {
        self.tabs.push(tab);
        let index = self.tabs.len() - 1;
        if active || self.active.is_none() {
            self.active = Some(index);
        }
        index
    }

    /// Close the tab at `index`. If it's the active tab, the tab to its right
    /// takes over, or the one to its left when it was last in the strip.
    /// The last remaining tab is never removed: it navigates to `home_url`.
    fn close_tab(&mut self, index: usize, home_url: &str) -> Result<CloseOutcome, TabError> {
        self.check_index(index)?;

        if self.tabs.len() == 1 {
            self.tabs[0].navigate(home_url);
            self.active = Some(0);
            return Ok(CloseOutcome::Reset);
        }

        let removed = self.tabs.remove(index);
        info!("closed tab {}", removed.id());

        if let Some(active) = self.active {
            let new_active = if index < active {
                active - 1
            } else if index == active {
                index.min(self.tabs.len() - 1)
            } else {
                active
            };
            self.active = Some(new_active);
        }

        Ok(CloseOutcome::Removed(removed.id().to_string()))
    }

    fn switch_tab(&mut self, index: usize) -> Result<(), TabError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    fn get_tab(&self, index: usize) -> Option<&BrowserTab<E>> {
        self.tabs.get(index)
    }

    fn get_tab_mut(&mut self, index: usize) -> Option<&mut BrowserTab<E>> {
        self.tabs.get_mut(index)
    }

    fn find_index(&self, tab_id: &str) -> Result<usize, TabError> {
        self.tabs
            .iter()
            .position(|t| t.id() == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    fn get_all_tabs(&self) -> &[BrowserTab<E>] {
        &self.tabs
    }

    fn get_active_tab(&self) -> Option<&BrowserTab<E>> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    fn get_active_tab_mut(&mut self) -> Option<&mut BrowserTab<E>> {
        self.active.and_then(|i| self.tabs.get_mut(i))
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
