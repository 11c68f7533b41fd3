use serde::{Deserialize, Serialize};

use super::tab::TabSummary;

/// Everything the chrome views (tab strip, toolbar, status bar) need to redraw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChromeState {
    pub tabs: Vec<TabSummary>,
    pub active_index: Option<usize>,
    pub url_bar: String,
    pub progress: u8,
    pub progress_visible: bool,
    pub status: Option<String>,
    pub window_title: String,
}

/// User action posted by the chrome views over IPC.
///
/// Wire form is a JSON object tagged by `cmd`, e.g. `{"cmd":"close_tab","index":1}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    /// Chrome page finished loading and wants the current state.
    Ready,
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    /// Enter pressed in the URL field.
    Navigate { url: String },
    SwitchTab { index: usize },
    CloseTab { index: usize },
}

impl ChromeCommand {
    /// Parses an IPC message body. Returns `None` for anything unrecognized.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
