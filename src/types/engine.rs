use serde::{Deserialize, Serialize};

/// Lifecycle notification raised by an embedded web view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum EngineEvent {
    LoadStarted,
    /// Percentage in `0..=100`. Larger values are clamped by the receiver.
    LoadProgress(u8),
    /// `url` is the address the engine ended up at, after redirects.
    LoadFinished { success: bool, url: String },
    TitleChanged(String),
}

/// One-way notification from a tab to the window that owns it.
///
/// A tab produces these from engine events without looking at window state.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowNotice {
    /// Show the busy indicator and the "Loading..." status.
    Busy,
    Progress(u8),
    LoadFinished {
        success: bool,
        url: String,
        title: String,
    },
    TitleChanged {
        title: String,
        label: String,
    },
}
