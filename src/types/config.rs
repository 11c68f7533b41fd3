use serde::{Deserialize, Serialize};

/// Startup configuration for the browser window.
///
/// Every field has a default, so a config file only needs the keys it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Address loaded by new tabs, the home action and a reset last tab.
    pub home_url: String,
    /// Application name, used alone at startup and as the page-title suffix.
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub window_x: i32,
    pub window_y: i32,
    /// How long "Page loaded" / "Page failed to load" stay in the status bar.
    pub status_timeout_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            window_title: "Simple Browser".to_string(),
            window_width: 1024,
            window_height: 768,
            window_x: 100,
            window_y: 100,
            status_timeout_ms: 2000,
        }
    }
}
