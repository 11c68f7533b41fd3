use thiserror::Error;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The provided tab index is out of bounds.
    #[error("Invalid tab index: {0}")]
    InvalidIndex(usize),
}

// === EngineError ===

/// Errors reported by an embedded web view when a request cannot be issued.
///
/// Load failures are not errors: they arrive as `EngineEvent::LoadFinished`
/// with `success == false`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Creating the web view for a tab failed.
    #[error("Failed to create web view: {0}")]
    Create(String),
    /// The web view rejected a navigation request.
    #[error("Navigation request failed: {0}")]
    Navigation(String),
    /// Evaluating a script inside the web view failed.
    #[error("Script evaluation failed: {0}")]
    Script(String),
}

// === ConfigError ===

/// Errors related to loading the browser configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File system read failed.
    #[error("Config I/O error: {0}")]
    Io(String),
    /// The file exists but is not valid configuration JSON.
    #[error("Config parse error: {0}")]
    Parse(String),
}

// === UiError ===

/// Errors raised while building the native window and its web views.
#[derive(Debug, Error)]
pub enum UiError {
    /// The top-level window could not be created.
    #[error("Window creation failed: {0}")]
    Window(String),
    /// A browser chrome web view could not be created.
    #[error("WebView creation failed: {0}")]
    WebView(String),
    /// The first tab could not be opened.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
