//! Seam between the browser shell and the embedded web view.
//!
//! The shell never renders or fetches anything itself. A tab drives an
//! [`Engine`] with plain requests and learns about progress only through the
//! [`EngineEvent`](crate::types::engine::EngineEvent)s the engine raises.

pub mod headless;

use crate::types::errors::EngineError;

/// One embedded web view, exclusively owned by a tab.
pub trait Engine {
    /// Requests a load of `url`. The address is already normalized.
    fn load_url(&mut self, url: &str) -> Result<(), EngineError>;
    fn back(&mut self) -> Result<(), EngineError>;
    fn forward(&mut self) -> Result<(), EngineError>;
    fn reload(&mut self) -> Result<(), EngineError>;
    /// Address the view is currently showing or loading.
    fn url(&self) -> String;
}

/// Creates engines for new tabs.
///
/// `tab_id` lets the engine tag the events it raises so the window can route
/// them back to the owning tab.
pub trait EngineFactory {
    type Engine: Engine;

    fn create(&mut self, tab_id: &str, url: &str) -> Result<Self::Engine, EngineError>;
}
