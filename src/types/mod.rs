// Simple Browser shared type definitions
// Plain data passed between the window model, the tab manager and the UI layer.

pub mod chrome;
pub mod config;
pub mod engine;
pub mod errors;
pub mod tab;
