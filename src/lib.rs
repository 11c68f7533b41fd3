//! Simple Browser: a minimal tabbed web browser shell.
//!
//! Page loading and rendering belong to the platform web view. This crate
//! only keeps the tab strip, toolbar and status bar in step with it.

pub mod app;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod services;
pub mod tab;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
