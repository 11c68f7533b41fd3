// Simple Browser state managers
// Managers own stateful collections; currently just the tab strip.

pub mod tab_manager;
