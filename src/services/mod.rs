// Simple Browser services
// Stateless helpers: address normalization, tab labels and config loading.

pub mod config_loader;
pub mod navigation;
