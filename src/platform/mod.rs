// Simple Browser platform paths
// Only the config directory is needed: the browser keeps no data or cache of its own.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/simple-browser` (or `$XDG_CONFIG_HOME/simple-browser`)
/// - **macOS**: `~/Library/Application Support/SimpleBrowser`
/// - **Windows**: `%APPDATA%/SimpleBrowser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".simple-browser")
    }
}
