// Config: $XDG_CONFIG_HOME/simple-browser, falling back to ~/.config/simple-browser

use std::env;
use std::path::PathBuf;

pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("simple-browser")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("simple-browser")
    }
}
