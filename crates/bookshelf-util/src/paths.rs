//! Default paths for bookshelf
//!
//! Paths are user-writable by default:
//! - Config: `$XDG_CONFIG_HOME/bookshelf/config.toml` or `~/.config/bookshelf/config.toml`
//! - Data: `$XDG_DATA_HOME/bookshelf` or `~/.local/share/bookshelf`, unless
//!   `$BOOKSHELF_DATA_DIR` is given to the CLI

use std::path::PathBuf;

/// Default name of the library file inside the data directory
pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Application subdirectory name
const APP_DIR: &str = "bookshelf";

/// Get the default configuration file path.
///
/// Order of precedence:
/// 1. `$XDG_CONFIG_HOME/bookshelf/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/bookshelf/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from("/tmp").join(APP_DIR).join(CONFIG_FILENAME)
}

/// Get the default data directory.
/// `BOOKSHELF_DATA_DIR` is not consulted here; the CLI applies it.
///
/// Order of precedence:
/// 1. `$XDG_DATA_HOME/bookshelf` (if XDG_DATA_HOME is set)
/// 2. `~/.local/share/bookshelf` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}
