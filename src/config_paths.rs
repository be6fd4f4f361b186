//! Centralized configuration paths for tagged-grammar
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/tagged-grammar/`
//! - Windows: `%APPDATA%\tagged-grammar\`
//!
//! This module is the single source of truth for config paths.

use std::{env, path::PathBuf};

const APP_DIR: &str = "tagged-grammar";

/// Base config directory for tagged-grammar
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/tagged-grammar`
///   - Else: `~/.config/tagged-grammar`
///
/// Windows:
///   - `%APPDATA%\tagged-grammar`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/tagged-grammar/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/tagged-grammar/languages.yaml`
pub fn languages_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("languages.yaml"))
}
