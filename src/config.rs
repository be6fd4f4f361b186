//! Generator configuration
//!
//! Stores defaults in `~/.config/tagged-grammar/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grammar::{GrammarOptions, DEFAULT_SCOPE_NAME, DEFAULT_TARGET_SCOPES};

/// Generator settings that persist across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Scope name of the generated grammar
    #[serde(default = "default_scope_name")]
    pub scope_name: String,
    /// Host scopes the grammar injects into (e.g. "source.yaml")
    #[serde(default = "default_target_scopes")]
    pub target_scopes: Vec<String>,
    /// Where the grammar is written when no `--output` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

fn default_scope_name() -> String {
    DEFAULT_SCOPE_NAME.to_string()
}

fn default_target_scopes() -> Vec<String> {
    DEFAULT_TARGET_SCOPES.iter().map(|s| s.to_string()).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scope_name: default_scope_name(),
            target_scopes: default_target_scopes(),
            output: None,
        }
    }
}

impl GeneratorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit file; errors are not swallowed
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Parse config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
        if config.target_scopes.is_empty() {
            return Err("target_scopes must not be empty".to_string());
        }
        Ok(config)
    }

    /// Builder options derived from this config
    pub fn grammar_options(&self) -> GrammarOptions {
        GrammarOptions {
            scope_name: self.scope_name.clone(),
            target_scopes: self.target_scopes.clone(),
        }
    }
}
