//! Registry of taggable languages
//!
//! Provides YAML-based language registries with a compile-time embedded
//! default and an optional user-defined override.
//!
//! Registry loading priority:
//! 1. Explicit path (e.g. `--languages my-languages.yaml`)
//! 2. User config: `~/.config/tagged-grammar/languages.yaml`
//! 3. Embedded: `languages/builtin.yaml` compiled into the binary

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::language::LanguageSpec;

// Embed the default registry at compile time
pub const BUILTIN_LANGUAGES_YAML: &str = include_str!("../languages/builtin.yaml");

/// Root structure of a registry YAML file
#[derive(Debug, Deserialize)]
struct RegistryFile {
    languages: Vec<LanguageSpec>,
}

/// Errors raised while loading or validating a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    IoError(String),
    ParseError(String),
    EmptyName,
    EmptyIdentifiers { language: String },
    EmptySource { language: String },
    DuplicateName(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::IoError(msg) => write!(f, "IO error: {}", msg),
            RegistryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RegistryError::EmptyName => write!(f, "Language with an empty name"),
            RegistryError::EmptyIdentifiers { language } => {
                write!(f, "Language '{}' has no identifiers", language)
            }
            RegistryError::EmptySource { language } => {
                write!(f, "Language '{}' has no source grammar", language)
            }
            RegistryError::DuplicateName(name) => {
                write!(f, "Language '{}' is declared more than once", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// An alias claimed by more than one language
///
/// Only the first language in registry order ever matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    pub alias: String,
    /// Language that wins (earliest in registry order)
    pub winner: String,
    /// Language whose claim is never reached
    pub shadowed: String,
}

/// Ordered collection of language specs
///
/// Order is significant: it is the precedence used when aliases overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    languages: Vec<LanguageSpec>,
}

impl Registry {
    /// Wrap specs without validating them
    pub fn new(languages: Vec<LanguageSpec>) -> Self {
        Self { languages }
    }

    /// Parse and validate a registry from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile =
            serde_yaml::from_str(yaml).map_err(|e| RegistryError::ParseError(e.to_string()))?;
        let registry = Self::new(file.languages);
        registry.validate()?;
        Ok(registry)
    }

    /// Load and validate a registry from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    /// The registry embedded in the binary
    pub fn builtin() -> Self {
        match Self::from_yaml(BUILTIN_LANGUAGES_YAML) {
            Ok(registry) => registry,
            Err(e) => panic!("builtin language registry is invalid: {}", e),
        }
    }

    /// Load registry with priority: explicit path → user file → builtin
    pub fn load(explicit: Option<&Path>) -> Result<Self, RegistryError> {
        if let Some(path) = explicit {
            tracing::info!("Loading language registry from {}", path.display());
            return Self::from_file(path);
        }

        if let Some(user_path) = crate::config_paths::languages_file() {
            if user_path.exists() {
                tracing::info!("Loading user language registry from {}", user_path.display());
                return Self::from_file(&user_path);
            }
        }

        tracing::debug!("Using builtin language registry");
        Ok(Self::builtin())
    }

    /// Check the preconditions the grammar builder relies on
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut names = HashSet::new();

        for language in &self.languages {
            if language.name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if language.identifiers.is_empty()
                || language.identifiers.iter().any(|id| id.is_empty())
            {
                return Err(RegistryError::EmptyIdentifiers {
                    language: language.name.clone(),
                });
            }
            if language.source.is_empty() {
                return Err(RegistryError::EmptySource {
                    language: language.name.clone(),
                });
            }
            if !names.insert(language.name.as_str()) {
                return Err(RegistryError::DuplicateName(language.name.clone()));
            }
        }

        Ok(())
    }

    /// Aliases declared by more than one language, in registry order
    pub fn alias_conflicts(&self) -> Vec<AliasConflict> {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        let mut conflicts = Vec::new();

        for language in &self.languages {
            for alias in &language.identifiers {
                match owners.get(alias.as_str()) {
                    Some(&winner) if winner != language.name => {
                        conflicts.push(AliasConflict {
                            alias: alias.clone(),
                            winner: winner.to_string(),
                            shadowed: language.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(alias, &language.name);
                    }
                }
            }
        }

        conflicts
    }

    /// Find a language by canonical name
    pub fn get(&self, name: &str) -> Option<&LanguageSpec> {
        self.languages.iter().find(|l| l.name == name)
    }

    /// First language (in precedence order) answering to the alias
    pub fn resolve_alias(&self, alias: &str) -> Option<&LanguageSpec> {
        self.languages.iter().find(|l| l.answers_to(alias))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageSpec> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a LanguageSpec;
    type IntoIter = std::slice::Iter<'a, LanguageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
