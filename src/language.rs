//! Embedded language descriptions
//!
//! A [`LanguageSpec`] names a sub-language, the aliases that may follow the
//! `#` of a tagging comment, and the grammar scopes that highlight it.

use serde::{Deserialize, Serialize};

/// Prefix of every repository key generated for a language
pub const REPOSITORY_PREFIX: &str = "commentTaggedString";

/// One or more grammar references (e.g. `source.python`)
///
/// Registries may write either a single scalar or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    One(String),
    Many(Vec<String>),
}

impl SourceRef {
    /// Iterate the referenced scopes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            SourceRef::One(source) => std::slice::from_ref(source),
            SourceRef::Many(sources) => sources,
        };
        slice.iter().map(String::as_str)
    }

    /// True when no reference (or only blank ones) is present
    pub fn is_empty(&self) -> bool {
        self.iter().all(|s| s.trim().is_empty())
    }
}

impl From<&str> for SourceRef {
    fn from(source: &str) -> Self {
        SourceRef::One(source.to_string())
    }
}

impl From<Vec<&str>> for SourceRef {
    fn from(sources: Vec<&str>) -> Self {
        SourceRef::Many(sources.into_iter().map(str::to_string).collect())
    }
}

/// A sub-language that can be tagged inside a block scalar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    /// Canonical identifier (e.g. "python"), unique within a registry
    pub name: String,
    /// Aliases accepted after the comment marker (e.g. "python", "py")
    pub identifiers: Vec<String>,
    /// Grammar scope(s) doing the interior highlighting
    pub source: SourceRef,
}

impl LanguageSpec {
    pub fn new(name: &str, identifiers: &[&str], source: impl Into<SourceRef>) -> Self {
        Self {
            name: name.to_string(),
            identifiers: identifiers.iter().map(|s| s.to_string()).collect(),
            source: source.into(),
        }
    }

    /// Repository key, e.g. `commentTaggedString-python`
    pub fn repository_key(&self) -> String {
        format!("{}-{}", REPOSITORY_PREFIX, self.name)
    }

    /// `#`-prefixed include pointing at this language's repository entry
    pub fn repository_include(&self) -> String {
        format!("#{}", self.repository_key())
    }

    /// Scope applied to the embedded region
    pub fn content_scope(&self) -> String {
        format!("meta.embedded.block.{}", self.name)
    }

    /// Scope applied to the alias token in the tagging comment
    pub fn tag_scope(&self) -> String {
        format!("comment.tag.{}", self.name)
    }

    /// Check if the alias is one this language answers to
    pub fn answers_to(&self, alias: &str) -> bool {
        self.identifiers.iter().any(|id| id == alias)
    }
}
