//! Grammar document data structures
//!
//! Mirrors the JSON schema of TextMate grammars closely enough that
//! serializing these types yields a file editors load directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scope name assigned to a capture group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub name: String,
}

impl Capture {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Capture group index → scope, serialized in group order
pub type Captures = BTreeMap<u32, Capture>;

/// A single grammar rule
///
/// Either an `include` reference or a begin/end rule; unused fields are
/// left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    #[serde(default, skip_serializing_if = "Captures::is_empty")]
    pub begin_captures: Captures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<Rule>,
}

impl Rule {
    /// `{"include": target}`
    pub fn include(target: impl Into<String>) -> Self {
        Self {
            include: Some(target.into()),
            ..Self::default()
        }
    }

    /// Begin/end rule with no scopes or children yet
    pub fn begin_end(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: Some(begin.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_content_name(mut self, name: impl Into<String>) -> Self {
        self.content_name = Some(name.into());
        self
    }

    pub fn with_begin_capture(mut self, group: u32, scope: impl Into<String>) -> Self {
        self.begin_captures.insert(group, Capture::new(scope));
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<Rule>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Scope of a begin capture group, if one is assigned
    pub fn begin_capture(&self, group: u32) -> Option<&str> {
        self.begin_captures.get(&group).map(|c| c.name.as_str())
    }

    /// Targets of the direct `include` children, in order
    pub fn includes(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter_map(|p| p.include.as_deref())
            .collect()
    }
}

/// A complete injection grammar
///
/// Field order here is the key order of the serialized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarDocument {
    pub file_types: Vec<String>,
    pub injection_selector: String,
    pub patterns: Vec<Rule>,
    pub scope_name: String,
    /// Keyed by `commentTaggedString-<name>`; sorted for stable output
    pub repository: BTreeMap<String, Rule>,
}

impl GrammarDocument {
    /// Look up a repository rule by key
    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.repository.get(key)
    }
}
