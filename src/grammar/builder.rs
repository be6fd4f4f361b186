//! Grammar construction
//!
//! Folds a [`Registry`] into a [`GrammarDocument`]. Two rule layers are
//! produced:
//!
//! ```text
//! key: |2-  # python        <- outer rule: `|`, indentation + chomping indicators
//!   print("hi")             <- language rule: `# python` opens `meta.embedded.block.python`
//!   if x:                   <- indentation fence: first content line fixes the boundary
//!       pass                   every line at or past the boundary stays inside
//! other: 1                  <- closes everything
//! ```
//!
//! Registry order is the precedence order. The outer rule includes the
//! language rules in exactly that order, so when aliases overlap the first
//! language in the registry is the one an engine tries first.

use std::collections::BTreeMap;

use super::document::{GrammarDocument, Rule};
use super::escape::escape_literal;
use super::selector::{build_injection_selector, DEFAULT_TARGET_SCOPES};
use crate::language::LanguageSpec;
use crate::registry::Registry;

/// Scope name of the generated grammar
pub const DEFAULT_SCOPE_NAME: &str = "inline.template-tagged-languages";

/// Shared end of the outer and language rules: a line starting at column 0,
/// or any position other than where the previous match ended
pub const BLOCK_SCALAR_END: &str = r"^(?=\S)|(?!\G)";

/// `|`, optional indentation indicator, optional chomping indicator
pub const BLOCK_SCALAR_BEGIN: &str = r"(?:(\|))([1-9])?([-+])?[ \t]*";

/// Captures the first content line's leading spaces as group 1
pub const FENCE_BEGIN: &str = r"(?=^([ ]+)(?! ))";

/// First non-blank line that does not start with the captured indentation
pub const FENCE_END: &str = r"^(?!\1|\s*$)";

/// Scope of the fenced block body
pub const FENCE_SCOPE: &str = "string.unquoted.block.yaml";

/// Options that are not part of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarOptions {
    pub scope_name: String,
    pub target_scopes: Vec<String>,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            scope_name: DEFAULT_SCOPE_NAME.to_string(),
            target_scopes: DEFAULT_TARGET_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Opening pattern of a language rule: `(#)[ \t]*(alias|alias…)\n`
///
/// The outer rule has already consumed `|`, the indicators and the blanks
/// that follow them.
pub fn tag_comment_pattern(spec: &LanguageSpec) -> String {
    let aliases = spec
        .identifiers
        .iter()
        .map(|id| escape_literal(id))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(#)[ \t]*({})\n", aliases)
}

/// Fence rule bounding the embedded block by its first line's indentation
pub fn indentation_fence(spec: &LanguageSpec) -> Rule {
    Rule::begin_end(FENCE_BEGIN, FENCE_END)
        .with_name(FENCE_SCOPE)
        .with_patterns(spec.source.iter().map(Rule::include).collect())
}

/// Embedding rule for one language
///
/// # Panics
///
/// If `name`, `identifiers` or `source` is empty. Registries are trusted
/// build inputs; an invalid one must not produce a grammar.
pub fn build_language_rule(spec: &LanguageSpec) -> Rule {
    assert!(!spec.name.is_empty(), "language name must not be empty");
    assert!(
        !spec.identifiers.is_empty(),
        "language '{}' has no identifiers",
        spec.name
    );
    assert!(
        !spec.source.is_empty(),
        "language '{}' has no source grammar",
        spec.name
    );

    Rule::begin_end(tag_comment_pattern(spec), BLOCK_SCALAR_END)
        .with_content_name(spec.content_scope())
        .with_begin_capture(0, "comment.line.number-sign.yaml")
        .with_begin_capture(1, "punctuation.definition.comment.yaml")
        .with_begin_capture(2, spec.tag_scope())
        .with_patterns(vec![indentation_fence(spec)])
}

/// Outer block-scalar rule including every language rule in registry order
pub fn build_top_level_patterns(registry: &Registry) -> Vec<Rule> {
    let includes = registry
        .iter()
        .map(|spec| Rule::include(spec.repository_include()))
        .collect();

    vec![Rule::begin_end(BLOCK_SCALAR_BEGIN, BLOCK_SCALAR_END)
        .with_begin_capture(1, "keyword.control.flow.block-scalar.literal.yaml")
        .with_begin_capture(2, "constant.numeric.indentation-indicator.yaml")
        .with_begin_capture(3, "storage.modifier.chomping-indicator.yaml")
        .with_patterns(includes)]
}

/// Compile the whole registry into one grammar document
///
/// # Panics
///
/// On duplicate language names or any [`build_language_rule`] precondition.
pub fn build_grammar(registry: &Registry, options: &GrammarOptions) -> GrammarDocument {
    for conflict in registry.alias_conflicts() {
        tracing::warn!(
            "Alias '{}' is claimed by '{}' and '{}'; '{}' wins",
            conflict.alias,
            conflict.winner,
            conflict.shadowed,
            conflict.winner
        );
    }

    let repository = registry
        .iter()
        .fold(BTreeMap::new(), |mut repository, spec| {
            let previous = repository.insert(spec.repository_key(), build_language_rule(spec));
            assert!(
                previous.is_none(),
                "language '{}' is declared more than once",
                spec.name
            );
            repository
        });

    tracing::debug!(
        "Built grammar '{}' with {} languages",
        options.scope_name,
        repository.len()
    );

    GrammarDocument {
        file_types: Vec::new(),
        injection_selector: build_injection_selector(options.target_scopes.as_slice()),
        patterns: build_top_level_patterns(registry),
        scope_name: options.scope_name.clone(),
        repository,
    }
}
