//! Injection grammar generation
//!
//! Turns a language registry into a TextMate injection grammar that
//! highlights comment-tagged YAML block scalars with the tagged language:
//! - `builder`: registry fold, outer and per-language rules
//! - `document`: serializable grammar/rule types
//! - `escape`: literal escaping for aliases
//! - `selector`: injection selector composition

mod builder;
mod document;
mod escape;
mod selector;

pub use builder::{
    build_grammar, build_language_rule, build_top_level_patterns, indentation_fence,
    tag_comment_pattern, GrammarOptions, BLOCK_SCALAR_BEGIN, BLOCK_SCALAR_END,
    DEFAULT_SCOPE_NAME, FENCE_BEGIN, FENCE_END, FENCE_SCOPE,
};
pub use document::{Capture, Captures, GrammarDocument, Rule};
pub use escape::escape_literal;
pub use selector::{build_injection_selector, injection_clause, DEFAULT_TARGET_SCOPES};
