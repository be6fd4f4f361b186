//! Comment-tagged embedded language grammar
//!
//! This crate generates a TextMate injection grammar that highlights YAML
//! block scalars in the language named by their leading comment:
//!
//! ```yaml
//! run: |
//!   # python
//!   print("highlighted as Python")
//! ```
//!
//! The flow is registry → [`grammar::build_grammar`] → [`GrammarDocument`]
//! → [`output::write_grammar`].

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod grammar;
pub mod language;
pub mod output;
pub mod registry;
pub mod tracing;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use grammar::{build_grammar, GrammarDocument, GrammarOptions, Rule};
pub use language::{LanguageSpec, SourceRef};
pub use registry::{AliasConflict, Registry, RegistryError};
