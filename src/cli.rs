//! Command-line argument parsing for the generator
//!
//! Supports:
//! - Choosing the language registry and config file
//! - Overriding scope name and target scopes
//! - Writing to a file or stdout
//! - Check mode for CI (fail when the committed grammar is stale)

use clap::Parser;
use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::grammar::GrammarOptions;

/// Generate the comment-tagged embedded language grammar
#[derive(Parser, Debug)]
#[command(
    name = "generate_grammar",
    version,
    about = "Generate a TextMate injection grammar for comment-tagged YAML block scalars"
)]
pub struct CliArgs {
    /// Language registry (YAML); defaults to the user registry, then the builtin one
    #[arg(short = 'l', long, value_name = "FILE")]
    pub languages: Option<PathBuf>,

    /// Generator config (YAML); defaults to the user config
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Where to write the grammar
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Host scope to inject into (repeatable)
    #[arg(short = 't', long = "target-scope", value_name = "SCOPE")]
    pub target_scopes: Vec<String>,

    /// Scope name of the generated grammar
    #[arg(long, value_name = "NAME")]
    pub scope_name: Option<String>,

    /// Print the grammar instead of writing a file
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Don't write; exit with status 1 if the output file is out of date
    #[arg(long)]
    pub check: bool,
}

/// Where the grammar goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Everything `main` needs after CLI and config are merged
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Explicit registry path, if any
    pub languages: Option<PathBuf>,
    pub options: GrammarOptions,
    pub destination: Destination,
    /// Compare instead of write
    pub check: bool,
}

impl CliArgs {
    /// Merge CLI args over the config; CLI values win
    pub fn into_plan(self, config: GeneratorConfig) -> Result<RunPlan, String> {
        let destination = if self.stdout {
            Destination::Stdout
        } else {
            let path = self.output.or(config.output).ok_or_else(|| {
                "No output path: pass --output, --stdout, or set `output` in the config"
                    .to_string()
            })?;
            Destination::File(path)
        };

        let target_scopes = if self.target_scopes.is_empty() {
            config.target_scopes
        } else {
            self.target_scopes
        };

        Ok(RunPlan {
            languages: self.languages,
            options: GrammarOptions {
                scope_name: self.scope_name.unwrap_or(config.scope_name),
                target_scopes,
            },
            destination,
            check: self.check,
        })
    }
}
