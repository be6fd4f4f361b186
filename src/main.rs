use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tagged_grammar::cli::{CliArgs, Destination};
use tagged_grammar::{build_grammar, output, GeneratorConfig, Registry};

fn main() -> Result<ExitCode> {
    tagged_grammar::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path).map_err(anyhow::Error::msg)?,
        None => GeneratorConfig::load(),
    };
    let plan = args.into_plan(config).map_err(anyhow::Error::msg)?;

    let registry = Registry::load(plan.languages.as_deref())
        .context("Failed to load language registry")?;
    let grammar = build_grammar(&registry, &plan.options);

    match plan.destination {
        Destination::Stdout => {
            let json = output::to_json_string(&grammar)?;
            std::io::stdout()
                .lock()
                .write_all(json.as_bytes())
                .context("Failed to write grammar to stdout")?;
        }
        Destination::File(path) if plan.check => {
            let fresh = output::is_up_to_date(&path, &grammar)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !fresh {
                eprintln!(
                    "{} is out of date; rerun generate_grammar to regenerate it",
                    path.display()
                );
                return Ok(ExitCode::FAILURE);
            }
        }
        Destination::File(path) => {
            output::write_grammar(&path, &grammar)
                .with_context(|| format!("Failed to write grammar to {}", path.display()))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
