mod cli;

use std::process::ExitCode;

use clap::Parser;
use naive_css::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Format};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Css(#[from] naive_css::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let css = std::fs::read_to_string(&cli.input)
        .map_err(|e| naive_css::Error::io(&cli.input, e))?;

    let mut parser = CssParser::with_config(config_from(cli));
    let sheet = parser.try_parse(&css)?;

    match cli.format {
        Format::Css => print!("{sheet}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
    }
    Ok(())
}

fn config_from(cli: &Cli) -> ParserConfig {
    let duplicates = if cli.replace_duplicates {
        DuplicatePolicy::Replace
    } else {
        DuplicatePolicy::Append
    };
    let empty = if cli.keep_empty_selectors {
        EmptySelectorPolicy::Keep
    } else {
        EmptySelectorPolicy::Skip
    };

    ParserConfig::new()
        .duplicate_selectors(duplicates)
        .empty_selectors(empty)
        .strict(cli.strict)
}
