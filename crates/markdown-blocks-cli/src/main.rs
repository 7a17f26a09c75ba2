use anyhow::{Context, Result};
use clap::Parser;
use markdown_blocks_config::Config;
use markdown_blocks_engine::{ParseOptions, ParsedDoc, outline, parse_document, to_markdown};
use std::{
    io::{self, Read},
    path::Path,
};

mod cli;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = load_config(cli.config.as_deref())?;
    let options = resolve_options(&cli, config)?;
    log::debug!("parser options: {options:?}");

    let input = read_input(cli.file.as_deref())?;
    let doc = parse_document(&input, &options);
    print!("{}", render(&doc, cli.format)?);
    Ok(())
}

/// Loads the explicit config file, or the default one if it exists.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            log::debug!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

/// Applies command-line overrides on top of the config file's options.
fn resolve_options(cli: &Cli, config: Config) -> Result<ParseOptions> {
    let mut options = config.parser;
    if let Some(tab_width) = cli.tab_width {
        options.tab_width = tab_width;
    }
    if let Some(max_depth) = cli.max_depth {
        options.max_depth = max_depth;
    }
    if let Some(blank_lines) = cli.blank_lines {
        options.blank_lines = blank_lines.into();
    }
    options.validate().context("Invalid parser options")?;
    Ok(options)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(doc: &ParsedDoc, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Outline => outline(&doc.blocks),
        OutputFormat::Yaml => serde_yaml::to_string(&doc.blocks)?,
        OutputFormat::Markdown => to_markdown(&doc.blocks),
    })
}
