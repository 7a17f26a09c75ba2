use clap::{Parser, ValueEnum};
use markdown_blocks_engine::BlankLinePolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markdown-blocks")]
#[command(author, version)]
#[command(about = "Parse a markdown document and print its block structure")]
#[command(after_help = "\
EXAMPLES:

    # Outline of a file
    markdown-blocks notes.md

    # From stdin, as YAML
    cat notes.md | markdown-blocks --format yaml

    # Normalize list markers and indentation
    markdown-blocks --format markdown notes.md

CONFIGURATION:

Parser options are read from ~/.config/markdown-blocks/config.toml unless
--config is given. Command-line flags override the file.

    [parser]
    tab_width = 4
    max_depth = 64
    blank_lines = \"look-ahead\"")]
pub struct Cli {
    /// Markdown file to parse (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Outline)]
    pub format: OutputFormat,

    /// Tab stop width used to expand leading tabs
    #[arg(long)]
    pub tab_width: Option<usize>,

    /// Maximum list nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// What a blank line inside a list means
    #[arg(long, value_enum)]
    pub blank_lines: Option<BlankLines>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree, one node per line
    Outline,
    /// The block tree serialized as YAML
    Yaml,
    /// Markdown re-serialized from the tree
    Markdown,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankLines {
    /// Continue the list if the next non-blank line belongs to it
    LookAhead,
    /// End the list at any blank line
    Terminate,
}

impl From<BlankLines> for BlankLinePolicy {
    fn from(value: BlankLines) -> Self {
        match value {
            BlankLines::LookAhead => BlankLinePolicy::LookAhead,
            BlankLines::Terminate => BlankLinePolicy::Terminate,
        }
    }
}
