use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "naive-css")]
#[command(about = "Parse a CSS file into selectors and declarations")]
pub struct Cli {
    /// Stylesheet to read.
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Let a repeated selector replace earlier declarations instead of appending.
    #[arg(long)]
    pub replace_duplicates: bool,

    /// Emit blocks with an empty selector under the "" key.
    #[arg(long)]
    pub keep_empty_selectors: bool,

    /// Fail if the input contains anything malformed.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Normalized CSS.
    Css,
    /// Ordered JSON object.
    Json,
}
