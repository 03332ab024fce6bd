//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Title used when none is given and input comes from stdin.
const DEFAULT_TITLE: &str = "Preview";

/// Command line configuration for Marklet.
#[derive(Debug, Clone, Parser)]
#[command(name = "marklet", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to render, `-` for standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Output file, standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write only the HTML fragment instead of a preview page
    #[arg(long)]
    pub fragment: bool,

    /// Preview page title
    #[arg(long)]
    pub title: Option<String>,

    /// Maximum number of characters accepted in the input
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Open the generated file in the default browser
    #[arg(long)]
    pub open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns true when input is read from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input file does not exist, `--open` is given without
    /// an output file, or the maximum length is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        if self.open && self.output.is_none() {
            bail!("--open requires --output");
        }

        if self.max_length == Some(0) {
            bail!("--max-length must be greater than zero");
        }

        Ok(())
    }

    /// Returns page title from configuration or input file name.
    pub fn page_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        if self.reads_stdin() {
            return DEFAULT_TITLE.to_string();
        }

        self.input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map_or_else(|| DEFAULT_TITLE.to_string(), String::from)
    }
}
