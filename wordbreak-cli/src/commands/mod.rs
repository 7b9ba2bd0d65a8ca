//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordbreak_core::{Config, WordSegmenter};

use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

pub mod count;
pub mod list;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split input text into word boundary segments
    Split(split::SplitArgs),

    /// Count the most frequent words across inputs
    Count(count::CountArgs),

    /// Check that a grammar configuration loads
    Validate(validate::ValidateArgs),

    /// List grammar contents or output formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the character classes of a grammar
    Classes(GrammarArgs),

    /// List the rules of a grammar, in definition order
    Rules(GrammarArgs),

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

/// Grammar selection shared by all commands
#[derive(Debug, Clone, Default, Args)]
pub struct GrammarArgs {
    /// Grammar configuration file (default: bundled UAX #29 word rules)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,
}

impl GrammarArgs {
    /// Core configuration builder with this grammar selected
    pub fn config_builder(&self) -> wordbreak_core::ConfigBuilder {
        match &self.grammar {
            Some(path) => Config::builder().grammar_file(path),
            None => Config::builder().bundled_grammar(),
        }
    }

    /// Segmenter over the selected grammar with default settings
    pub fn segmenter(&self) -> Result<WordSegmenter> {
        let config = self.config_builder().build()?;
        load_segmenter(config)
    }

    /// Human-readable grammar name
    pub fn display_name(&self) -> String {
        match &self.grammar {
            Some(path) => format!("External: {}", path.display()),
            None => "Bundled: uax29-words".to_string(),
        }
    }
}

/// Options shared by the text-processing commands
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    #[command(flatten)]
    pub grammar: GrammarArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one entry per line
    #[default]
    Text,
    /// JSON array
    Json,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Formatter writing to the selected output
    pub fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}

/// Build a segmenter, reporting grammar failures as CLI errors
pub(crate) fn load_segmenter(config: Config) -> Result<WordSegmenter> {
    let segmenter = WordSegmenter::new(config).map_err(|e| CliError::GrammarError(e.to_string()))?;
    log::debug!(
        "grammar loaded: {} classes, {} rules",
        segmenter.ruleset().classes().len(),
        segmenter.ruleset().rule_count()
    );
    Ok(segmenter)
}
