//! Count command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use wordbreak_core::WordTally;

use super::{load_segmenter, CommonArgs};
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::progress::ProgressReporter;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Number of words to report
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Fold words to lower case before counting
    #[arg(short, long)]
    pub lowercase: bool,

    /// Count every segment, including spaces and punctuation
    #[arg(short, long)]
    pub all_segments: bool,

    /// Number of worker threads (default: all available)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting word count");
        log::debug!("Arguments: {:?}", self);

        if self.top == 0 {
            return Err(CliError::InvalidOption("--top must be at least 1".into()).into());
        }
        let threads = match self.threads {
            Some(0) => {
                return Err(CliError::InvalidOption("--threads must be at least 1".into()).into())
            }
            Some(n) => n,
            None => num_cpus::get(),
        };

        let sources = resolve_patterns(&self.input)?;
        let config = self
            .common
            .grammar
            .config_builder()
            .lowercase(self.lowercase)
            .filter_words(!self.all_segments)
            .build()?;
        let segmenter = load_segmenter(config)?;

        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(sources.len() as u64);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to start worker threads")?;
        log::debug!("counting {} input(s) on {threads} thread(s)", sources.len());

        // Collected in input order so ties keep first-occurrence order
        let tallies = pool.install(|| {
            sources
                .par_iter()
                .map(|source| -> Result<WordTally> {
                    let text = source.read_text()?;
                    let tally = segmenter.tally(&text);
                    progress.file_completed(&source.to_string());
                    Ok(tally)
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let mut total = WordTally::new();
        for tally in tallies {
            total.merge(tally);
        }
        log::info!(
            "Counted {} words, {} distinct",
            total.total(),
            total.len()
        );

        let counts = total.top(self.top)?;
        let mut formatter = self.common.formatter()?;
        formatter.format_counts(&counts)?;
        formatter.finish()?;
        Ok(())
    }
}
