//! Split command implementation

use anyhow::Result;
use clap::Args;
use wordbreak_core::{DefaultWordFilter, WordFilter};

use super::CommonArgs;
use crate::input::resolve_patterns;
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Only print segments that start with a letter or digit
    #[arg(short, long)]
    pub words_only: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();

        log::info!("Starting word segmentation");
        log::debug!("Arguments: {:?}", self);

        let sources = resolve_patterns(&self.input)?;
        let segmenter = self.common.grammar.segmenter()?;
        let filter = DefaultWordFilter::new();
        let mut formatter = self.common.formatter()?;

        let mut progress = ProgressReporter::new(self.common.quiet || sources.len() < 2);
        progress.init_files(sources.len() as u64);

        for source in &sources {
            let text = source.read_text()?;
            let name = source.to_string();
            for (offset, segment) in segmenter.word_indices(&text) {
                if self.words_only && filter.normalize(segment).is_none() {
                    continue;
                }
                formatter.format_segment(&name, offset, segment)?;
            }
            progress.file_completed(&name);
        }

        progress.finish();
        formatter.finish()?;
        log::info!("Segmented {} input(s)", sources.len());
        Ok(())
    }
}
