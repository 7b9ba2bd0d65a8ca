//! Output formatting module

use anyhow::Result;
use wordbreak_core::WordCount;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output one segment of a source
    fn format_segment(&mut self, source: &str, offset: usize, segment: &str) -> Result<()>;

    /// Output a ranked word count table
    fn format_counts(&mut self, counts: &[WordCount]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
