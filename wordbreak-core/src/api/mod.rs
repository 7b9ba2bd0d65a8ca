//! High-level segmentation API
//!
//! Wraps grammar loading, segmentation and word counting behind a small
//! configurable facade used by the CLI.

mod config;
mod input;
mod output;
mod segmenter;

pub use config::{Config, ConfigBuilder, GrammarSource};
pub use input::Input;
pub use output::{Output, Segment, SegmentationStats};
pub use segmenter::WordSegmenter;
