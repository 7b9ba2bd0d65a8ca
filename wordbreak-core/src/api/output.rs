//! Output types for the segmentation API

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One boundary-delimited piece of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Byte offset in the original text
    pub offset: usize,
    /// The segment text
    pub text: String,
}

/// Segmentation result with statistics
#[derive(Debug, Clone)]
pub struct Output {
    /// Segments in text order
    pub segments: Vec<Segment>,
    /// Processing statistics
    pub stats: SegmentationStats,
}

/// Statistics about one segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentationStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of segments produced
    pub segment_count: usize,
    /// Wall-clock time spent segmenting
    #[serde(skip)]
    pub duration: Duration,
}

impl Output {
    pub(crate) fn new(segments: Vec<Segment>, text: &str, duration: Duration) -> Self {
        let stats = SegmentationStats {
            bytes_processed: text.len(),
            chars_processed: text.chars().count(),
            segment_count: segments.len(),
            duration,
        };
        Self { segments, stats }
    }

    /// Segment texts in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.text.as_str())
    }
}
