//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordbreak_core::WordCount;

/// JSON formatter - collects everything and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    segments: Vec<SegmentData>,
    counts: Option<Vec<WordCount>>,
}

/// Data structure for JSON segment output
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Input the segment came from
    pub source: String,
    /// Byte offset in the source text
    pub offset: usize,
    /// The segment text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segments: Vec::new(),
            counts: None,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, source: &str, offset: usize, segment: &str) -> Result<()> {
        self.segments.push(SegmentData {
            source: source.to_string(),
            offset,
            text: segment.to_string(),
        });
        Ok(())
    }

    fn format_counts(&mut self, counts: &[WordCount]) -> Result<()> {
        self.counts = Some(counts.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match &self.counts {
            Some(counts) => serde_json::to_writer_pretty(&mut self.writer, counts)?,
            None => serde_json::to_writer_pretty(&mut self.writer, &self.segments)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_json() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_segment("<stdin>", 0, "can't").unwrap();
        formatter.format_segment("<stdin>", 5, " ").unwrap();
        formatter.finish().unwrap();

        let out = formatter.into_inner();
        let parsed: Vec<SegmentData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "can't");
        assert_eq!(parsed[1].offset, 5);
        assert_eq!(parsed[1].source, "<stdin>");
    }

    #[test]
    fn test_counts_json() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_counts(&[WordCount { word: "abc".into(), count: 4 }])
            .unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<WordCount> = serde_json::from_slice(&formatter.into_inner()).unwrap();
        assert_eq!(parsed, [WordCount { word: "abc".into(), count: 4 }]);
    }
}
