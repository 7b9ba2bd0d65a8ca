//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::borrow::Cow;
use std::io::Write;
use wordbreak_core::WordCount;

/// Plain text formatter - one segment per line
///
/// Control characters are written as escapes so that line breaks inside a
/// segment stay on its line.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape control characters
pub fn visible(segment: &str) -> Cow<'_, str> {
    if !segment.chars().any(char::is_control) {
        return Cow::Borrowed(segment);
    }
    let mut escaped = String::with_capacity(segment.len() + 4);
    for ch in segment.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, _source: &str, _offset: usize, segment: &str) -> Result<()> {
        writeln!(self.writer, "{}", visible(segment))?;
        Ok(())
    }

    fn format_counts(&mut self, counts: &[WordCount]) -> Result<()> {
        let width = counts
            .first()
            .map_or(1, |top| top.count.to_string().len());
        for entry in counts {
            writeln!(self.writer, "{:>width$}\t{}", entry.count, visible(&entry.word))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
