//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_segment(&mut self, segment: &str, _offset: usize) -> Result<()> {
        self.segment_count += 1;
        writeln!(self.writer, "{}. {}", self.segment_count, segment.trim())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_segments_and_appends_a_summary() {
        let mut buf = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buf);
            formatter.format_segment("간다.", 0).unwrap();
            formatter.format_segment("온다.", 8).unwrap();
            formatter.finish().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("1. 간다.\n2. 온다.\n"));
        assert!(out.contains("---"));
        assert!(out.ends_with("*Total segments: 2*\n"));
    }
}
