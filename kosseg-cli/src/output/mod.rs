//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
///
/// A segment is either one sentence or, in chunking mode, one packed chunk
/// of consecutive sentences.
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single segment with its byte offset
    fn format_segment(&mut self, segment: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
