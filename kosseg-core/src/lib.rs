//! Heuristic Korean sentence boundary detection
//!
//! Segments Korean (and mixed Korean/Latin) text into sentences without a
//! trained model. A single character-driven state machine scans the input
//! one codepoint at a time, consulting a static table of verb and
//! sentence-ending morphemes to decide where sentences end — Korean
//! sentence-final particles attach directly to stems and are ambiguous
//! with mid-sentence homographs, so whitespace and punctuation alone are
//! not reliable boundary markers.
//!
//! The whole operation is one deterministic O(n) pass with no I/O and no
//! shared mutable state; concurrent calls from multiple threads are safe.
//!
//! # Example
//!
//! ```
//! let sentences = kosseg_core::split_sentences("오늘은 날씨가 좋다. 내일은 비가 온다.");
//! assert_eq!(sentences, vec!["오늘은 날씨가 좋다.", "내일은 비가 온다."]);
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod error;
pub mod input;
pub mod pattern;
mod reader;
mod scanner;

pub use chunk::{split_chunks, split_sentences_index, ChunkWithIndex, SentenceIndex};
pub use error::{Error, Result};
pub use input::Input;
pub use pattern::{Roles, State};
pub use scanner::{split_bytes, split_sentences};

/// Split any [`Input`] source into sentences.
///
/// Reads the source as raw bytes and feeds them to [`split_bytes`], so
/// malformed UTF-8 in files or streams is tolerated rather than rejected.
pub fn split_input(input: Input) -> Result<Vec<String>> {
    let bytes = input.read_bytes()?;
    Ok(split_bytes(&bytes))
}
