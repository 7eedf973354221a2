//! Sentence spans and length-bounded chunk packing
//!
//! Helpers layered on top of the splitter: byte-offset spans of each
//! sentence in the original text, and greedy packing of consecutive
//! sentences into chunks bounded by a byte budget.

use serde::{Deserialize, Serialize};

use crate::scanner::split_sentences;

/// Byte-offset span of one sentence within the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceIndex {
    /// Byte offset of the first byte of the sentence.
    pub start: usize,
    /// Byte offset one past the last byte of the sentence.
    pub end: usize,
}

/// A chunk of consecutive sentences with its starting byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkWithIndex {
    /// Byte offset of the chunk within the original text.
    pub start: usize,
    /// The chunk text, taken verbatim from the original (interior
    /// whitespace between sentences included).
    pub text: String,
}

/// Locate each non-empty sentence of `text` as a byte-offset span.
///
/// Spans are in document order and non-overlapping. Sentences are matched
/// forward from the end of the previous span, which is unambiguous because
/// the splitter preserves character order.
pub fn split_sentences_index(text: &str) -> Vec<SentenceIndex> {
    let mut indexes = Vec::new();
    let mut offset = 0;

    for sentence in split_sentences(text) {
        if sentence.is_empty() {
            continue;
        }
        if let Some(pos) = text[offset..].find(&sentence) {
            let start = offset + pos;
            let end = start + sentence.len();
            indexes.push(SentenceIndex { start, end });
            offset = end;
        }
    }

    indexes
}

/// Pack consecutive sentences into chunks of at most `max_length` bytes.
///
/// A chunk always receives at least one sentence, so a single sentence
/// longer than the budget becomes an oversized chunk rather than being
/// dropped. With `overlap`, the trailing half of each emitted chunk's
/// sentences seeds the next chunk. Empty input yields no chunks.
pub fn split_chunks(text: &str, max_length: usize, overlap: bool) -> Vec<ChunkWithIndex> {
    let indexes = split_sentences_index(text);

    let mut span: Vec<SentenceIndex> = Vec::new();
    let mut chunks = Vec::new();

    for index in indexes {
        if !span.is_empty() && index.end - span[0].start > max_length {
            chunks.push(chunk_of(text, &span));
            if overlap {
                span.drain(..span.len() / 2);
            } else {
                span.clear();
            }
        }
        span.push(index);
    }
    if !span.is_empty() {
        chunks.push(chunk_of(text, &span));
    }

    chunks
}

// Chunk text spans from the first sentence's start to the last one's end.
fn chunk_of(text: &str, span: &[SentenceIndex]) -> ChunkWithIndex {
    let start = span[0].start;
    let end = span[span.len() - 1].end;
    ChunkWithIndex {
        start,
        text: text[start..end].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "오늘은 날씨가 좋다. 내일은 비가 온다.";

    #[test]
    fn index_spans_slice_back_to_sentences() {
        let indexes = split_sentences_index(TEXT);
        assert_eq!(indexes.len(), 2);
        assert_eq!(&TEXT[indexes[0].start..indexes[0].end], "오늘은 날씨가 좋다.");
        assert_eq!(&TEXT[indexes[1].start..indexes[1].end], "내일은 비가 온다.");
        assert_eq!(indexes[0].start, 0);
        assert!(indexes[1].start > indexes[0].end);
    }

    #[test]
    fn index_spans_skip_trimmed_whitespace() {
        let text = "  밥을 먹었다  ";
        let indexes = split_sentences_index(text);
        assert_eq!(indexes.len(), 1);
        assert_eq!(&text[indexes[0].start..indexes[0].end], "밥을 먹었다");
    }

    #[test]
    fn empty_text_has_no_spans_or_chunks() {
        assert!(split_sentences_index("").is_empty());
        assert!(split_chunks("", 128, false).is_empty());
    }

    #[test]
    fn large_budget_packs_everything_into_one_chunk() {
        let chunks = split_chunks(TEXT, 4096, false);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].text, TEXT);
    }

    #[test]
    fn tight_budget_emits_one_chunk_per_sentence() {
        // Budget below the combined length of the two sentences.
        let chunks = split_chunks(TEXT, 30, false);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "오늘은 날씨가 좋다.");
        assert_eq!(chunks[1].text, "내일은 비가 온다.");
    }

    #[test]
    fn oversized_sentence_still_gets_a_chunk() {
        let chunks = split_chunks("밥을 먹었다", 4, false);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "밥을 먹었다");
    }

    #[test]
    fn overlap_reuses_trailing_sentences() {
        let text = "간다. 온다. 산다. 논다.";
        let tight = split_chunks(text, 15, false);
        let lapped = split_chunks(text, 15, true);
        // Overlapping chunks re-cover text, so at least as many chunks and
        // no lost coverage at either end.
        assert!(lapped.len() >= tight.len());
        assert_eq!(lapped[0].start, 0);
        assert!(lapped.last().unwrap().text.ends_with("논다."));
    }
}
