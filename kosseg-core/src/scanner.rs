//! Boundary state machine
//!
//! The central scan loop: consumes one codepoint per iteration, consults
//! the pattern table under the tentative ending state, and decides whether
//! to keep the sentence open, close it, or hold the current character back
//! for reattachment. The guard clauses in [`ScanContext::resolve`] are
//! evaluated strictly top to bottom; their order is part of the grammar.

use crate::pattern::{common_roles, roles, Roles, State};
use crate::reader::Codepoint;

/// Mutable per-call scan state. Created at call start, discarded at call
/// end; nothing is shared between calls.
#[derive(Debug, Default)]
struct ScanContext {
    state: State,
    prev: Codepoint,
    prev_non_space: Codepoint,
    buffer: Vec<u8>,
    results: Vec<String>,
}

impl ScanContext {
    /// Advance the machine by one codepoint.
    fn step(&mut self, unit: Codepoint) {
        if self.state == State::Default {
            self.try_open(unit);
        } else {
            self.resolve(unit);
        }

        // Characters flagged NEXT_HELD under a still-open state stay out of
        // the buffer for one iteration so they can reattach to whichever
        // side of the boundary is eventually chosen.
        let held = self.state != State::Default
            && roles(self.state, unit.ch()).contains(Roles::NEXT_HELD);
        if !held {
            self.buffer.extend_from_slice(unit.bytes());
        }

        self.prev = unit;
        if !unit.is_space() {
            self.prev_non_space = unit;
        }
    }

    /// In the default state, open an ending candidate when the current
    /// character is a trigger and the previous character licenses it.
    fn try_open(&mut self, unit: Codepoint) {
        if let Some(target) = unit.ch().and_then(State::trigger_for) {
            if roles(target, self.prev.ch()).contains(Roles::PREV_TRIGGER) {
                self.state = target;
            }
        }
    }

    /// With an ending candidate open, classify the current character and
    /// apply the first matching guard.
    fn resolve(&mut self, unit: Codepoint) {
        let cur = roles(self.state, unit.ch());
        let prev = roles(self.state, self.prev.ch());

        // Continuation: whitespace or a Common-namespace continuation
        // character keeps the candidate open, unless a held character is
        // pending, in which case the sentence closes and the held
        // character starts the next one.
        if unit.is_space() || common_roles(unit.ch()).contains(Roles::CONTINUATION) {
            if prev.contains(Roles::NEXT_HELD) {
                self.flush();
                self.carry_prev();
                self.state = State::Default;
            }
            return;
        }

        // Soft continuation: the sentence keeps going. A pending held
        // character rejoins the open buffer; otherwise, if the last
        // non-space character was a continuation character, the run it
        // extended is complete and the sentence closes here.
        if cur.contains(Roles::NEXT_CONTINUES) {
            if prev.contains(Roles::NEXT_HELD) {
                self.carry_prev();
            } else if common_roles(self.prev_non_space.ch()).contains(Roles::CONTINUATION) {
                self.flush();
            }
            self.state = State::Default;
            return;
        }

        // Held-ambiguous: two held candidates in a row force a split; a
        // single one leaves the state open and the character held back.
        if cur.contains(Roles::NEXT_HELD) {
            if prev.contains(Roles::NEXT_HELD) {
                self.flush();
                self.carry_prev();
                self.state = State::Default;
            }
            return;
        }

        // Weak continuation: keeps going only to absorb a held character;
        // otherwise the boundary is confirmed.
        if cur.contains(Roles::NEXT_WEAK) {
            if prev.contains(Roles::NEXT_HELD) {
                self.carry_prev();
            } else {
                self.flush();
            }
            self.state = State::Default;
            return;
        }

        // No recognized role, or the character itself looks like the start
        // of a new candidate ending: the boundary is confirmed.
        self.flush();
        if prev.contains(Roles::NEXT_HELD) {
            self.carry_prev();
        }
        self.state = State::Default;
    }

    /// Re-append the held-back previous character to the current buffer.
    fn carry_prev(&mut self) {
        let prev = self.prev;
        self.buffer.extend_from_slice(prev.bytes());
    }

    /// Strip leading/trailing ASCII whitespace from the buffer, emit it as
    /// a completed sentence, and clear the buffer. No empty-string
    /// filtering happens here; callers may drop empties if they choose.
    fn flush(&mut self) {
        let start = self
            .buffer
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(self.buffer.len());
        let end = self
            .buffer
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(start, |p| p + 1);

        let sentence = String::from_utf8_lossy(&self.buffer[start..end]).into_owned();
        self.results.push(sentence);
        self.buffer.clear();
    }

    /// End of input: flush whatever is buffered, then emit a dangling
    /// held-back character that was never reattached.
    fn finish(mut self) -> Vec<String> {
        if !self.buffer.is_empty() {
            self.flush();
        }
        if roles(self.state, self.prev.ch()).contains(Roles::NEXT_HELD) {
            self.carry_prev();
            self.flush();
        }
        self.results
    }
}

/// Split raw bytes into sentences.
///
/// The algorithm is total over arbitrary byte sequences: malformed UTF-8 is
/// consumed byte-by-byte and surfaces as U+FFFD in the affected sentence,
/// never as an error or an out-of-bounds read.
pub fn split_bytes(text: &[u8]) -> Vec<String> {
    let mut ctx = ScanContext::default();

    let mut offset = 0;
    while offset < text.len() {
        let unit = Codepoint::read(text, offset);
        offset += unit.len();
        ctx.step(unit);
    }

    ctx.finish()
}

/// Split Korean (or mixed Korean/Latin) text into sentences.
///
/// Deterministic single pass, O(n) in codepoints. Empty input yields an
/// empty vector. Each returned sentence is trimmed of leading and trailing
/// ASCII whitespace.
pub fn split_sentences(text: &str) -> Vec<String> {
    split_bytes(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_punctuation_boundary() {
        let sentences = split_sentences("오늘은 날씨가 좋다. 내일은 비가 온다.");
        assert_eq!(sentences, vec!["오늘은 날씨가 좋다.", "내일은 비가 온다."]);
    }

    #[test]
    fn splits_at_ending_particle_without_punctuation() {
        let sentences = split_sentences("이것은 책이다 그것은 공책이다");
        assert_eq!(sentences, vec!["이것은 책이다", "그것은 공책이다"]);
    }

    #[test]
    fn single_sentence_stays_whole() {
        assert_eq!(split_sentences("밥을 먹었다"), vec!["밥을 먹었다"]);
    }

    #[test]
    fn quotative_particle_keeps_sentence_open() {
        // "-다고" is reported speech, not a sentence end.
        let sentences = split_sentences("사과를 먹었다고 말했다");
        assert_eq!(sentences, vec!["사과를 먹었다고 말했다"]);
    }

    #[test]
    fn weak_continuation_confirms_boundary() {
        // "지" carries only the weak flag under the 다-state, so the
        // boundary before it is confirmed.
        let sentences = split_sentences("날씨가 좋았다 지금 나간다");
        assert_eq!(sentences, vec!["날씨가 좋았다", "지금 나간다"]);
    }

    #[test]
    fn held_character_reattaches_forward() {
        // "해" is held back after "봤다"; the following weak "도" pulls it
        // back into the same sentence.
        let sentences = split_sentences("봤다 해도 좋다");
        assert_eq!(sentences, vec!["봤다 해도 좋다"]);
    }

    #[test]
    fn held_character_carries_into_next_sentence() {
        // The held "하" is resolved by the following space and starts the
        // next sentence instead of ending the first.
        let sentences = split_sentences("간다 하 간다");
        assert_eq!(sentences, vec!["간다", "하 간다"]);
    }

    #[test]
    fn dangling_held_character_is_emitted() {
        let sentences = split_sentences("밥 먹었다 해");
        assert_eq!(sentences, vec!["밥 먹었다", "해"]);
    }

    #[test]
    fn jamo_run_extends_the_closing_sentence() {
        let sentences = split_sentences("맞아요 ㅋㅋ 진짜요");
        assert_eq!(sentences, vec!["맞아요 ㅋㅋ", "진짜요"]);
    }

    #[test]
    fn ellipsis_run_stays_attached() {
        let sentences = split_sentences("그랬다... 정말 그랬다.");
        assert_eq!(sentences, vec!["그랬다...", "정말 그랬다."]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn malformed_utf8_is_tolerated() {
        // A truncated 3-byte sequence appended to valid text.
        let mut bytes = "좋다. ".as_bytes().to_vec();
        bytes.push(0xeb);
        let sentences = split_bytes(&bytes);
        assert!(!sentences.is_empty());
        assert!(sentences.concat().contains('\u{fffd}'));
    }

    #[test]
    fn splitting_is_deterministic() {
        let text = "오늘은 날씨가 좋다. 내일은 비가 온다. 정말요? 그렇죠.";
        assert_eq!(split_sentences(text), split_sentences(text));
    }
}
