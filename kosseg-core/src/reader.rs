//! UTF-8 codepoint reader
//!
//! Walks a raw byte buffer one codepoint at a time. Length is derived from
//! the lead byte's high bits alone; sequences that would run past the end
//! of the buffer degrade to single-byte units instead of reading out of
//! bounds. This function is total over arbitrary byte input.

/// Byte length (1..=4) of the UTF-8 codepoint starting at `offset`.
///
/// A declared length that would overrun the buffer falls back to 1, so the
/// trailing bytes of a truncated sequence are consumed as standalone units.
pub(crate) fn codepoint_len(bytes: &[u8], offset: usize) -> usize {
    let lead = bytes[offset];
    let mut len = 1;

    if lead & 0xf8 == 0xf0 {
        len = 4; // 1111 0xxx
    } else if lead & 0xf0 == 0xe0 {
        len = 3; // 1110 xxxx
    } else if lead & 0xe0 == 0xc0 {
        len = 2; // 110x xxxx
    }
    if offset + len > bytes.len() {
        len = 1;
    }

    len
}

/// One scan unit: the raw bytes of a single codepoint plus its decoded
/// character when the bytes form valid UTF-8.
///
/// The default value is the empty unit, used as look-behind context before
/// any character has been read.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Codepoint {
    buf: [u8; 4],
    len: u8,
    ch: Option<char>,
}

impl Codepoint {
    /// Read the codepoint at `offset`. Caller guarantees `offset` is in
    /// bounds; the read itself never overruns the buffer.
    pub(crate) fn read(bytes: &[u8], offset: usize) -> Codepoint {
        let len = codepoint_len(bytes, offset);
        let raw = &bytes[offset..offset + len];

        let mut buf = [0u8; 4];
        buf[..len].copy_from_slice(raw);

        Codepoint {
            buf,
            len: len as u8,
            ch: std::str::from_utf8(raw).ok().and_then(|s| s.chars().next()),
        }
    }

    /// Raw bytes of this unit.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Byte length of this unit (0 for the empty unit).
    pub(crate) fn len(&self) -> usize {
        self.len as usize
    }

    /// Decoded character, if the bytes were valid UTF-8.
    pub(crate) fn ch(&self) -> Option<char> {
        self.ch
    }

    /// Whitespace test on the lead byte, matching the original heuristic:
    /// only ASCII whitespace separates sentences.
    pub(crate) fn is_space(&self) -> bool {
        self.len > 0 && self.buf[0].is_ascii_whitespace()
    }
}
