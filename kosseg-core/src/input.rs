//! Input sources for the splitter
//!
//! A small DTO over the places text can come from. This is the only layer
//! of the library that can fail; the splitting operations themselves are
//! pure computation.

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for splitting.
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes, not necessarily valid UTF-8
    Bytes(Vec<u8>),
    /// Arbitrary reader
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the raw bytes of this input.
    ///
    /// This is the natural feed for the splitter, which tolerates
    /// malformed UTF-8 on its own.
    pub fn read_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::File(path) => fs::read(&path).map_err(Error::Io),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(Error::Io)?;
                Ok(buffer)
            }
        }
    }

    /// Read this input as UTF-8 text, rejecting malformed bytes.
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(Error::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(Error::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(Error::Io)?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_round_trips() {
        let input = Input::from_text("좋은 아침이다.");
        assert_eq!(input.read_text().unwrap(), "좋은 아침이다.");
    }

    #[test]
    fn bytes_input_allows_invalid_utf8_as_bytes() {
        let input = Input::from_bytes(vec![0xeb, 0x82]);
        assert_eq!(input.read_bytes().unwrap(), vec![0xeb, 0x82]);
    }

    #[test]
    fn bytes_input_rejects_invalid_utf8_as_text() {
        let input = Input::from_bytes(vec![0xeb, 0x82]);
        assert!(matches!(input.read_text(), Err(Error::Utf8(_))));
    }

    #[test]
    fn file_input_reads_contents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "밥을 먹었다").unwrap();

        let input = Input::from_file(&path);
        assert_eq!(input.read_text().unwrap(), "밥을 먹었다");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let input = Input::from_file("/nonexistent/kosseg.txt");
        assert!(matches!(input.read_bytes(), Err(Error::Io(_))));
    }

    #[test]
    fn reader_input_drains_the_reader() {
        let input = Input::from_reader(std::io::Cursor::new("그렇죠.".as_bytes().to_vec()));
        assert_eq!(input.read_text().unwrap(), "그렇죠.");
    }
}
