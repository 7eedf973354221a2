//! Library error types
//!
//! The splitter itself is total over arbitrary byte input and never fails;
//! errors only arise while acquiring text from an input source.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced while reading input.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8 and strict decoding was requested
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Result type for input operations.
pub type Result<T> = std::result::Result<T, Error>;
