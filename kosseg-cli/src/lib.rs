//! kosseg CLI library
//!
//! This library provides the command-line interface for the kosseg
//! Korean sentence splitter.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use cli::SplitArgs;
pub use error::{CliError, CliResult};
