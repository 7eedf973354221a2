//! Command-line definition and execution

use anyhow::{Context, Result};
use clap::Parser;
use kosseg_core::{split_chunks, split_sentences_index};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};

/// Arguments for the kosseg command
#[derive(Debug, Parser)]
#[command(
    name = "kosseg",
    version,
    about = "Split Korean text into sentences using a heuristic grammar"
)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pack sentences into chunks of at most this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_chunk_bytes: Option<usize>,

    /// Seed each chunk with the trailing half of the previous one
    #[arg(long, requires = "max_chunk_bytes")]
    pub overlap: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of sentences with byte offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    fn formatter(self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        if self.max_chunk_bytes == Some(0) {
            return Err(CliError::InvalidChunkLength.into());
        }

        let sources = self.collect_sources()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(fs::File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        for (name, text) in &sources {
            log::debug!("Splitting {name} ({} bytes)", text.len());

            match self.max_chunk_bytes {
                Some(max_length) => {
                    for chunk in split_chunks(text, max_length, self.overlap) {
                        formatter.format_segment(&chunk.text, chunk.start)?;
                    }
                }
                None => {
                    for span in split_sentences_index(text) {
                        formatter.format_segment(&text[span.start..span.end], span.start)?;
                    }
                }
            }
        }

        formatter.finish()
    }

    /// Gather (source name, text) pairs from the file patterns, or stdin
    /// when no patterns were given.
    fn collect_sources(&self) -> Result<Vec<(String, String)>> {
        if self.input.is_empty() {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
            return Ok(vec![("<stdin>".to_string(), decode(buffer))]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s)", files.len());

        files
            .into_iter()
            .map(|path| {
                let bytes = fs::read(&path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok((path.display().to_string(), decode(bytes)))
            })
            .collect()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Decode input bytes, replacing malformed UTF-8 rather than failing.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("input is not valid UTF-8; malformed bytes replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        SplitArgs::command().debug_assert();
    }

    #[test]
    fn decode_passes_valid_utf8_through() {
        assert_eq!(decode("좋다.".as_bytes().to_vec()), "좋다.");
    }

    #[test]
    fn decode_replaces_malformed_bytes() {
        let decoded = decode(vec![0xec, 0xa2, 0x8b, 0xeb]);
        assert!(decoded.contains('좋'));
        assert!(decoded.contains('\u{fffd}'));
    }
}
