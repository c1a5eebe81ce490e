//! Error types for the Morse engine.
//!
//! This module provides a unified error type [`MorseError`] that covers
//! every failure the codec, timing parser, synthesizer and WAV serializer
//! can report. Every failure aborts the whole operation; no partial Morse
//! string, text, sample buffer or file is handed back.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`MorseError`].
pub type Result<T> = std::result::Result<T, MorseError>;

/// Unified error type for all Morse operations.
#[derive(Error, Debug)]
pub enum MorseError {
    // ============ Codec Errors ============
    /// A text character with no entry in the alphabet table
    #[error("Unsupported character '{0}' in input")]
    UnsupportedCharacter(char),

    /// A Morse token (decode) or character (timing) that cannot be interpreted
    #[error("Unsupported Morse symbol '{0}' in input")]
    UnsupportedSymbol(String),

    // ============ Synthesis Errors ============
    /// Synthesis was requested for an empty event sequence
    #[error("No Morse content available for audio synthesis")]
    NoContent,

    /// Synthesis was requested at a sample rate of zero
    #[error("Invalid sample rate {0} Hz")]
    InvalidSampleRate(u32),

    // ============ I/O Errors ============
    /// The PCM payload does not fit a 32-bit RIFF chunk size
    #[error("Sample data of {data_bytes} bytes is too large for a WAV file")]
    WavTooLarge { data_bytes: u64 },

    /// Error creating or writing a WAV file
    #[error("Failed to write WAV file '{path}': {source}")]
    WavWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading an input file
    #[error("Failed to read input file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MorseError {
    /// Create an unsupported symbol error from any token-like value
    pub fn unsupported_symbol(token: impl Into<String>) -> Self {
        Self::UnsupportedSymbol(token.into())
    }

    /// Create a WAV write error for the given path
    pub fn wav_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::WavWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a WAV write error for the temp directory, before a path exists
    pub(crate) fn temp_file(source: std::io::Error) -> Self {
        let dir: PathBuf = std::env::temp_dir();
        Self::wav_write(&dir, source)
    }
}
