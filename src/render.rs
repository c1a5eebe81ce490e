//! End-to-end pipeline: Morse string to WAV.
//!
//! This is the boundary playback and export flows call into. It chains
//! [`parse_timing`], [`synthesize_samples`] and the WAV serializer, and
//! rejects empty input with [`MorseError::NoContent`] before any file is
//! created.
//!
//! Everything here is synchronous. Interactive callers that must not block
//! should run it on their own worker thread.
//!
//! [`MorseError::NoContent`]: crate::error::MorseError::NoContent

use std::path::PathBuf;

use crate::alphabet::AlphabetTable;
use crate::codec::MorseCodec;
use crate::error::Result;
use crate::synth::{synthesize_samples, AudioSettings, SampleBuffer};
use crate::timing::parse_timing;
use crate::wav::{self, Destination};
use crate::DEFAULT_SAMPLE_RATE;

/// Settings for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Tone, speed and volume
    pub settings: AudioSettings,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            settings: AudioSettings::default(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl RenderOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the audio settings.
    pub fn with_settings(mut self, settings: AudioSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the output sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

/// Parse and synthesize a Morse string without serializing it.
pub fn render_samples(morse: &str, options: &RenderOptions) -> Result<SampleBuffer> {
    let events = parse_timing(morse)?;
    synthesize_samples(&events, &options.settings, options.sample_rate)
}

/// Synthesize a Morse string into a WAV file and return its path.
///
/// The caller owns the returned file and is responsible for deleting it.
pub fn synthesize_morse_audio(
    morse: &str,
    options: &RenderOptions,
    destination: Destination,
) -> Result<PathBuf> {
    let buffer = render_samples(morse, options)?;
    wav::write_wav(&buffer, destination)
}

/// Encode plain text and synthesize it into a WAV file.
pub fn synthesize_text_audio(
    table: &AlphabetTable,
    text: &str,
    options: &RenderOptions,
    destination: Destination,
) -> Result<PathBuf> {
    let morse = MorseCodec::new(table).encode(text)?;
    synthesize_morse_audio(&morse, options, destination)
}

/// Synthesize a Morse string into in-memory WAV bytes.
pub fn render_morse_wav_bytes(morse: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let buffer = render_samples(morse, options)?;
    wav::to_wav_bytes(&buffer)
}
