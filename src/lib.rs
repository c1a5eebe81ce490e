//! # Morse Core
//!
//! Morse code codec and tone synthesizer for the Morse trainer.
//!
//! This library provides:
//! - An immutable alphabet table (letters with Estonian extensions, digits, punctuation)
//! - Bidirectional text/Morse conversion
//! - A timing model turning Morse strings into tone/silence events
//! - PCM sine synthesis and a byte-exact WAV writer
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`alphabet`] - Symbol/code lookup, built once and shared read-only
//! - [`codec`] - `encode`/`decode` between text and Morse strings
//! - [`timing`] - Morse string to [`MorseEvent`] sequence
//! - [`synth`] - Events plus [`AudioSettings`] to 16-bit samples
//! - [`wav`] - Samples to a mono 16-bit PCM WAV file
//! - [`render`] - The whole pipeline behind one call
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! morse encode "SOS"                        # ... --- ...
//! morse render "... --- ..." -o sos.wav --unit-ms 80 --frequency 600
//! ```
//!
//! ### Library
//!
//! ```no_run
//! use morse_core::{AlphabetTable, MorseCodec, RenderOptions, render, wav::Destination};
//!
//! let table = AlphabetTable::standard();
//! let morse = MorseCodec::new(&table).encode("SOS")?;
//! let path = render::synthesize_morse_audio(&morse, &RenderOptions::new(), Destination::Temp)?;
//! // The caller owns `path` and deletes it when done
//! # std::fs::remove_file(path).ok();
//! # Ok::<(), morse_core::MorseError>(())
//! ```
//!
//! ## Morse Text Convention
//!
//! `.` is a dot and `-` a dash. Letters in a word are separated by one
//! space, words by exactly three. Newlines carry no meaning and must be
//! stripped before timing.

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod render;
pub mod synth;
pub mod timing;
pub mod wav;

// Re-export main types for convenience
pub use alphabet::{AlphabetTable, DecodedSymbol, SymbolClass};
pub use codec::{decode_morse_to_text, encode_text_to_morse, MorseCodec};
pub use error::{MorseError, Result};
pub use render::RenderOptions;
pub use synth::{synthesize_samples, AudioSettings, SampleBuffer};
pub use timing::{parse_timing, MorseEvent};
pub use wav::write_wav;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmMorse;

/// Default sample rate in Hz
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
