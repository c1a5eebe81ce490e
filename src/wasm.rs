//! WASM bindings for Morse Core.
//!
//! This module provides JavaScript-friendly bindings so a browser front end
//! can translate prompts and play Morse audio without a server.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmMorse } from 'morse_core';
//!
//! await init();
//!
//! const morse = new WasmMorse();
//! const code = morse.encode("SOS");          // "... --- ..."
//! const text = morse.decode(code);           // "Sos"
//!
//! const wav = morse.render_wav(code, 600, 80, 0.5, 44100);
//! const url = URL.createObjectURL(new Blob([wav], { type: "audio/wav" }));
//! new Audio(url).play();
//! ```

use wasm_bindgen::prelude::*;

use crate::alphabet::AlphabetTable;
use crate::codec::MorseCodec;
use crate::render::{render_morse_wav_bytes, RenderOptions};
use crate::synth::AudioSettings;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible Morse codec and tone renderer.
///
/// Owns its alphabet table, so one instance can serve the whole page.
#[wasm_bindgen]
pub struct WasmMorse {
    table: AlphabetTable,
}

#[wasm_bindgen]
impl WasmMorse {
    /// Create a codec with the standard alphabet.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMorse {
        WasmMorse {
            table: AlphabetTable::standard(),
        }
    }

    /// Translate text into Morse code.
    ///
    /// Throws if the text contains an unsupported character.
    #[wasm_bindgen]
    pub fn encode(&self, text: &str) -> Result<String, JsValue> {
        MorseCodec::new(&self.table)
            .encode(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Translate Morse code into text.
    ///
    /// Throws if the input contains an unknown code.
    #[wasm_bindgen]
    pub fn decode(&self, morse: &str) -> Result<String, JsValue> {
        MorseCodec::new(&self.table)
            .decode(morse)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Render a Morse string into WAV file bytes.
    ///
    /// # Arguments
    /// * `morse` - Morse string (no newlines inside it)
    /// * `frequency_hz` - Tone frequency, clamped to 200-800 Hz
    /// * `unit_duration_ms` - Dot length, clamped to 30-180 ms
    /// * `volume` - Volume, clamped to 0.0-1.0
    /// * `sample_rate` - Output sample rate in Hz
    ///
    /// # Returns
    /// A Uint8Array holding a complete mono 16-bit WAV file.
    #[wasm_bindgen]
    pub fn render_wav(
        &self,
        morse: &str,
        frequency_hz: f64,
        unit_duration_ms: u32,
        volume: f64,
        sample_rate: u32,
    ) -> Result<Vec<u8>, JsValue> {
        let options = RenderOptions::new()
            .with_settings(AudioSettings::new(frequency_hz, unit_duration_ms, volume))
            .with_sample_rate(sample_rate);
        render_morse_wav_bytes(morse, &options).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of symbols in the alphabet.
    #[wasm_bindgen(getter)]
    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }
}

impl Default for WasmMorse {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default sample rate.
#[wasm_bindgen]
pub fn default_sample_rate() -> u32 {
    crate::DEFAULT_SAMPLE_RATE
}
