//! WAV format parameters.

/// Size of the canonical PCM header in bytes.
pub const HEADER_LEN: usize = 44;

/// RIFF chunk size excluding the data payload: "WAVE" + fmt chunk + data chunk header.
pub(crate) const RIFF_OVERHEAD: u32 = 36;

/// Largest data chunk whose RIFF size still fits in 32 bits.
pub const MAX_DATA_BYTES: u32 = u32::MAX - RIFF_OVERHEAD;

/// WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (always 1 here).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 here).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit PCM format.
    pub fn mono16(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}
