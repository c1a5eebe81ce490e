//! Byte-level WAV serialization.

use std::io::{self, Write};

use crate::error::{MorseError, Result};
use crate::synth::SampleBuffer;

use super::format::{WavFormat, HEADER_LEN, MAX_DATA_BYTES, RIFF_OVERHEAD};

/// Size of the data chunk for `buffer`, if it fits the 32-bit RIFF fields.
pub(crate) fn data_len(buffer: &SampleBuffer) -> Result<u32> {
    let format = WavFormat::mono16(buffer.sample_rate());
    let data_bytes = buffer.len() as u64 * u64::from(format.block_align());
    match u32::try_from(data_bytes) {
        Ok(len) if len <= MAX_DATA_BYTES => Ok(len),
        _ => Err(MorseError::WavTooLarge { data_bytes }),
    }
}

/// Converts samples to little-endian 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Writes a complete mono 16-bit WAV file to a writer.
///
/// Header fields are derived from the buffer's sample count and rate.
pub fn write_wav_to<W: Write + ?Sized>(
    writer: &mut W,
    buffer: &SampleBuffer,
) -> io::Result<()> {
    let data_size = data_len(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let format = WavFormat::mono16(buffer.sample_rate());
    let riff_size = RIFF_OVERHEAD + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(&samples_to_pcm16(buffer.samples()))?;

    Ok(())
}

/// Serializes a buffer into an in-memory WAV file.
pub fn to_wav_bytes(buffer: &SampleBuffer) -> Result<Vec<u8>> {
    let data_size = data_len(buffer)? as usize;
    let mut bytes = Vec::with_capacity(HEADER_LEN + data_size);
    write_wav_to(&mut bytes, buffer)
        .map_err(|e| MorseError::wav_write(std::path::Path::new("<memory>"), e))?;
    Ok(bytes)
}
