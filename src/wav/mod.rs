//! WAV file serializer.
//!
//! Writes byte-exact mono, 16-bit, little-endian PCM WAV files:
//!
//! ```text
//! "RIFF" <36 + data bytes> "WAVE"
//! "fmt " <16> <PCM=1> <channels=1> <rate> <byte rate> <block align=2> <bits=16>
//! "data" <data bytes> <samples...>
//! ```
//!
//! Files are written either to a caller-given path or to a fresh, uniquely
//! named file in the system temp directory. Ownership of the file passes to
//! the caller in both cases; nothing here deletes a file it handed back.
//!
//! A caller-given path is only replaced once the new file is complete. The
//! data goes to a sibling temp file first, which is then renamed over the
//! target, so a failed write leaves any existing file untouched.

mod format;
mod writer;

pub use format::{WavFormat, HEADER_LEN, MAX_DATA_BYTES};
pub use writer::{samples_to_pcm16, to_wav_bytes, write_wav_to};

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{MorseError, Result};
use crate::synth::SampleBuffer;

/// File name prefix for generated temp files.
pub const TEMP_PREFIX: &str = "morse_";

/// File name suffix for generated temp files.
pub const TEMP_SUFFIX: &str = ".wav";

/// Where [`write_wav`] puts the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// A fresh, uniquely named file in the system temp directory
    #[default]
    Temp,
    /// A caller-chosen path (created, or replaced once fully written)
    Path(PathBuf),
}

impl From<PathBuf> for Destination {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Temp, Self::Path)
    }
}

/// Write `buffer` as a WAV file and return its path.
///
/// On failure no new file is left behind and an existing file at a
/// caller-given path keeps its previous contents.
pub fn write_wav(buffer: &SampleBuffer, destination: Destination) -> Result<PathBuf> {
    writer::data_len(buffer)?;

    let path = match destination {
        Destination::Path(path) => {
            write_to_path(buffer, &path)?;
            path
        }
        Destination::Temp => write_to_temp(buffer)?,
    };

    tracing::debug!(
        path = %path.display(),
        frames = buffer.len(),
        sample_rate = buffer.sample_rate(),
        "wrote WAV file"
    );
    Ok(path)
}

fn write_to_path(buffer: &SampleBuffer, path: &Path) -> Result<()> {
    replace_file(path, |out| write_wav_to(out, buffer))
}

/// Write a sibling temp file with `write` and rename it over `path`.
fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_PREFIX).suffix(TEMP_SUFFIX);
    // Same mode as a plain `File::create` (0o666 less the umask)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder
        .tempfile_in(dir)
        .map_err(|e| MorseError::wav_write(path, e))?;

    // Dropping `temp` on error removes it and leaves `path` untouched
    fill(&mut temp, write).map_err(|e| MorseError::wav_write(path, e))?;
    temp.persist(path).map_err(|e| MorseError::wav_write(path, e.error))?;
    Ok(())
}

fn write_to_temp(buffer: &SampleBuffer) -> Result<PathBuf> {
    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile()
        .map_err(MorseError::temp_file)?;

    fill(&mut temp, |out| write_wav_to(out, buffer))
        .map_err(|e| MorseError::wav_write(temp.path(), e))?;

    let (_file, path) = temp
        .keep()
        .map_err(|e| MorseError::temp_file(e.error))?;
    Ok(path)
}

fn fill<F>(temp: &mut NamedTempFile, write: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let mut out = BufWriter::new(temp.as_file_mut());
    write(&mut out)?;
    out.flush()
}
