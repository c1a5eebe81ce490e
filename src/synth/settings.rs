//! Audio settings for tone synthesis.

/// Lowest allowed tone frequency in Hz.
pub const MIN_FREQUENCY_HZ: f64 = 200.0;
/// Highest allowed tone frequency in Hz.
pub const MAX_FREQUENCY_HZ: f64 = 800.0;
/// Shortest allowed unit in milliseconds.
pub const MIN_UNIT_DURATION_MS: u32 = 30;
/// Longest allowed unit in milliseconds.
pub const MAX_UNIT_DURATION_MS: u32 = 180;
/// Lowest volume (silence).
pub const MIN_VOLUME: f64 = 0.0;
/// Highest volume (full scale).
pub const MAX_VOLUME: f64 = 1.0;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 400.0;
/// Default unit length in milliseconds.
pub const DEFAULT_UNIT_DURATION_MS: u32 = 60;
/// Default volume.
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Immutable synthesis settings.
///
/// Every field is clamped into its allowed range on construction; out of
/// range input is never rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    frequency_hz: f64,
    unit_duration_ms: u32,
    volume: f64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            unit_duration_ms: DEFAULT_UNIT_DURATION_MS,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl AudioSettings {
    /// Create settings, clamping each value into range.
    pub fn new(frequency_hz: f64, unit_duration_ms: u32, volume: f64) -> Self {
        Self::default()
            .with_pitch(frequency_hz)
            .with_speed(unit_duration_ms)
            .with_volume(volume)
    }

    /// Return a copy with a new volume (clamped to [0, 1]).
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = clamp_f64(volume, MIN_VOLUME, MAX_VOLUME);
        self
    }

    /// Return a copy with a new unit length (clamped to [30, 180] ms).
    pub fn with_speed(mut self, unit_duration_ms: u32) -> Self {
        self.unit_duration_ms = unit_duration_ms.clamp(MIN_UNIT_DURATION_MS, MAX_UNIT_DURATION_MS);
        self
    }

    /// Return a copy with a new tone frequency (clamped to [200, 800] Hz).
    pub fn with_pitch(mut self, frequency_hz: f64) -> Self {
        self.frequency_hz = clamp_f64(frequency_hz, MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ);
        self
    }

    /// Tone frequency in Hz.
    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Unit length in milliseconds.
    pub fn unit_duration_ms(&self) -> u32 {
        self.unit_duration_ms
    }

    /// Volume in [0, 1].
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Peak sample magnitude for this volume.
    pub fn amplitude(&self) -> f64 {
        self.volume * f64::from(i16::MAX)
    }
}

/// Clamp a float, sending NaN to the lower bound.
fn clamp_f64(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        lower
    } else {
        value.clamp(lower, upper)
    }
}
