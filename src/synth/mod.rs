//! PCM tone synthesis.
//!
//! Each [`MorseEvent`] becomes a run of samples whose length is
//! `max(1, round(unit_ms / 1000 * units * sample_rate))`. Tones are a plain
//! sine at the configured frequency, restarted at phase zero for every tone
//! and truncated toward zero into 16-bit samples. Silences are zeros. There
//! is no fading between events.

mod settings;

pub use settings::*;

use std::f64::consts::PI;

use crate::error::{MorseError, Result};
use crate::timing::MorseEvent;
use crate::wav::MAX_DATA_BYTES;

/// Bytes per 16-bit mono sample.
const BYTES_PER_SAMPLE: u64 = 2;

/// Mono 16-bit samples at a fixed sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wrap existing samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The samples in playback order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples (frames, since the buffer is mono).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Consume the buffer, returning the raw samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

/// Number of samples an event of `units` occupies. Never zero.
///
/// Saturates at `u64::MAX` for absurdly long events.
pub fn duration_samples(settings: &AudioSettings, units: u32, sample_rate: u32) -> u64 {
    let unit_secs = f64::from(settings.unit_duration_ms()) / 1000.0;
    let samples = (unit_secs * f64::from(units) * f64::from(sample_rate)).round();
    (samples as u64).max(1)
}

/// Render an event sequence into a sample buffer.
///
/// The total length is checked before anything is allocated.
///
/// # Errors
/// - [`MorseError::NoContent`] if `events` is empty
/// - [`MorseError::InvalidSampleRate`] if `sample_rate` is zero
/// - [`MorseError::WavTooLarge`] if the result could not be stored in a WAV file
pub fn synthesize_samples(
    events: &[MorseEvent],
    settings: &AudioSettings,
    sample_rate: u32,
) -> Result<SampleBuffer> {
    if events.is_empty() {
        return Err(MorseError::NoContent);
    }
    if sample_rate == 0 {
        return Err(MorseError::InvalidSampleRate(sample_rate));
    }

    let lengths: Vec<u64> = events
        .iter()
        .map(|event| duration_samples(settings, event.units(), sample_rate))
        .collect();
    let total = lengths
        .iter()
        .fold(0u64, |sum, &length| sum.saturating_add(length));
    let data_bytes = total.saturating_mul(BYTES_PER_SAMPLE);
    if data_bytes > u64::from(MAX_DATA_BYTES) {
        return Err(MorseError::WavTooLarge { data_bytes });
    }
    let mut samples = Vec::with_capacity(total as usize);

    let amplitude = settings.amplitude();
    let angle_step = 2.0 * PI * settings.frequency_hz() / f64::from(sample_rate);

    for (event, &length) in events.iter().zip(&lengths) {
        let length = length as usize;
        match event {
            MorseEvent::Tone(_) => {
                samples.extend(
                    (0..length).map(|i| (amplitude * (angle_step * i as f64).sin()) as i16),
                );
            }
            MorseEvent::Silence(_) => samples.resize(samples.len() + length, 0),
        }
    }

    tracing::debug!(
        events = events.len(),
        samples = samples.len(),
        sample_rate,
        "synthesized Morse audio"
    );
    Ok(SampleBuffer::new(samples, sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::parse_timing;
    use approx::assert_relative_eq;

    const RATE: u32 = 44_100;

    #[test]
    fn test_empty_events_is_no_content() {
        let err = synthesize_samples(&[], &AudioSettings::default(), RATE).unwrap_err();
        assert!(matches!(err, MorseError::NoContent));
    }

    #[test]
    fn test_zero_sample_rate_is_rejected() {
        let events = [MorseEvent::Tone(1)];
        let err = synthesize_samples(&events, &AudioSettings::default(), 0).unwrap_err();
        assert!(matches!(err, MorseError::InvalidSampleRate(0)));
    }

    #[test]
    fn test_oversized_event_fails_before_allocating() {
        let settings = AudioSettings::default();
        let events = [MorseEvent::Tone(u32::MAX)];
        let err = synthesize_samples(&events, &settings, RATE).unwrap_err();
        match err {
            MorseError::WavTooLarge { data_bytes } => {
                assert!(data_bytes > u64::from(MAX_DATA_BYTES))
            }
            other => panic!("unexpected error: {other}"),
        }

        // Many events that only overflow together
        let events = vec![MorseEvent::Silence(300_000); 8];
        assert!(matches!(
            synthesize_samples(&events, &settings, RATE),
            Err(MorseError::WavTooLarge { .. })
        ));
    }

    #[test]
    fn test_huge_duration_does_not_wrap() {
        let settings = AudioSettings::default().with_speed(180);
        assert!(duration_samples(&settings, u32::MAX, u32::MAX) > u64::from(u32::MAX));
    }

    #[test]
    fn test_duration_rounds_and_never_zero() {
        let settings = AudioSettings::default().with_speed(60);
        // 0.06 s * 1 unit * 44100 Hz
        assert_eq!(duration_samples(&settings, 1, RATE), 2646);
        assert_eq!(duration_samples(&settings, 3, RATE), 7938);
        // 0.03 s * 1 * 60 Hz = 1.8 samples, rounded rather than truncated
        let fast = AudioSettings::default().with_speed(30);
        assert_eq!(duration_samples(&fast, 1, 60), 2);
        assert_eq!(duration_samples(&fast, 1, 10), 1);
        assert_eq!(duration_samples(&fast, 1, 1), 1);
    }

    #[test]
    fn test_sample_count_matches_events() {
        let settings = AudioSettings::default();
        let events = parse_timing(".-").unwrap();
        let buffer = synthesize_samples(&events, &settings, RATE).unwrap();
        // 1 + 1 + 3 units
        assert_eq!(buffer.len(), 5 * 2646);
        assert_eq!(buffer.sample_rate(), RATE);
        assert_relative_eq!(buffer.duration_secs(), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_silence_is_zero_and_tone_is_not() {
        let settings = AudioSettings::default();
        let events = [MorseEvent::Tone(1), MorseEvent::Silence(1)];
        let buffer = synthesize_samples(&events, &settings, RATE).unwrap();
        let unit = duration_samples(&settings, 1, RATE) as usize;
        let (tone, silence) = buffer.samples().split_at(unit);
        assert!(silence.iter().all(|&s| s == 0));
        assert!(tone.iter().any(|&s| s != 0));
        // Phase starts at zero
        assert_eq!(tone[0], 0);
    }

    #[test]
    fn test_sine_values_truncate() {
        // 400 Hz at 1600 Hz gives a quarter turn per sample
        let settings = AudioSettings::new(400.0, 60, 1.0);
        let buffer = synthesize_samples(&[MorseEvent::Tone(1)], &settings, 1600).unwrap();
        let s = buffer.samples();
        assert_eq!(s[0], 0);
        assert_eq!(s[1], 32767);
        assert_eq!(s[2], 0);
        assert_eq!(s[3], -32767);
    }

    #[test]
    fn test_amplitude_follows_volume() {
        let events = [MorseEvent::Tone(3)];
        let settings = AudioSettings::new(400.0, 60, 0.25);
        let quiet = synthesize_samples(&events, &settings, RATE).unwrap();
        let peak = quiet.samples().iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak <= 8192);
        assert!(peak > 8000);
    }

    #[test]
    fn test_out_of_range_volume_is_clamped() {
        let events = parse_timing("... --- ...").unwrap();
        for volume in [1.5, -0.5] {
            let settings = AudioSettings::default().with_volume(volume);
            let buffer = synthesize_samples(&events, &settings, RATE).unwrap();
            assert!(buffer.samples().iter().all(|s| s.unsigned_abs() <= 32767));
        }
        let silent = AudioSettings::default().with_volume(-0.5);
        let buffer = synthesize_samples(&events, &silent, RATE).unwrap();
        assert!(buffer.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_longer_unit_means_more_samples() {
        let events = parse_timing(".- -...").unwrap();
        let mut previous = 0;
        for unit_ms in [30, 50, 60, 100, 150, 180] {
            let settings = AudioSettings::default().with_speed(unit_ms);
            let len = synthesize_samples(&events, &settings, RATE).unwrap().len();
            assert!(len > previous, "{unit_ms} ms gave {len} samples");
            previous = len;
        }
    }
}
