//! Timing model: Morse string to tone/silence events.
//!
//! Durations are counted in units, where one unit is the length of a dot.
//!
//! | Element | Units |
//! |---------|-------|
//! | dot | tone 1 |
//! | dash | tone 3 |
//! | gap inside a letter | silence 1 |
//! | gap between letters | silence 3 |
//! | gap between words | silence 7 |

use std::fmt;

use crate::codec::{LETTER_SEPARATOR, WORD_SEPARATOR};
use crate::error::{MorseError, Result};

/// Units in a dot tone.
pub const DOT_UNITS: u32 = 1;
/// Units in a dash tone.
pub const DASH_UNITS: u32 = 3;
/// Silence between the symbols of one letter.
pub const SYMBOL_GAP_UNITS: u32 = 1;
/// Silence between letters of one word.
pub const LETTER_GAP_UNITS: u32 = 3;
/// Silence between words.
pub const WORD_GAP_UNITS: u32 = 7;

/// One tone or silence, measured in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorseEvent {
    /// Key down for the given number of units
    Tone(u32),
    /// Key up for the given number of units
    Silence(u32),
}

impl MorseEvent {
    /// Duration in units.
    pub fn units(&self) -> u32 {
        match self {
            Self::Tone(units) | Self::Silence(units) => *units,
        }
    }

    /// Returns true if this event produces a tone.
    pub fn is_tone(&self) -> bool {
        matches!(self, Self::Tone(_))
    }
}

impl fmt::Display for MorseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tone(units) => write!(f, "tone({})", units),
            Self::Silence(units) => write!(f, "silence({})", units),
        }
    }
}

/// Convert a Morse string into an ordered event sequence.
///
/// Surrounding whitespace is trimmed. Empty or whitespace-only input yields
/// an empty sequence; rejecting that is left to the synthesizer. Inside the
/// string any character other than `.`, `-` and spaces (including a
/// newline) fails.
pub fn parse_timing(morse: &str) -> Result<Vec<MorseEvent>> {
    let trimmed = morse.trim();
    let mut events = Vec::new();
    if trimmed.is_empty() {
        return Ok(events);
    }

    let words: Vec<&str> = trimmed
        .split(WORD_SEPARATOR)
        .filter(|word| !word.is_empty())
        .collect();

    for (word_index, word) in words.iter().enumerate() {
        if word_index > 0 {
            events.push(MorseEvent::Silence(WORD_GAP_UNITS));
        }

        let letters = word
            .split(LETTER_SEPARATOR)
            .filter(|letter| !letter.is_empty());
        for (letter_index, letter) in letters.enumerate() {
            if letter_index > 0 {
                events.push(MorseEvent::Silence(LETTER_GAP_UNITS));
            }
            push_letter(&mut events, letter)?;
        }
    }

    tracing::debug!(events = events.len(), "parsed Morse timing");
    Ok(events)
}

fn push_letter(events: &mut Vec<MorseEvent>, letter: &str) -> Result<()> {
    for (symbol_index, symbol) in letter.chars().enumerate() {
        if symbol_index > 0 {
            events.push(MorseEvent::Silence(SYMBOL_GAP_UNITS));
        }
        let units = match symbol {
            '.' => DOT_UNITS,
            '-' => DASH_UNITS,
            other => return Err(MorseError::unsupported_symbol(other)),
        };
        events.push(MorseEvent::Tone(units));
    }
    Ok(())
}

/// Total length of an event sequence in units.
pub fn total_units(events: &[MorseEvent]) -> u64 {
    events.iter().map(|event| u64::from(event.units())).sum()
}
