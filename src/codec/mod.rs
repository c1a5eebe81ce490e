//! Text to Morse conversion and back.
//!
//! # Format
//!
//! ```text
//! morse   = word { "   " word }
//! word    = code { " " code }
//! code    = ('.' | '-') { '.' | '-' }
//! ```
//!
//! Encoding splits the text on single spaces, so an empty word (two
//! adjacent spaces in the text) is kept as an empty segment between two
//! word separators.
//!
//! Decoding is lossy on case: a letter is uppercase when it starts the
//! output or follows a space, lowercase otherwise.

mod tokenizer;

pub use tokenizer::{GapTokenizer, Token};

use crate::alphabet::{AlphabetTable, DecodedSymbol};
use crate::error::{MorseError, Result};

/// Separator between the codes of one word.
pub const LETTER_SEPARATOR: &str = " ";

/// Separator between words.
pub const WORD_SEPARATOR: &str = "   ";

/// Encoder/decoder bound to an [`AlphabetTable`].
#[derive(Debug, Clone, Copy)]
pub struct MorseCodec<'a> {
    table: &'a AlphabetTable,
}

impl<'a> MorseCodec<'a> {
    /// Create a codec that reads from the given table.
    pub fn new(table: &'a AlphabetTable) -> Self {
        Self { table }
    }

    /// Get the table this codec reads from.
    pub fn table(&self) -> &'a AlphabetTable {
        self.table
    }

    /// Translate plain text into a Morse string.
    ///
    /// Fails on the first character that has no code.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut words: Vec<String> = Vec::new();
        for word in text.split(' ') {
            let codes = word
                .chars()
                .map(|ch| {
                    self.table
                        .code_for(ch)
                        .ok_or(MorseError::UnsupportedCharacter(ch))
                })
                .collect::<Result<Vec<_>>>()?;
            words.push(codes.join(LETTER_SEPARATOR));
        }
        Ok(words.join(WORD_SEPARATOR))
    }

    /// Translate a Morse string back into text.
    ///
    /// Fails on the first token that is not in the table.
    pub fn decode(&self, morse: &str) -> Result<String> {
        let mut text = String::with_capacity(morse.len() / 2);
        for token in GapTokenizer::new(morse) {
            match token {
                Token::WordGap => text.push(' '),
                Token::Code(code) => {
                    let symbol = self
                        .table
                        .symbol_for(code)
                        .ok_or_else(|| MorseError::unsupported_symbol(code))?;
                    text.push(match symbol {
                        DecodedSymbol::Letter { upper, lower } => {
                            if text.is_empty() || text.ends_with(' ') {
                                upper
                            } else {
                                lower
                            }
                        }
                        DecodedSymbol::Digit(c) | DecodedSymbol::Punctuation(c) => c,
                    });
                }
            }
        }
        Ok(text)
    }
}

/// Translate plain text into a Morse string using `table`.
pub fn encode_text_to_morse(table: &AlphabetTable, text: &str) -> Result<String> {
    MorseCodec::new(table).encode(text)
}

/// Translate a Morse string into text using `table`.
pub fn decode_morse_to_text(table: &AlphabetTable, morse: &str) -> Result<String> {
    MorseCodec::new(table).decode(morse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec_roundtrip(text: &str) -> String {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        codec.decode(&codec.encode(text).unwrap()).unwrap()
    }

    #[test]
    fn test_encode_sos() {
        let table = AlphabetTable::standard();
        assert_eq!(encode_text_to_morse(&table, "SOS").unwrap(), "... --- ...");
    }

    #[test]
    fn test_decode_sos() {
        let table = AlphabetTable::standard();
        assert_eq!(decode_morse_to_text(&table, "... --- ...").unwrap(), "Sos");
    }

    #[test]
    fn test_encode_words_use_triple_space() {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        assert_eq!(codec.encode("HI MOM").unwrap(), ".... ..   -- --- --");
        assert_eq!(codec.encode("a1").unwrap(), ".- .----");
        assert_eq!(codec.encode("?").unwrap(), "..--..");
        assert_eq!(codec.encode("ÄÖÜŠ").unwrap(), ".-.- ---. ..-- ----");
    }

    #[test]
    fn test_encode_empty() {
        let table = AlphabetTable::standard();
        assert_eq!(MorseCodec::new(&table).encode("").unwrap(), "");
    }

    #[test]
    fn test_encode_double_space_keeps_empty_word() {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        // ".-" + separator + empty word + separator + "-..."
        assert_eq!(codec.encode("A  B").unwrap(), ".-      -...");
        assert_eq!(codec.encode(" A").unwrap(), "   .-");
        assert_eq!(codec.encode("A ").unwrap(), ".-   ");
    }

    #[test]
    fn test_encode_unsupported_character() {
        let table = AlphabetTable::standard();
        let err = MorseCodec::new(&table).encode("A©").unwrap_err();
        assert!(matches!(err, MorseError::UnsupportedCharacter('©')));
        assert!(err.to_string().contains('©'));
    }

    #[test]
    fn test_encode_rejects_newline() {
        let table = AlphabetTable::standard();
        let err = MorseCodec::new(&table).encode("A\nB").unwrap_err();
        assert!(matches!(err, MorseError::UnsupportedCharacter('\n')));
    }

    #[test]
    fn test_decode_case_reconstruction() {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        assert_eq!(codec.decode(".... ..   -- --- --").unwrap(), "Hi Mom");
        // Letters after a digit stay lowercase
        assert_eq!(codec.decode(".---- .-").unwrap(), "1a");
        assert_eq!(codec.decode("----").unwrap(), "Š");
    }

    #[test]
    fn test_decode_triple_space_emits_one_space() {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        assert_eq!(codec.decode(".-   -...").unwrap(), "A B");
        assert_eq!(codec.decode(".-      -...").unwrap(), "A B");
    }

    #[test]
    fn test_decode_edges() {
        let table = AlphabetTable::standard();
        let codec = MorseCodec::new(&table);
        assert_eq!(codec.decode("").unwrap(), "");
        assert_eq!(codec.decode("   .-").unwrap(), "A");
        assert_eq!(codec.decode(".-   ").unwrap(), "A ");
    }

    #[test]
    fn test_decode_unsupported_symbol() {
        let table = AlphabetTable::standard();
        let err = MorseCodec::new(&table).decode(".- ........").unwrap_err();
        match err {
            MorseError::UnsupportedSymbol(token) => assert_eq!(token, "........"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_roundtrip_capitalizes_words() {
        assert_eq!(codec_roundtrip("hELLO wORLD"), "Hello World");
        assert_eq!(codec_roundtrip("Tartu Ylikool 1632."), "Tartu Ylikool 1632.");
        assert_eq!(codec_roundtrip("(x + y - z) = 420"), "(x + Y - Z) = 420");
        assert_eq!(
            codec_roundtrip("morsekood@morsekood.com"),
            "Morsekood@morsekood.com"
        );
    }
}
