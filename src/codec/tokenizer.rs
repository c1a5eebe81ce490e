//! Tokenizer for Morse strings in the codec's output format.

/// A token produced by the [`GapTokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A non-empty run of characters between single spaces
    Code(&'a str),
    /// A word boundary (one per run of separator spaces)
    WordGap,
}

/// Splits a Morse string on single spaces and coalesces the empty pieces.
///
/// A single space separates letters and produces no token. Two or more
/// consecutive empty pieces (the three-space word separator, or any longer
/// run) produce exactly one [`Token::WordGap`]. Gaps before the first code
/// are dropped; a trailing gap is kept.
pub struct GapTokenizer<'a> {
    pieces: std::str::Split<'a, char>,
    previous_empty: bool,
    gap_emitted: bool,
    seen_code: bool,
}

impl<'a> GapTokenizer<'a> {
    /// Create a new tokenizer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            pieces: input.split(' '),
            previous_empty: false,
            gap_emitted: false,
            seen_code: false,
        }
    }
}

impl<'a> Iterator for GapTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        for piece in self.pieces.by_ref() {
            if !piece.is_empty() {
                self.previous_empty = false;
                self.gap_emitted = false;
                self.seen_code = true;
                return Some(Token::Code(piece));
            }

            let second_in_run = self.previous_empty;
            self.previous_empty = true;
            if second_in_run && self.seen_code && !self.gap_emitted {
                self.gap_emitted = true;
                return Some(Token::WordGap);
            }
        }
        None
    }
}
