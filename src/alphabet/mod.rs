//! Bidirectional symbol/code lookup.
//!
//! The [`AlphabetTable`] holds three disjoint sub-tables (letters, digits and
//! punctuation) and their inverses. It is built once with
//! [`AlphabetTable::standard`] and only ever read afterwards, so a single
//! instance can be shared by reference across threads without locking.
//!
//! Classification always tries letters first, then digits, then punctuation.

mod tables;

use std::collections::HashMap;
use std::fmt;

/// The sub-alphabet a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    /// Latin letters and language-specific extensions (case-insensitive)
    Letter,
    /// Decimal digits 0-9
    Digit,
    /// Punctuation marks
    Punctuation,
}

impl SymbolClass {
    /// All classes in lookup order.
    pub const ALL: [SymbolClass; 3] = [Self::Letter, Self::Digit, Self::Punctuation];

    /// Parse a class from a user-facing name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "letter" | "letters" => Some(Self::Letter),
            "digit" | "digits" | "number" | "numbers" => Some(Self::Digit),
            "punctuation" | "symbol" | "symbols" => Some(Self::Punctuation),
            _ => None,
        }
    }

    fn chart(self) -> &'static [(char, &'static str)] {
        match self {
            Self::Letter => tables::LETTERS,
            Self::Digit => tables::DIGITS,
            Self::Punctuation => tables::PUNCTUATION,
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "letters"),
            Self::Digit => write!(f, "digits"),
            Self::Punctuation => write!(f, "punctuation"),
        }
    }
}

/// The result of looking up a Morse code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedSymbol {
    /// A letter, carrying both case forms so the caller can pick one
    Letter { upper: char, lower: char },
    /// A digit, emitted verbatim
    Digit(char),
    /// A punctuation mark, emitted verbatim
    Punctuation(char),
}

impl DecodedSymbol {
    /// The class this symbol was found in.
    pub fn class(&self) -> SymbolClass {
        match self {
            Self::Letter { .. } => SymbolClass::Letter,
            Self::Digit(_) => SymbolClass::Digit,
            Self::Punctuation(_) => SymbolClass::Punctuation,
        }
    }
}

/// One direction of a sub-alphabet plus its inverse.
#[derive(Debug, Clone, Default)]
struct SubTable {
    to_code: HashMap<char, &'static str>,
    from_code: HashMap<&'static str, char>,
}

impl SubTable {
    fn from_chart(chart: &'static [(char, &'static str)]) -> Self {
        let mut table = Self::default();
        for &(symbol, code) in chart {
            table.to_code.insert(symbol, code);
            table.from_code.insert(code, symbol);
        }
        table
    }

    /// Like [`SubTable::from_chart`], but `to_code` also accepts the
    /// uppercase form of every symbol.
    fn from_letter_chart(chart: &'static [(char, &'static str)]) -> Self {
        let mut table = Self::from_chart(chart);
        for &(symbol, code) in chart {
            table.to_code.insert(upper_case(symbol), code);
        }
        table
    }
}

/// Immutable registry mapping symbols to Morse codes and back.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    letters: SubTable,
    digits: SubTable,
    punctuation: SubTable,
}

impl AlphabetTable {
    /// Build the standard table (Latin letters with Estonian extensions,
    /// digits and common punctuation).
    pub fn standard() -> Self {
        Self {
            letters: SubTable::from_letter_chart(tables::LETTERS),
            digits: SubTable::from_chart(tables::DIGITS),
            punctuation: SubTable::from_chart(tables::PUNCTUATION),
        }
    }

    fn sub_table(&self, class: SymbolClass) -> &SubTable {
        match class {
            SymbolClass::Letter => &self.letters,
            SymbolClass::Digit => &self.digits,
            SymbolClass::Punctuation => &self.punctuation,
        }
    }

    /// Classify a character and return its code.
    pub fn lookup(&self, ch: char) -> Option<(SymbolClass, &'static str)> {
        if let Some(&code) = self.letters.to_code.get(&ch) {
            return Some((SymbolClass::Letter, code));
        }
        if let Some(&code) = self.digits.to_code.get(&ch) {
            return Some((SymbolClass::Digit, code));
        }
        self.punctuation
            .to_code
            .get(&ch)
            .map(|code| (SymbolClass::Punctuation, *code))
    }

    /// Get the Morse code for a character, if it is supported.
    pub fn code_for(&self, ch: char) -> Option<&'static str> {
        self.lookup(ch).map(|(_, code)| code)
    }

    /// Get the sub-alphabet a character belongs to.
    pub fn classify(&self, ch: char) -> Option<SymbolClass> {
        self.lookup(ch).map(|(class, _)| class)
    }

    /// Look up a Morse code, trying letters, then digits, then punctuation.
    pub fn symbol_for(&self, code: &str) -> Option<DecodedSymbol> {
        if let Some(&lower) = self.letters.from_code.get(code) {
            return Some(DecodedSymbol::Letter {
                upper: upper_case(lower),
                lower,
            });
        }
        if let Some(&digit) = self.digits.from_code.get(code) {
            return Some(DecodedSymbol::Digit(digit));
        }
        self.punctuation
            .from_code
            .get(code)
            .map(|&mark| DecodedSymbol::Punctuation(mark))
    }

    /// Iterate a sub-alphabet in chart order.
    ///
    /// Letters are yielded in their lowercase form.
    pub fn entries(&self, class: SymbolClass) -> impl Iterator<Item = (char, &'static str)> {
        class.chart().iter().copied()
    }

    /// Total number of symbols (letters counted once).
    pub fn len(&self) -> usize {
        SymbolClass::ALL
            .iter()
            .map(|&class| self.sub_table(class).from_code.len())
            .sum()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Uppercase a character when it has a single-character uppercase form.
fn upper_case(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(raised), None) => raised,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_case_insensitive() {
        let table = AlphabetTable::standard();
        assert_eq!(table.code_for('a'), Some(".-"));
        assert_eq!(table.code_for('A'), Some(".-"));
        assert_eq!(table.code_for('š'), Some("----"));
        assert_eq!(table.code_for('Š'), Some("----"));
        assert_eq!(table.code_for('Ä'), Some(".-.-"));
        assert_eq!(table.code_for('Ö'), Some("---."));
        assert_eq!(table.code_for('Ü'), Some("..--"));
    }

    #[test]
    fn test_only_chart_case_forms_are_letters() {
        let table = AlphabetTable::standard();
        assert_eq!(table.code_for('K'), Some("-.-"));
        assert_eq!(table.code_for('k'), Some("-.-"));
        // KELVIN SIGN lowercases to 'k' but is not a chart letter
        assert_eq!(table.code_for('\u{212A}'), None);
        assert_eq!(table.classify('\u{212A}'), None);
        // ANGSTROM SIGN lowercases to 'å', which is not in the chart either
        assert_eq!(table.code_for('\u{212B}'), None);
    }

    #[test]
    fn test_classify() {
        let table = AlphabetTable::standard();
        assert_eq!(table.classify('Q'), Some(SymbolClass::Letter));
        assert_eq!(table.classify('7'), Some(SymbolClass::Digit));
        assert_eq!(table.classify('@'), Some(SymbolClass::Punctuation));
        assert_eq!(table.classify('©'), None);
        assert_eq!(table.classify(' '), None);
    }

    #[test]
    fn test_symbol_for() {
        let table = AlphabetTable::standard();
        assert_eq!(
            table.symbol_for("..."),
            Some(DecodedSymbol::Letter {
                upper: 'S',
                lower: 's'
            })
        );
        assert_eq!(
            table.symbol_for("----"),
            Some(DecodedSymbol::Letter {
                upper: 'Š',
                lower: 'š'
            })
        );
        assert_eq!(table.symbol_for("-----"), Some(DecodedSymbol::Digit('0')));
        assert_eq!(
            table.symbol_for("..--.-"),
            Some(DecodedSymbol::Punctuation('_'))
        );
        assert_eq!(table.symbol_for("........"), None);
        assert_eq!(table.symbol_for(""), None);
    }

    #[test]
    fn test_each_sub_alphabet_is_a_bijection() {
        let table = AlphabetTable::standard();
        for class in SymbolClass::ALL {
            let entries: Vec<_> = table.entries(class).collect();
            assert_eq!(table.sub_table(class).from_code.len(), entries.len());
            for (symbol, code) in entries {
                let decoded = table.symbol_for(code).expect("code should decode");
                assert_eq!(decoded.class(), class);
                match decoded {
                    DecodedSymbol::Letter { lower, .. } => assert_eq!(lower, symbol),
                    DecodedSymbol::Digit(c) | DecodedSymbol::Punctuation(c) => {
                        assert_eq!(c, symbol)
                    }
                }
            }
        }
    }

    #[test]
    fn test_chart_order_and_size() {
        let table = AlphabetTable::standard();
        let letters: String = table.entries(SymbolClass::Letter).map(|(c, _)| c).collect();
        assert_eq!(letters, "abcdefghijklmnopqrsštuvwäöüxyz");
        let digits: String = table.entries(SymbolClass::Digit).map(|(c, _)| c).collect();
        assert_eq!(digits, "1234567890");
        assert_eq!(table.len(), 30 + 10 + 18);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_class_from_name() {
        assert_eq!(SymbolClass::from_name("Letters"), Some(SymbolClass::Letter));
        assert_eq!(SymbolClass::from_name("numbers"), Some(SymbolClass::Digit));
        assert_eq!(
            SymbolClass::from_name("symbols"),
            Some(SymbolClass::Punctuation)
        );
        assert_eq!(SymbolClass::from_name("emoji"), None);
    }

    #[test]
    fn test_table_is_shareable_across_threads() {
        let table = std::sync::Arc::new(AlphabetTable::standard());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let table = std::sync::Arc::clone(&table);
                std::thread::spawn(move || table.code_for('e'))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("."));
        }
    }
}
