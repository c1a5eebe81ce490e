//! Static Morse code charts.
//!
//! Each chart is listed in the order the flashcard decks present it.
//! Letters are stored lowercase; the uppercase form shares the same code.

/// Latin letters plus the Estonian extensions, in chart order.
pub(super) const LETTERS: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('š', "----"),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('ä', ".-.-"),
    ('ö', "---."),
    ('ü', "..--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
];

pub(super) const DIGITS: &[(char, &str)] = &[
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
];

pub(super) const PUNCTUATION: &[(char, &str)] = &[
    (',', "--..--"),
    ('.', ".-.-.-"),
    ('!', "-.-.--"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('\'', ".----."),
    ('"', ".-..-."),
    (':', "---..."),
    (';', "-.-.-."),
    ('+', ".-.-."),
    ('=', "-...-"),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    ('_', "..--.-"),
];
