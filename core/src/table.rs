use std::collections::HashMap;
use std::sync::LazyLock;

/// International Morse code table (ITU-R M.1677-1): letters, digits and
/// the common punctuation marks.
///
/// Letters are stored upper-case; lookups fold case before searching.
const MORSE_TABLE: [(char, &str); 54] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static ENCODE_INDEX: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| MORSE_TABLE.iter().copied().collect());

static DECODE_INDEX: LazyLock<HashMap<&'static str, char>> =
    LazyLock::new(|| MORSE_TABLE.iter().map(|&(c, code)| (code, c)).collect());

/// Dot/dash encoding of a single character, if it has one.
pub fn encode_char(c: char) -> Option<&'static str> {
    ENCODE_INDEX.get(&c.to_ascii_uppercase()).copied()
}

/// Character for a dot/dash group, if the group is in the table.
pub fn decode_symbol(group: &str) -> Option<char> {
    DECODE_INDEX.get(group).copied()
}

/// All table entries in reference order.
pub fn symbol_table() -> &'static [(char, &'static str)] {
    &MORSE_TABLE
}
