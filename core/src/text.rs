use crate::error::{MorseError, Result};
use crate::table::{decode_symbol, encode_char};
use crate::{LETTER_SEPARATOR, WORD_SEPARATOR};

/// Encode English text as a Morse symbol string
///
/// Letters are separated by a single space and words by ` / `.
/// Any run of whitespace in the input counts as one word break.
pub fn text_to_morse(text: &str) -> Result<String> {
    let mut words = Vec::new();
    for word in text.split_whitespace() {
        let mut letters = Vec::with_capacity(word.len());
        for c in word.chars() {
            let code = encode_char(c).ok_or(MorseError::UnencodableCharacter(c))?;
            letters.push(code);
        }
        words.push(letters.join(LETTER_SEPARATOR));
    }
    Ok(words.join(WORD_SEPARATOR))
}

/// Decode a Morse symbol string into upper-case text
///
/// Words are split on `/`, letter groups on whitespace. The first group with
/// no table entry aborts the whole decode.
pub fn morse_to_text(morse: &str) -> Result<String> {
    let mut words = Vec::new();
    for word in morse.split('/') {
        let mut decoded = String::new();
        for group in word.split_whitespace() {
            let c = decode_symbol(group).ok_or_else(|| MorseError::UnrecognizedSymbol {
                group: group.to_string(),
            })?;
            decoded.push(c);
        }
        if !decoded.is_empty() {
            words.push(decoded);
        }
    }
    Ok(words.join(" "))
}

/// True when the input consists only of dots, dashes, slashes and whitespace,
/// with at least one dot or dash.
pub fn looks_like_morse(input: &str) -> bool {
    let mut has_symbol = false;
    for c in input.chars() {
        match c {
            '.' | '-' => has_symbol = true,
            '/' => {}
            c if c.is_whitespace() => {}
            _ => return false,
        }
    }
    has_symbol
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MorseToText,
    TextToMorse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::MorseToText => "morse_to_text",
            Direction::TextToMorse => "text_to_morse",
        }
    }
}

/// Result of translating input whose direction was inferred
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

/// Translate in whichever direction the input calls for
pub fn translate(input: &str) -> Result<Translation> {
    let trimmed = input.trim();
    let (direction, output) = if looks_like_morse(trimmed) {
        (Direction::MorseToText, morse_to_text(trimmed)?)
    } else {
        (Direction::TextToMorse, text_to_morse(trimmed)?)
    };
    log::debug!("translated {} chars as {}", trimmed.len(), direction.as_str());
    Ok(Translation {
        direction,
        input: trimmed.to_string(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos_both_directions() {
        assert_eq!(morse_to_text("... --- ...").unwrap(), "SOS");
        assert_eq!(text_to_morse("SOS").unwrap(), "... --- ...");
    }

    #[test]
    fn test_words_use_slash_separator() {
        let morse = text_to_morse("hello world").unwrap();
        assert_eq!(morse, ".... . .-.. .-.. --- / .-- --- .-. .-.. -..");
        assert_eq!(morse_to_text(&morse).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_extra_whitespace_is_tolerated() {
        assert_eq!(text_to_morse("  a   b ").unwrap(), ".- / -...");
        assert_eq!(morse_to_text("  .-   /  -...  ").unwrap(), "A B");
    }

    #[test]
    fn test_unknown_group_aborts_decode() {
        let err = morse_to_text("... ...... ...").unwrap_err();
        assert_eq!(
            err,
            MorseError::UnrecognizedSymbol {
                group: "......".to_string()
            }
        );
    }

    #[test]
    fn test_unencodable_character() {
        assert_eq!(
            text_to_morse("a#b").unwrap_err(),
            MorseError::UnencodableCharacter('#')
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(text_to_morse("").unwrap(), "");
        assert_eq!(morse_to_text("").unwrap(), "");
        assert_eq!(morse_to_text(" / ").unwrap(), "");
    }

    #[test]
    fn test_looks_like_morse() {
        assert!(looks_like_morse("... --- ..."));
        assert!(looks_like_morse(".- / -...\n"));
        assert!(!looks_like_morse("SOS"));
        assert!(!looks_like_morse("... x"));
        assert!(!looks_like_morse(" / "));
        assert!(!looks_like_morse(""));
    }

    #[test]
    fn test_translate_picks_direction() {
        let t = translate("  ... --- ...\n").unwrap();
        assert_eq!(t.direction, Direction::MorseToText);
        assert_eq!(t.input, "... --- ...");
        assert_eq!(t.output, "SOS");

        let t = translate("Hi there").unwrap();
        assert_eq!(t.direction, Direction::TextToMorse);
        assert_eq!(t.output, ".... .. / - .... . .-. .");
    }
}
