//! Caption-line URL path encoding.
//!
//! Caption lines become one path segment each, joined by `/`. Spaces turn
//! into `_`, URL-hostile characters and the path scheme's own separators
//! get `~x` escapes, and an empty line becomes the `~e` marker. The
//! transform round-trips exactly and is part of the public URL contract:
//! emitted URLs must stay linkable across versions, so the alphabet below
//! is append-only.

use std::fmt;

const EMPTY_MARKER: &str = "~e";

const ESCAPES: &[(char, char)] = &[
    ('~', '~'),
    ('_', 'u'),
    ('-', 'm'),
    ('/', 's'),
    ('.', 'd'),
    ('?', 'q'),
    ('&', 'a'),
    ('%', 'p'),
    ('#', 'h'),
    ('<', 'l'),
    ('>', 'g'),
    ('"', 't'),
    ('\\', 'b'),
    ('\n', 'n'),
];

fn escape_for(character: char) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(original, _)| *original == character)
        .map(|(_, tail)| *tail)
}

fn unescape(tail: char) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(_, escaped)| *escaped == tail)
        .map(|(original, _)| *original)
}

/// Caption text contains a character the URL encoding cannot represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeError {
    pub line: usize,
    pub character: char,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "caption line {} contains unencodable character {:?}",
            self.line, self.character
        )
    }
}

impl std::error::Error for EncodeError {}

/// Encoded caption text that does not follow the escape alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    BadEscape { position: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadEscape { position } => {
                write!(f, "invalid escape sequence at byte {position}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Encodes caption lines into a URL-path-safe string, one segment per
/// line. Control characters other than `\n` cannot be represented.
pub fn encode<S: AsRef<str>>(lines: &[S]) -> Result<String, EncodeError> {
    let mut segments = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        segments.push(encode_line(line.as_ref(), index)?);
    }
    Ok(segments.join("/"))
}

fn encode_line(line: &str, index: usize) -> Result<String, EncodeError> {
    if line.is_empty() {
        return Ok(EMPTY_MARKER.to_string());
    }
    let mut encoded = String::with_capacity(line.len());
    for character in line.chars() {
        match character {
            ' ' => encoded.push('_'),
            c if c.is_control() && c != '\n' => {
                return Err(EncodeError {
                    line: index,
                    character: c,
                });
            }
            c => match escape_for(c) {
                Some(tail) => {
                    encoded.push('~');
                    encoded.push(tail);
                }
                None => encoded.push(c),
            },
        }
    }
    Ok(encoded)
}

/// Inverse of [`encode`]. Also accepts `-` for a space, the dialect some
/// hand-written URLs use; the encoder itself only emits `_`.
pub fn decode(encoded: &str) -> Result<Vec<String>, DecodeError> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for segment in encoded.split('/') {
        lines.push(decode_segment(segment, offset)?);
        offset += segment.len() + 1;
    }
    Ok(lines)
}

fn decode_segment(segment: &str, base: usize) -> Result<String, DecodeError> {
    if segment == EMPTY_MARKER {
        return Ok(String::new());
    }
    let mut decoded = String::with_capacity(segment.len());
    let mut chars = segment.char_indices();
    while let Some((index, character)) = chars.next() {
        match character {
            '~' => {
                let original = chars.next().and_then(|(_, tail)| unescape(tail));
                match original {
                    Some(c) => decoded.push(c),
                    None => {
                        return Err(DecodeError::BadEscape {
                            position: base + index,
                        });
                    }
                }
            }
            '_' | '-' => decoded.push(' '),
            c => decoded.push(c),
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(lines: &[&str]) {
        let encoded = encode(lines).unwrap();
        assert_eq!(decode(&encoded).unwrap(), lines);
    }

    #[test]
    fn test_encode_basic_lines() {
        assert_eq!(
            encode(&["top text", "bottom text"]).unwrap(),
            "top_text/bottom_text"
        );
    }

    #[test]
    fn test_encode_escapes_separators() {
        assert_eq!(encode(&["a/b"]).unwrap(), "a~sb");
        assert_eq!(encode(&["v2.0"]).unwrap(), "v2~d0");
    }

    #[test]
    fn test_encode_empty_line_marker() {
        assert_eq!(encode(&["", "just the bottom"]).unwrap(), "~e/just_the_bottom");
    }

    #[test]
    fn test_encode_rejects_control_characters() {
        let err = encode(&["fine", "bad\u{7}line"]).unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.character, '\u{7}');
    }

    #[test]
    fn test_decode_dash_dialect() {
        assert_eq!(decode("top-text").unwrap(), vec!["top text"]);
    }

    #[test]
    fn test_decode_rejects_bad_escape() {
        assert_eq!(
            decode("dangling~").unwrap_err(),
            DecodeError::BadEscape { position: 8 }
        );
        assert!(decode("unknown~z").is_err());
    }

    #[test]
    fn test_round_trip_plain_text() {
        round_trip(&["top text", "bottom text"]);
        round_trip(&["one line only"]);
    }

    #[test]
    fn test_round_trip_scheme_separators() {
        round_trip(&["either/or", "file.png"]);
        round_trip(&["50% off", "#1 meme", "a&b?c"]);
    }

    #[test]
    fn test_round_trip_escape_alphabet_itself() {
        round_trip(&["~e", "~~", "snake_case", "kebab-case"]);
        round_trip(&["_", "-", " ", ""]);
    }

    #[test]
    fn test_round_trip_unicode_and_newline() {
        round_trip(&["déjà vu", "line\nbreak", "emoji 🔥"]);
    }

    #[test]
    fn test_encoded_output_is_path_safe() {
        let encoded = encode(&["what? 50% & <more>", "a\\b\"c"]).unwrap();
        assert!(!encoded.contains(['?', '&', '%', '<', '>', '"', '\\', ' ']));
    }
}
