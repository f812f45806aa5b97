use crate::error::ChRot13Error;

/// Direction the user asked for
/// ROT13 is its own inverse, so this only changes how progress is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

impl Mode {
    /// Resolve the mode from the two CLI switches
    pub fn from_flags(encode: bool, decode: bool) -> Result<Self, ChRot13Error> {
        match (encode, decode) {
            (true, true) => Err(ChRot13Error::ConflictingModes),
            (_, true) => Ok(Self::Decode),
            _ => Ok(Self::Encode),
        }
    }

    /// Present participle used in progress lines ("Encoding", "Decoding")
    pub fn progressive(&self) -> &'static str {
        match self {
            Self::Encode => "Encoding",
            Self::Decode => "Decoding",
        }
    }

    /// Past tense used in completion lines ("Encoded", "Decoded")
    pub fn past(&self) -> &'static str {
        match self {
            Self::Encode => "Encoded",
            Self::Decode => "Decoded",
        }
    }

    pub fn progress_message(&self) -> String {
        format!("{} ROT13...", self.progressive())
    }
}

/// Metadata produced alongside the transformed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformReport {
    pub mode: Mode,
    /// Number of characters (Unicode scalar values) processed
    pub characters: usize,
}

impl TransformReport {
    pub fn summary_message(&self) -> String {
        format!("{} {} characters", self.mode.past(), self.characters)
    }
}

/// Rotate a single character by 13 places
/// Only ASCII letters move; everything else passes through untouched
pub fn rot13_char(c: char) -> char {
    match c {
        'a'..='z' => rotate(c, b'a'),
        'A'..='Z' => rotate(c, b'A'),
        _ => c,
    }
}

fn rotate(c: char, base: u8) -> char {
    let offset = (c as u8 - base + 13) % 26;
    (base + offset) as char
}

/// Apply ROT13 to every character of `text`
pub fn rot13(text: &str) -> String {
    text.chars().map(rot13_char).collect()
}

/// Transform `text` and report how much was processed
/// Pure: never touches any output stream
pub fn transform(text: &str, mode: Mode) -> (String, TransformReport) {
    let output = rot13(text);
    let characters = text.chars().count();

    (output, TransformReport { mode, characters })
}
