//! Single-byte text encodings used by terminated strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Windows-1252 code points for 0x80..=0x9F. Undefined slots keep their Latin-1 value.
const CP1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

/// Character set for decoding string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringCharset {
    /// Windows-1252, the client's native text encoding
    #[default]
    Cp1252,
    /// ISO 8859-1, every byte maps to the code point of the same value
    Latin1,
}

impl StringCharset {
    /// Decode one byte
    #[inline]
    pub fn decode_byte(self, byte: u8) -> char {
        match (self, byte) {
            (StringCharset::Cp1252, 0x80..=0x9F) => CP1252_HIGH[usize::from(byte - 0x80)],
            _ => char::from(byte),
        }
    }

    /// Decode a run of bytes
    pub fn decode(self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| self.decode_byte(b)).collect()
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            StringCharset::Cp1252 => "cp1252",
            StringCharset::Latin1 => "latin1",
        }
    }
}

impl FromStr for StringCharset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cp1252" | "windows-1252" => Ok(StringCharset::Cp1252),
            "latin1" | "iso-8859-1" => Ok(StringCharset::Latin1),
            other => Err(format!("Unknown charset: {other}")),
        }
    }
}
