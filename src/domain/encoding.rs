//! Byte/text conversion for the standard streams

use std::fmt;

/// Encoding applied to raw stdin/stdout bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// UTF-16 little endian, no BOM
    Utf16Le,
}

impl TextEncoding {
    /// Decode raw bytes into text.
    ///
    /// Invalid sequences are replaced with U+FFFD. For UTF-16LE an odd
    /// trailing byte is treated as one invalid unit.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16Le => {
                let chunks = bytes.chunks_exact(2);
                let odd = !chunks.remainder().is_empty();
                let units = chunks.map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                let mut text: String = char::decode_utf16(units)
                    .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect();
                if odd {
                    text.push(char::REPLACEMENT_CHARACTER);
                }
                text
            }
        }
    }

    /// Encode text into raw bytes
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16Le => write!(f, "UTF-16LE"),
        }
    }
}
