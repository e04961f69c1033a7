//! Encoding descriptors for SWE Common data streams (OGC 08-094r1, Section 8).
//!
//! These describe how a stream serializer lays out component values. The
//! component tree never reads them.

/// Byte encoding of a binary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteEncoding {
    #[default]
    Raw,
    Base64,
}

impl ByteEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            ByteEncoding::Raw => "raw",
            ByteEncoding::Base64 => "base64",
        }
    }
}

/// Byte order of multi-byte values in a binary stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    BigEndian,
    #[default]
    LittleEndian,
}

impl ByteOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::BigEndian => "bigEndian",
            ByteOrder::LittleEndian => "littleEndian",
        }
    }
}

/// Delimiter-separated text encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEncoding {
    pub token_separator: String,
    pub block_separator: String,
    pub decimal_separator: String,
    pub collapse_white_spaces: bool,
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self {
            token_separator: ",".to_string(),
            block_separator: "\n".to_string(),
            decimal_separator: ".".to_string(),
            collapse_white_spaces: false,
        }
    }
}

/// Binary encoding of values laid out as in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryEncoding {
    pub byte_encoding: ByteEncoding,
    pub byte_order: ByteOrder,
    /// Total stream length, when known in advance.
    pub byte_length: Option<u64>,
}
