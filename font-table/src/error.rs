//! Error types for font table decoding and encoding

use std::fmt;

use thiserror::Error;

/// Glyph record field, used to report encode-time overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphField {
    Code,
    Width,
    Height,
    Frame,
}

impl fmt::Display for GlyphField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Code => "character code",
            Self::Width => "width",
            Self::Height => "height",
            Self::Frame => "frame index",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when decoding or encoding a font table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontTableError {
    /// Missing or wrong signature (expected "Woo!" 0x01)
    #[error("invalid font table format (expected 'Woo!\\x01' signature)")]
    InvalidFormat,

    /// Signature present but the reserved header region is cut short
    #[error("truncated header: {len} bytes (need 12)")]
    TruncatedHeader { len: usize },

    /// A glyph record starts but does not fit in the buffer
    #[error(
        "truncated glyph record at offset 0x{offset:X}: {remaining} of 14 bytes \
         ({records_read} complete records before it)"
    )]
    TruncatedRecord {
        offset: usize,
        remaining: usize,
        records_read: usize,
    },

    /// A glyph value does not fit its record field
    #[error("{field} {value} of glyph 0x{code:04X} exceeds field maximum {max}")]
    FieldOverflow {
        code: u32,
        field: GlyphField,
        value: u32,
        max: u32,
    },
}
