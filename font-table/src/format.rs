//! Wire-level header and record structures
//!
//! These mirror the on-disk layout byte for byte. Reserved bytes are kept
//! as read so that a record can be inspected, but nothing interprets them.

use serde::{Deserialize, Serialize};

use crate::error::{FontTableError, GlyphField};
use crate::glyph::Glyph;
use crate::{
    FILE_SIGNATURE, HEADER_SIZE, MAX_CHAR_CODE, MAX_FRAME_INDEX, MAX_GLYPH_DIMENSION,
    RECORD_SIZE, RESERVED_HEADER_SIZE, SIGNATURE_SIZE,
};

/// How reserved record bytes are filled when encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservedFill {
    /// All reserved bytes are 0
    #[default]
    Zero,
    /// Patterns found in shipped assets: `0`, `1,0,0`, `1,0,0,<code low byte>`
    Legacy,
}

/// Font table header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    pub signature: [u8; SIGNATURE_SIZE],
    pub reserved: [u8; RESERVED_HEADER_SIZE],
}

impl Default for TableHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableHeader {
    pub const SIZE: usize = HEADER_SIZE;

    /// Header with the standard signature and zeroed reserved bytes
    pub fn new() -> Self {
        Self {
            signature: *FILE_SIGNATURE,
            reserved: [0; RESERVED_HEADER_SIZE],
        }
    }

    /// Check the signature
    pub fn validate(&self) -> bool {
        &self.signature == FILE_SIGNATURE
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..SIGNATURE_SIZE].copy_from_slice(&self.signature);
        bytes[SIGNATURE_SIZE..].copy_from_slice(&self.reserved);
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let mut header = Self::new();
        header.signature.copy_from_slice(&bytes[..SIGNATURE_SIZE]);
        header.reserved.copy_from_slice(&bytes[SIGNATURE_SIZE..Self::SIZE]);
        Some(header)
    }
}

/// One glyph record as stored on disk (14 bytes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphRecord {
    pub code: u16,
    pub reserved1: u8,
    pub width: u8,
    pub height: u8,
    pub reserved2: [u8; 3],
    pub frame: u16,
    pub reserved3: [u8; 4],
}

impl GlyphRecord {
    pub const SIZE: usize = RECORD_SIZE;

    /// Build a record from a table entry, range-checking every field
    pub fn from_glyph(code: u32, glyph: &Glyph, fill: ReservedFill) -> Result<Self, FontTableError> {
        let overflow = |field, value, max| FontTableError::FieldOverflow {
            code,
            field,
            value,
            max,
        };

        let wire_code =
            u16::try_from(code).map_err(|_| overflow(GlyphField::Code, code, MAX_CHAR_CODE))?;
        let width = u8::try_from(glyph.width)
            .map_err(|_| overflow(GlyphField::Width, glyph.width, MAX_GLYPH_DIMENSION))?;
        let height = u8::try_from(glyph.height)
            .map_err(|_| overflow(GlyphField::Height, glyph.height, MAX_GLYPH_DIMENSION))?;
        let frame = u16::try_from(glyph.frame)
            .map_err(|_| overflow(GlyphField::Frame, glyph.frame, MAX_FRAME_INDEX))?;

        let mut record = Self {
            code: wire_code,
            width,
            height,
            frame,
            ..Default::default()
        };
        if fill == ReservedFill::Legacy {
            record.reserved2 = [1, 0, 0];
            record.reserved3 = [1, 0, 0, wire_code.to_le_bytes()[0]];
        }
        Ok(record)
    }

    pub fn to_glyph(&self) -> Glyph {
        Glyph::new(
            u32::from(self.frame),
            u32::from(self.width),
            u32::from(self.height),
        )
    }

    /// Write record to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.code.to_le_bytes());
        bytes[2] = self.reserved1;
        bytes[3] = self.width;
        bytes[4] = self.height;
        bytes[5..8].copy_from_slice(&self.reserved2);
        bytes[8..10].copy_from_slice(&self.frame.to_le_bytes());
        bytes[10..14].copy_from_slice(&self.reserved3);
        bytes
    }

    /// Read record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            code: u16::from_le_bytes([bytes[0], bytes[1]]),
            reserved1: bytes[2],
            width: bytes[3],
            height: bytes[4],
            reserved2: [bytes[5], bytes[6], bytes[7]],
            frame: u16::from_le_bytes([bytes[8], bytes[9]]),
            reserved3: [bytes[10], bytes[11], bytes[12], bytes[13]],
        })
    }
}
