//! font-table: codec for legacy "Woo!" bitmap-font glyph tables
//!
//! A font table maps 16-bit character codes to glyph metrics: the frame index
//! into an external sprite strip, plus the glyph's width and height in pixels.
//! This crate decodes the binary resource into a [`GlyphTable`] and encodes a
//! table back into bytes. It works on in-memory buffers only; reading and
//! writing files is left to callers (see the `font-table` tool).
//!
//! # Layout
//! ```text
//! 0x00: signature "Woo!" 0x01 (5 bytes)
//! 0x05: reserved (7 bytes)
//! 0x0C: glyph records, 14 bytes each, until end of buffer
//!
//! record:
//! +0x00: code u16
//! +0x02: reserved (1 byte)
//! +0x03: width u8
//! +0x04: height u8
//! +0x05: reserved (3 bytes)
//! +0x08: frame u16
//! +0x0A: reserved (4 bytes)
//! ```
//! All integers are little-endian.
//!
//! # Usage
//!
//! ```ignore
//! use font_table::{decode, encode};
//!
//! let data = std::fs::read("font16.tbl").unwrap();
//! let table = decode(&data).unwrap();
//!
//! if let Some(glyph) = table.get_char('A') {
//!     println!("A: {:?} frame {}", glyph.size(), glyph.frame_index());
//! }
//!
//! let bytes = encode(&table).unwrap();
//! ```

mod error;
mod font;
mod format;
mod glyph;
mod metrics;
mod parser;
mod table;
mod writer;

pub use error::{FontTableError, GlyphField};
pub use font::{DEFAULT_COLOR, Font};
pub use format::{GlyphRecord, ReservedFill, TableHeader};
pub use glyph::Glyph;
pub use metrics::{TextMetrics, text_metrics};
pub use parser::decode;
pub use table::GlyphTable;
pub use writer::{FontTableWriter, encode, encode_with};

// =============================================================================
// Constants
// =============================================================================

/// File signature: "Woo!" followed by 0x01
pub const FILE_SIGNATURE: &[u8; 5] = b"Woo!\x01";

/// Signature length in bytes
pub const SIGNATURE_SIZE: usize = 5;

/// Reserved bytes following the signature
pub const RESERVED_HEADER_SIZE: usize = 7;

/// Total header size (records start here)
pub const HEADER_SIZE: usize = SIGNATURE_SIZE + RESERVED_HEADER_SIZE;

/// Size of one glyph record
pub const RECORD_SIZE: usize = 14;

/// Largest width/height a record can hold
pub const MAX_GLYPH_DIMENSION: u32 = u8::MAX as u32;

/// Largest frame index a record can hold
pub const MAX_FRAME_INDEX: u32 = u16::MAX as u32;

/// Largest character code a record can hold
pub const MAX_CHAR_CODE: u32 = u16::MAX as u32;

/// Conventional file extension for font tables
pub const FONT_TABLE_EXT: &str = "tbl";

// =============================================================================
// Tests
// =============================================================================
