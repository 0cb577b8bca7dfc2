//! Font table writer
//!
//! Records are written in ascending character code order so that the same
//! table always produces the same bytes.

use tracing::debug;

use crate::error::FontTableError;
use crate::format::{GlyphRecord, ReservedFill, TableHeader};
use crate::glyph::Glyph;
use crate::table::GlyphTable;

/// Encode a table with zero-filled reserved bytes
pub fn encode(table: &GlyphTable) -> Result<Vec<u8>, FontTableError> {
    encode_with(table, ReservedFill::Zero)
}

/// Encode a table with the given reserved-byte fill
///
/// Every glyph is range-checked before any output is produced.
pub fn encode_with(table: &GlyphTable, fill: ReservedFill) -> Result<Vec<u8>, FontTableError> {
    let records = table
        .iter()
        .map(|(&code, glyph)| GlyphRecord::from_glyph(code, glyph, fill))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(TableHeader::SIZE + records.len() * GlyphRecord::SIZE);
    out.extend_from_slice(&TableHeader::new().to_bytes());
    for record in &records {
        out.extend_from_slice(&record.to_bytes());
    }

    debug!(glyphs = records.len(), bytes = out.len(), ?fill, "encoded font table");
    Ok(out)
}

/// Builder for font tables made from scratch
#[derive(Debug, Default)]
pub struct FontTableWriter {
    table: GlyphTable,
    fill: ReservedFill,
}

impl FontTableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing table
    pub fn from_table(table: GlyphTable) -> Self {
        Self {
            table,
            fill: ReservedFill::default(),
        }
    }

    /// Set how reserved record bytes are filled
    pub fn set_reserved_fill(&mut self, fill: ReservedFill) {
        self.fill = fill;
    }

    /// Add a glyph for a character code, replacing any earlier one
    pub fn add_glyph(&mut self, code: u32, glyph: Glyph) {
        self.table.insert(code, glyph);
    }

    /// Add a glyph for a character
    pub fn add_char(&mut self, ch: char, glyph: Glyph) {
        self.add_glyph(ch as u32, glyph);
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }

    pub fn into_table(self) -> GlyphTable {
        self.table
    }

    /// Write the complete font table
    pub fn write(&self) -> Result<Vec<u8>, FontTableError> {
        encode_with(&self.table, self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FILE_SIGNATURE, GlyphField, HEADER_SIZE, RECORD_SIZE, decode};

    #[test]
    fn test_write_empty_table() {
        let data = encode(&GlyphTable::new()).unwrap();
        assert_eq!(data.len(), HEADER_SIZE);
        assert_eq!(&data[..5], FILE_SIGNATURE);
        assert!(data[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_record_layout() {
        let mut writer = FontTableWriter::new();
        writer.add_char('A', Glyph::new(5, 10, 20));

        let data = writer.write().unwrap();
        assert_eq!(data.len(), HEADER_SIZE + RECORD_SIZE);
        assert_eq!(
            &data[HEADER_SIZE..],
            &[0x41, 0x00, 0, 10, 20, 0, 0, 0, 0x05, 0x00, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_write_ascending_order() {
        let mut writer = FontTableWriter::new();
        writer.add_glyph(0x300, Glyph::new(3, 1, 1));
        writer.add_glyph(0x20, Glyph::new(1, 1, 1));
        writer.add_glyph(0x41, Glyph::new(2, 1, 1));

        let data = writer.write().unwrap();
        let codes: Vec<u16> = data[HEADER_SIZE..]
            .chunks_exact(RECORD_SIZE)
            .map(|r| u16::from_le_bytes([r[0], r[1]]))
            .collect();
        assert_eq!(codes, vec![0x20, 0x41, 0x300]);
    }

    #[test]
    fn test_output_independent_of_insertion_order() {
        let glyphs = [
            (0x61, Glyph::new(1, 5, 7)),
            (0x62, Glyph::new(2, 6, 7)),
            (0x63, Glyph::new(3, 5, 8)),
        ];
        let forward: GlyphTable = glyphs.iter().copied().collect();
        let backward: GlyphTable = glyphs.iter().rev().copied().collect();
        assert_eq!(encode(&forward).unwrap(), encode(&backward).unwrap());
    }

    #[test]
    fn test_width_overflow_rejected() {
        let mut writer = FontTableWriter::new();
        writer.add_char('A', Glyph::new(0, 256, 10));

        let err = writer.write().unwrap_err();
        assert_eq!(
            err,
            FontTableError::FieldOverflow {
                code: 0x41,
                field: GlyphField::Width,
                value: 256,
                max: 255,
            }
        );
    }

    #[test]
    fn test_code_overflow_rejected() {
        let mut writer = FontTableWriter::new();
        writer.add_char('😀', Glyph::new(0, 8, 8));
        assert!(matches!(
            writer.write(),
            Err(FontTableError::FieldOverflow {
                field: GlyphField::Code,
                ..
            })
        ));
    }

    #[test]
    fn test_legacy_fill_roundtrip() {
        let mut writer = FontTableWriter::new();
        writer.set_reserved_fill(ReservedFill::Legacy);
        writer.add_char('A', Glyph::new(5, 10, 20));
        writer.add_char('B', Glyph::new(6, 11, 20));

        let data = writer.write().unwrap();
        assert_eq!(data[HEADER_SIZE + 5], 1);
        assert_eq!(data[HEADER_SIZE + RECORD_SIZE + 13], 0x42);

        let table = decode(&data).unwrap();
        assert_eq!(&table, writer.table());
    }
}
