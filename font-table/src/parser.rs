//! Font table parser

use tracing::{debug, trace};

use crate::error::FontTableError;
use crate::format::{GlyphRecord, TableHeader};
use crate::table::GlyphTable;
use crate::{FILE_SIGNATURE, SIGNATURE_SIZE};

/// Parse a font table into a [`GlyphTable`]
///
/// Records are read until the buffer is exhausted. A later record for the
/// same character code replaces an earlier one.
///
/// # Arguments
/// * `data` - Raw font table bytes
///
/// # Returns
/// * `Ok(GlyphTable)` - Decoded glyphs
/// * `Err(FontTableError)` - Bad signature, short header, or a trailing
///   partial record. No table is returned on error.
pub fn decode(data: &[u8]) -> Result<GlyphTable, FontTableError> {
    if data.len() < SIGNATURE_SIZE || &data[..SIGNATURE_SIZE] != FILE_SIGNATURE {
        return Err(FontTableError::InvalidFormat);
    }

    // Reserved header bytes are skipped, whatever they hold
    if TableHeader::from_bytes(data).is_none() {
        return Err(FontTableError::TruncatedHeader { len: data.len() });
    }

    let mut table = GlyphTable::new();
    let mut offset = TableHeader::SIZE;
    let mut records_read = 0;

    while offset < data.len() {
        let Some(record) = GlyphRecord::from_bytes(&data[offset..]) else {
            return Err(FontTableError::TruncatedRecord {
                offset,
                remaining: data.len() - offset,
                records_read,
            });
        };

        let code = u32::from(record.code);
        let glyph = record.to_glyph();
        trace!(code, ?glyph, offset, "glyph record");

        if table.insert(code, glyph).is_some() {
            debug!(code, offset, "duplicate glyph code, keeping later record");
        }

        offset += GlyphRecord::SIZE;
        records_read += 1;
    }

    debug!(records = records_read, glyphs = table.len(), "decoded font table");
    Ok(table)
}

#[cfg(test)]
mod tests;
