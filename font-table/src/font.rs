//! Loaded font: glyph table plus presentation state

use crate::error::FontTableError;
use crate::metrics::{TextMetrics, text_metrics};
use crate::parser::decode;
use crate::table::GlyphTable;
use crate::writer::encode;

/// Default tint: opaque white (0xRRGGBBAA)
pub const DEFAULT_COLOR: u32 = 0xFFFF_FFFF;

/// A displayable font
///
/// Holds the decoded glyphs, the bytes they were loaded from (if any) and a
/// tint color for whatever draws the glyphs. The color is stored only; it
/// never reaches the codec.
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: GlyphTable,
    source: Option<Vec<u8>>,
    color: u32,
}

impl Font {
    /// Decode a font table, keeping a copy of the source bytes
    pub fn load(data: &[u8]) -> Result<Self, FontTableError> {
        let glyphs = decode(data)?;
        Ok(Self {
            glyphs,
            source: Some(data.to_vec()),
            color: DEFAULT_COLOR,
        })
    }

    pub fn from_table(glyphs: GlyphTable) -> Self {
        Self {
            glyphs,
            source: None,
            color: DEFAULT_COLOR,
        }
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut GlyphTable {
        &mut self.glyphs
    }

    /// Bytes the font was loaded from
    pub fn source(&self) -> Option<&[u8]> {
        self.source.as_deref()
    }

    /// Set tint color (0xRRGGBBAA)
    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Pixel size of `text` in this font
    pub fn text_metrics(&self, text: &str) -> TextMetrics {
        text_metrics(&self.glyphs, text)
    }

    /// Encode the glyph table (zero-filled reserved bytes)
    pub fn to_bytes(&self) -> Result<Vec<u8>, FontTableError> {
        encode(&self.glyphs)
    }
}
