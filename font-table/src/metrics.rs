//! Text metrics computed from glyph sizes

use crate::table::GlyphTable;

/// Pixel extent of a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
}

/// Measure `text` using the glyphs in `table`
///
/// A line is as wide as the sum of its glyph widths and as tall as its
/// tallest glyph. Lines are separated by `'\n'` and stack vertically.
/// Characters without a glyph take no space.
pub fn text_metrics(table: &GlyphTable, text: &str) -> TextMetrics {
    let mut metrics = TextMetrics::default();

    for line in text.split('\n') {
        let (line_width, line_height) = line
            .chars()
            .filter_map(|ch| table.get_char(ch))
            .fold((0u32, 0u32), |(w, h), glyph| {
                (w.saturating_add(glyph.width()), h.max(glyph.height()))
            });

        metrics.width = metrics.width.max(line_width);
        metrics.height = metrics.height.saturating_add(line_height);
    }

    metrics
}
