//! Glyph table: character code to glyph mapping

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::glyph::Glyph;

/// Decoded font table
///
/// Iterates in ascending character code order, which is also the order the
/// encoder writes records in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<u32, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph, returning the one previously stored under `code`
    pub fn insert(&mut self, code: u32, glyph: Glyph) -> Option<Glyph> {
        self.glyphs.insert(code, glyph)
    }

    pub fn get(&self, code: u32) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    pub fn get_mut(&mut self, code: u32) -> Option<&mut Glyph> {
        self.glyphs.get_mut(&code)
    }

    /// Look up the glyph for a character
    pub fn get_char(&self, ch: char) -> Option<&Glyph> {
        self.get(ch as u32)
    }

    pub fn remove(&mut self, code: u32) -> Option<Glyph> {
        self.glyphs.remove(&code)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.glyphs.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate (code, glyph) pairs in ascending code order
    pub fn iter(&self) -> btree_map::Iter<'_, u32, Glyph> {
        self.glyphs.iter()
    }

    /// Character codes in ascending order
    pub fn codes(&self) -> impl DoubleEndedIterator<Item = u32> + ExactSizeIterator + '_ {
        self.glyphs.keys().copied()
    }
}

impl FromIterator<(u32, Glyph)> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = (u32, Glyph)>>(iter: I) -> Self {
        Self {
            glyphs: iter.into_iter().collect(),
        }
    }
}

impl Extend<(u32, Glyph)> for GlyphTable {
    fn extend<I: IntoIterator<Item = (u32, Glyph)>>(&mut self, iter: I) {
        self.glyphs.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = (&'a u32, &'a Glyph);
    type IntoIter = btree_map::Iter<'a, u32, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

impl IntoIterator for GlyphTable {
    type Item = (u32, Glyph);
    type IntoIter = btree_map::IntoIter<u32, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.into_iter()
    }
}
