//! Font manifest (font.toml) parsing
//!
//! A manifest lists glyphs by character or raw code and is turned into a
//! glyph table by the `build` command.

use anyhow::{Context, Result};
use font_table::{FontTableWriter, Glyph, ReservedFill};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// font.toml manifest structure
#[derive(Debug, Deserialize)]
pub struct FontManifest {
    #[serde(default)]
    pub font: FontSection,
    #[serde(default)]
    pub glyphs: Vec<GlyphEntry>,
}

/// Output settings
#[derive(Debug, Default, Deserialize)]
pub struct FontSection {
    /// Output file, relative to the manifest
    pub output: Option<PathBuf>,

    /// Reserved byte fill: "zero" (default) or "legacy"
    #[serde(default)]
    pub reserved_fill: ReservedFill,
}

/// Single glyph entry
#[derive(Debug, Deserialize)]
pub struct GlyphEntry {
    /// Character this glyph draws (single character string)
    #[serde(default)]
    pub char: Option<String>,

    /// Raw character code, for codes without a printable character
    #[serde(default)]
    pub code: Option<u32>,

    pub frame: u32,
    pub width: u32,
    pub height: u32,
}

impl GlyphEntry {
    /// Character code this entry describes
    pub fn char_code(&self) -> Result<u32> {
        match (&self.char, self.code) {
            (Some(s), None) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(u32::from(ch)),
                    _ => anyhow::bail!("glyph char {:?} must be exactly one character", s),
                }
            }
            (None, Some(code)) => Ok(code),
            (Some(s), Some(code)) => {
                anyhow::bail!("glyph {:?} sets both char and code ({})", s, code)
            }
            (None, None) => anyhow::bail!("glyph entry needs either char or code"),
        }
    }

    pub fn glyph(&self) -> Glyph {
        Glyph::new(self.frame, self.width, self.height)
    }
}

impl FontManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse font manifest")
    }

    /// Build a writer holding every glyph, checking each entry
    ///
    /// Later entries for the same code replace earlier ones.
    pub fn to_writer(&self) -> Result<FontTableWriter> {
        let mut writer = FontTableWriter::new();
        writer.set_reserved_fill(self.font.reserved_fill);

        for (index, entry) in self.glyphs.iter().enumerate() {
            let code = entry
                .char_code()
                .with_context(|| format!("Invalid glyph entry #{}", index + 1))?;
            if writer.table().contains(code) {
                tracing::warn!("Glyph 0x{:04X} listed more than once, using last entry", code);
            }
            writer.add_glyph(code, entry.glyph());
        }

        Ok(writer)
    }
}
