//! Read-only commands: info, dump, metrics, check

use anyhow::{Context, Result};
use font_table::{Font, Glyph, GlyphTable};
use serde::Serialize;
use std::path::Path;

/// Read and decode a font table file
pub fn load_font(path: &Path) -> Result<Font> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.display());
    Font::load(&data).with_context(|| format!("Failed to decode font table {}", path.display()))
}

/// Summary of a glyph table
#[derive(Debug, PartialEq, Eq)]
pub struct TableSummary {
    pub glyphs: usize,
    pub first_code: Option<u32>,
    pub last_code: Option<u32>,
    pub max_width: u32,
    pub max_height: u32,
}

impl TableSummary {
    pub fn new(table: &GlyphTable) -> Self {
        Self {
            glyphs: table.len(),
            first_code: table.codes().next(),
            last_code: table.codes().next_back(),
            max_width: table.iter().map(|(_, g)| g.width()).max().unwrap_or(0),
            max_height: table.iter().map(|(_, g)| g.height()).max().unwrap_or(0),
        }
    }
}

/// JSON row for `dump --json`
#[derive(Serialize)]
struct DumpEntry {
    code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    char: Option<char>,
    #[serde(flatten)]
    glyph: Glyph,
}

/// Printable form of a character code, if it has one
fn printable(code: u32) -> Option<char> {
    char::from_u32(code).filter(|c| !c.is_control())
}

pub fn info(path: &Path) -> Result<()> {
    let font = load_font(path)?;
    let summary = TableSummary::new(font.glyphs());

    println!("{}", path.display());
    println!("  Glyphs:     {}", summary.glyphs);
    if let (Some(first), Some(last)) = (summary.first_code, summary.last_code) {
        println!("  Code range: 0x{:04X}-0x{:04X}", first, last);
    }
    println!("  Max cell:   {}x{}", summary.max_width, summary.max_height);
    Ok(())
}

pub fn dump(path: &Path, json: bool) -> Result<()> {
    let font = load_font(path)?;

    if json {
        let entries: Vec<DumpEntry> = font
            .glyphs()
            .iter()
            .map(|(&code, &glyph)| DumpEntry {
                code,
                char: printable(code),
                glyph,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{:>6}  {:>4}  {:>5}  {:>5}  {:>6}", "code", "char", "frame", "width", "height");
    for (&code, glyph) in font.glyphs() {
        let ch = printable(code).map(String::from).unwrap_or_default();
        println!(
            "0x{:04X}  {:>4}  {:>5}  {:>5}  {:>6}",
            code,
            ch,
            glyph.frame_index(),
            glyph.width(),
            glyph.height()
        );
    }
    Ok(())
}

pub fn metrics(path: &Path, text: &str) -> Result<()> {
    let font = load_font(path)?;
    let text = text.replace("\\n", "\n");

    let missing: Vec<char> = text
        .chars()
        .filter(|&c| c != '\n' && font.glyphs().get_char(c).is_none())
        .collect();
    if !missing.is_empty() {
        tracing::warn!("No glyph for {:?}, measured as zero width", missing);
    }

    let m = font.text_metrics(&text);
    println!("{}x{}", m.width, m.height);
    Ok(())
}

pub fn check(path: &Path) -> Result<()> {
    let font = load_font(path)?;
    tracing::info!("{}: {} glyphs, OK", path.display(), font.glyphs().len());
    Ok(())
}
