//! Commands that write font tables: reencode, build

use anyhow::{Context, Result};
use font_table::{FONT_TABLE_EXT, FontTableWriter, ReservedFill};
use std::path::{Path, PathBuf};

use crate::inspect::load_font;
use crate::manifest::FontManifest;

pub fn reencode(input: &Path, output: &Path, legacy_fill: bool) -> Result<()> {
    let font = load_font(input)?;

    let mut writer = FontTableWriter::from_table(font.glyphs().clone());
    if legacy_fill {
        writer.set_reserved_fill(ReservedFill::Legacy);
    }
    let data = writer
        .write()
        .with_context(|| format!("Failed to encode {}", input.display()))?;

    if font.source() == Some(data.as_slice()) {
        tracing::info!("{} is already canonical", input.display());
    }

    tracing::info!("Writing {:?} -> {:?}", input, output);
    std::fs::write(output, &data)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Done! {} glyphs, {} bytes", font.glyphs().len(), data.len());
    Ok(())
}

pub fn build(manifest_path: &Path, output: Option<&Path>) -> Result<()> {
    tracing::info!("Building font table from {:?}", manifest_path);
    let manifest = FontManifest::load(manifest_path)?;
    let writer = manifest.to_writer()?;

    if writer.table().is_empty() {
        tracing::warn!("Manifest {:?} lists no glyphs", manifest_path);
    }

    let data = writer.write().context("Failed to encode font table")?;

    let base_dir = manifest_path.parent().unwrap_or(Path::new("."));
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => match &manifest.font.output {
            Some(path) => base_dir.join(path),
            None => base_dir.join(PathBuf::from("font").with_extension(FONT_TABLE_EXT)),
        },
    };

    std::fs::write(&output, &data)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        "Build complete! {} glyphs -> {:?}",
        writer.table().len(),
        output
    );
    Ok(())
}
