//! SVG export: XML prolog, generator comment, serialized sigil.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use super::sigil::Sigil;

/// First line of every exported file.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Second line of every exported file.
pub fn generator_comment() -> String {
    format!("<!-- Generated by Sigiltron {} -->", env!("CARGO_PKG_VERSION"))
}

/// Full file contents for `sigil`.
pub fn render(sigil: &Sigil) -> String {
    format!(
        "{}\n{}\n{}\n",
        XML_DECLARATION,
        generator_comment(),
        sigil.to_svg_string()
    )
}

/// Write `sigil` to `path`.
///
/// Plain write: a failure midway may leave a partial file behind.
pub fn write_svg(path: &Path, sigil: &Sigil) -> Result<()> {
    std::fs::write(path, render(sigil))
        .with_context(|| format!("Failed to write SVG: {}", path.display()))?;
    info!("Saved sigil ({} glyphs) to {}", sigil.glyph_count(), path.display());
    Ok(())
}
