//! Font descriptors, font enumeration and name resolution.
//!
//! A descriptor is the plain string `"<family> <size>"`. It is the key of the
//! [`FontCache`](super::font_cache::FontCache) and the only thing strategies
//! hand to the compositor.
//!
//! Family lookup goes through the [`FontSource`] trait so the compositor can
//! run against the host font database ([`SystemFonts`]) or a fixed list.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use cosmic_text::fontdb::{self, Family, Query};
use cosmic_text::FontSystem;
use log::{debug, info};

/// Build a descriptor from family name and point size.
pub fn descriptor(family: &str, size: u32) -> String {
    format!("{} {}", family, size)
}

/// Split a descriptor into family and size.
///
/// The size is everything after the last space, so family names may
/// contain spaces themselves.
pub fn parse_descriptor(desc: &str) -> Result<(&str, u32)> {
    let (family, size) = desc
        .rsplit_once(' ')
        .with_context(|| format!("malformed font descriptor '{}': missing size", desc))?;
    let size = size
        .parse::<u32>()
        .with_context(|| format!("malformed font descriptor '{}': bad size", desc))?;
    if family.is_empty() {
        anyhow::bail!("malformed font descriptor '{}': empty family", desc);
    }
    Ok((family, size))
}

/// Names are spliced into descriptors verbatim; quotes would break them.
pub fn is_usable_family(name: &str) -> bool {
    !name.is_empty() && !name.contains('\'')
}

/// A font resolved from a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFont {
    /// Family name as known to the font source
    pub family: String,
    /// Point size
    pub size: u32,
}

/// Source of font families (host database, or a fixed list in tests).
pub trait FontSource {
    /// All usable family names, sorted and deduplicated.
    fn families(&self) -> Vec<String>;

    /// Canonical family name for `name`, or None if unknown.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Map CSS/Java-style generic names to fontdb generic families.
fn generic_family(name: &str) -> Option<Family<'static>> {
    match name.to_lowercase().as_str() {
        "serif" => Some(Family::Serif),
        "sans-serif" | "sansserif" | "sans" => Some(Family::SansSerif),
        "monospace" | "monospaced" | "mono" => Some(Family::Monospace),
        "cursive" => Some(Family::Cursive),
        "fantasy" => Some(Family::Fantasy),
        _ => None,
    }
}

/// Host fonts, backed by the cosmic-text font system.
pub struct SystemFonts {
    font_system: FontSystem,
}

impl SystemFonts {
    /// Load the host font database. Slow: scans every installed font.
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        info!("Font database loaded: {} faces", font_system.db().len());
        Self { font_system }
    }

    fn db(&self) -> &fontdb::Database {
        self.font_system.db()
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSource for SystemFonts {
    fn families(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .db()
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .filter(|name| is_usable_family(name))
            .collect();
        debug!("Enumerated {} font families", names.len());
        names.into_iter().collect()
    }

    fn resolve(&self, name: &str) -> Option<String> {
        let family = generic_family(name).unwrap_or(Family::Name(name));
        let families = [family];
        let query = Query {
            families: &families,
            ..Query::default()
        };
        let id = self.db().query(&query)?;
        let face = self.db().face(id)?;
        let resolved = face
            .families
            .first()
            .map(|(n, _)| n.clone())
            .unwrap_or_else(|| name.to_string());
        Some(resolved)
    }
}

/// Fixed family list, resolved by exact (case-insensitive) name.
#[derive(Clone, Debug, Default)]
pub struct StaticFonts {
    names: Vec<String>,
}

impl StaticFonts {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FontSource for StaticFonts {
    fn families(&self) -> Vec<String> {
        let names: BTreeSet<String> = self
            .names
            .iter()
            .filter(|n| is_usable_family(n))
            .cloned()
            .collect();
        names.into_iter().collect()
    }

    fn resolve(&self, name: &str) -> Option<String> {
        self.names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_format() {
        assert_eq!(descriptor("Serif", 150), "Serif 150");
        assert_eq!(descriptor("DejaVu Sans Mono", 100), "DejaVu Sans Mono 100");
    }

    #[test]
    fn test_parse_descriptor() {
        assert_eq!(parse_descriptor("Serif 150").unwrap(), ("Serif", 150));
        assert_eq!(
            parse_descriptor("DejaVu Sans Mono 199").unwrap(),
            ("DejaVu Sans Mono", 199)
        );
        assert!(parse_descriptor("Serif").is_err());
        assert!(parse_descriptor("Serif big").is_err());
        assert!(parse_descriptor(" 12").is_err());
    }

    #[test]
    fn test_static_fonts_exclude_quotes() {
        let fonts = StaticFonts::new(["Serif", "Bad'Name", "Mono", "Serif"]);
        assert_eq!(fonts.families(), vec!["Mono".to_string(), "Serif".to_string()]);
    }

    #[test]
    fn test_static_fonts_resolve() {
        let fonts = StaticFonts::new(["Serif"]);
        assert_eq!(fonts.resolve("serif").as_deref(), Some("Serif"));
        assert_eq!(fonts.resolve("Nope"), None);
    }

    #[test]
    fn test_generic_family_names() {
        assert_eq!(generic_family("SansSerif"), Some(Family::SansSerif));
        assert_eq!(generic_family("Monospaced"), Some(Family::Monospace));
        assert_eq!(generic_family("Helvetica"), None);
    }
}
