//! Compositor - turns a character sequence into a [`Sigil`].
//!
//! One pass walks the characters in order. For each one it picks a size,
//! asks the font strategy for a descriptor, resolves it through the font
//! cache, composes the rotation onto the running transform and draws the
//! glyph at `(0, spread)` in the rotated frame.
//!
//! Rotations accumulate: every glyph sees all previous rotations, which
//! is what fans the characters out around the center.

use std::ops::Range;

use anyhow::{Context, Result};
use glam::Affine2;
use log::{debug, info};

use super::font_cache::FontCache;
use super::font_select::{FontChoices, FontFunction, FontStrategy};
use super::fonts::FontSource;
use super::rotation::{RotationFunction, RotationStrategy};
use super::sigil::{CanvasSize, PlacedGlyph, Sigil};
use super::spread::{SpreadFunction, SpreadStrategy};

/// Glyph point sizes are drawn uniformly from this range (upper bound exclusive)
pub const FONT_SIZE_RANGE: Range<u32> = 100..200;

/// The per-glyph strategies for one pass.
#[derive(Clone, Debug, Default)]
pub struct Strategies {
    pub font: FontStrategy,
    pub rotation: RotationStrategy,
    pub spread: SpreadStrategy,
}

impl Strategies {
    /// Borrow these strategies for one pass.
    pub fn input<'a>(&'a mut self, fonts: &'a FontChoices, base_spread: i32) -> PassInput<'a> {
        PassInput {
            font: &mut self.font,
            rotation: &mut self.rotation,
            spread: &mut self.spread,
            fonts,
            base_spread,
        }
    }
}

/// Everything a pass needs besides the characters.
pub struct PassInput<'a> {
    pub font: &'a mut FontStrategy,
    pub rotation: &'a mut RotationStrategy,
    pub spread: &'a mut SpreadStrategy,
    pub fonts: &'a FontChoices,
    pub base_spread: i32,
}

/// Builds sigils; owns the font source and the font cache.
pub struct Compositor<S: FontSource> {
    source: S,
    cache: FontCache,
    canvas: CanvasSize,
    rng: fastrand::Rng,
}

impl<S: FontSource> Compositor<S> {
    pub fn new(source: S, cache: FontCache, canvas: CanvasSize) -> Self {
        Self {
            source,
            cache,
            canvas,
            rng: fastrand::Rng::new(),
        }
    }

    /// Compositor with a seeded size generator.
    pub fn with_seed(source: S, cache: FontCache, canvas: CanvasSize, seed: u64) -> Self {
        Self {
            source,
            cache,
            canvas,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn cache(&self) -> &FontCache {
        &self.cache
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Run one compositing pass.
    ///
    /// Errors from strategies or font resolution abort the pass; the partial
    /// document is dropped and never returned.
    pub fn compose(&mut self, chars: &[char], input: PassInput<'_>) -> Result<Sigil> {
        let PassInput { font: font_fn, rotation: rotation_fn, spread: spread_fn, fonts, base_spread } = input;

        let mut sigil = Sigil::new(self.canvas);
        let mut transform = Affine2::from_translation(self.canvas.center());
        let mut angle = 0.0f32;

        for (idx, &ch) in chars.iter().enumerate() {
            let size = self.rng.u32(FONT_SIZE_RANGE);
            let desc = font_fn
                .font(ch, size, fonts)
                .with_context(|| format!("choosing font for glyph {} ({:?})", idx, ch))?;
            let font = self.cache.get_or_resolve(&desc, &self.source)?;

            let rotation = rotation_fn.rotation(ch);
            transform = transform * Affine2::from_angle(rotation);
            angle += rotation;

            let spread = spread_fn.spread(base_spread);

            debug!(
                "glyph {}: {:?} font='{}' rotation={:.3} spread={}",
                idx, ch, desc, rotation, spread
            );

            sigil.push(PlacedGlyph {
                ch,
                descriptor: desc,
                family: font.family.clone(),
                size: font.size,
                spread,
                angle,
                transform,
            });
        }

        let stats = self.cache.stats();
        info!(
            "Sigil composed: {} glyphs | font cache: {} entries, {} hits, {} misses",
            sigil.glyph_count(),
            self.cache.len(),
            stats.hits,
            stats.misses
        );
        Ok(sigil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font_select::{RandomFont, SelectedFont};
    use crate::core::fonts::StaticFonts;
    use crate::core::rotation::{Random45, RandomRotation};
    use crate::core::spread::{ExactSpread, RandomSpread};
    use crate::core::text_filter::{RemoveDuplicates, TextFunction};

    fn compositor() -> Compositor<StaticFonts> {
        Compositor::with_seed(
            StaticFonts::new(["Serif", "Sans", "Mono"]),
            FontCache::new(256),
            CanvasSize::default(),
            1,
        )
    }

    fn exact_strategies() -> Strategies {
        Strategies {
            font: SelectedFont.into(),
            rotation: Random45::with_seed(2).into(),
            spread: ExactSpread.into(),
        }
    }

    #[test]
    fn test_dedup_selected_exact_scenario() {
        let mut comp = compositor();
        let fonts = FontChoices::new(vec!["Sans".into(), "Serif".into()]).with_selected("Serif");
        let mut strategies = exact_strategies();

        let chars = RemoveDuplicates.process(&"AAB".chars().collect::<Vec<_>>());
        let sigil = comp
            .compose(&chars, strategies.input(&fonts, 250))
            .unwrap();

        let glyphs = sigil.glyphs();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[0].ch, 'A');
        assert_eq!(glyphs[1].ch, 'B');
        for g in glyphs {
            assert_eq!(g.descriptor, format!("Serif {}", g.size));
            assert!(FONT_SIZE_RANGE.contains(&g.size));
            assert_eq!(g.spread, 250);
        }
        assert_eq!(sigil.to_svg_string().matches("<text").count(), 2);
    }

    #[test]
    fn test_rotations_accumulate() {
        let mut comp = compositor();
        let fonts = FontChoices::new(vec!["Serif".into()]);
        let mut strategies = exact_strategies();
        let mut replay = Random45::with_seed(2);

        let chars: Vec<char> = "sigil".chars().collect();
        let sigil = comp
            .compose(&chars, strategies.input(&fonts, 100))
            .unwrap();

        let center = CanvasSize::default().center();
        let mut expected = 0.0f32;
        for g in sigil.glyphs() {
            expected += replay.rotation(g.ch);
            assert!((g.angle - expected).abs() < 1e-4);

            let anchor = g.anchor();
            let want = center + glam::Vec2::new(-expected.sin(), expected.cos()) * 100.0;
            assert!((anchor - want).length() < 1e-2, "{:?} != {:?}", anchor, want);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let mut comp = compositor();
        // even a strategy that would fail on use is fine with nothing to draw
        let fonts = FontChoices::default();
        let mut strategies = Strategies {
            font: RandomFont::with_seed(1).into(),
            rotation: RandomRotation::with_seed(1).into(),
            spread: RandomSpread::with_seed(1).into(),
        };

        let sigil = comp
            .compose(&[], strategies.input(&fonts, 250))
            .unwrap();

        assert_eq!(sigil.glyph_count(), 0);
        assert!(!sigil.to_svg_string().contains("<text"));
    }

    #[test]
    fn test_unknown_font_surfaces_error() {
        let mut comp = compositor();
        let fonts = FontChoices::new(vec!["Fraktur".into()]);
        let mut strategies = exact_strategies();

        let err = comp
            .compose(&['x'], strategies.input(&fonts, 250))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("unknown font family 'Fraktur'"));
    }

    #[test]
    fn test_empty_font_list_surfaces_error() {
        let mut comp = compositor();
        let fonts = FontChoices::default();
        let mut strategies = exact_strategies();

        let err = comp
            .compose(&['x'], strategies.input(&fonts, 250))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("no fonts available"));
    }

    #[test]
    fn test_cache_shared_across_passes() {
        let mut comp = compositor();
        let fonts = FontChoices::new(vec!["Serif".into()]);
        let mut strategies = exact_strategies();
        let chars: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();

        for _ in 0..4 {
            comp.compose(&chars, strategies.input(&fonts, 10))
                .unwrap();
        }

        // 104 lookups over at most 100 distinct sizes of one family
        let stats = comp.cache().stats();
        assert_eq!(stats.total(), 104);
        assert!(stats.hits > 0);
        assert_eq!(comp.cache().len() as u64, stats.misses);
    }
}
