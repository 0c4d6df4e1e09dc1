//! Core engine - strategies, font handling, compositor and export.
//!
//! Pipeline: text function -> compositor (font / rotation / spread
//! functions, font cache) -> sigil -> export.

pub mod compositor;
pub mod export;
pub mod font_cache;
pub mod font_select;
pub mod fonts;
pub mod rotation;
pub mod sigil;
pub mod spread;
pub mod text_filter;

pub use compositor::{Compositor, PassInput, Strategies};
pub use font_cache::FontCache;
pub use font_select::{FontChoices, FontFunction, FontStrategy};
pub use fonts::{FontSource, StaticFonts, SystemFonts};
pub use rotation::{RotationFunction, RotationStrategy};
pub use sigil::{CanvasSize, PlacedGlyph, Sigil};
pub use spread::{SpreadFunction, SpreadStrategy};
pub use text_filter::{TextFilter, TextFunction};
