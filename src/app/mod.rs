//! Application module - SigilApp and related functionality.
//!
//! This module organizes the window logic into focused submodules:
//! - `actions` - Generate and Save handlers (the only places errors are caught)
//! - `layout` - control panel widgets
//! - `run` - eframe::App implementation

mod actions;
mod layout;
mod run;

use crate::config::Settings;
use crate::core::{
    Compositor, FontCache, FontChoices, FontSource, FontStrategy, RotationStrategy, Sigil,
    SpreadStrategy, SystemFonts, TextFilter,
};
use crate::dialogs::error::ErrorBox;

use log::info;

/// A combo box model: every variant of one strategy family plus the pick.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub items: Vec<T>,
    pub selected: usize,
}

impl<T: std::fmt::Display> Choice<T> {
    /// Select the item whose label is `label`; falls back to the first.
    pub fn new(items: Vec<T>, label: &str) -> Self {
        let selected = items.iter().position(|i| i.to_string() == label).unwrap_or(0);
        Self { items, selected }
    }

    pub fn current(&self) -> &T {
        &self.items[self.selected]
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.items[self.selected]
    }
}

/// Main application state.
///
/// Holds the compositor (and with it the font cache), the control values
/// and the live sigil. The live sigil is only replaced by a successful
/// generation.
pub struct SigilApp<S: FontSource = SystemFonts> {
    pub compositor: Compositor<S>,
    pub fonts: FontChoices,
    pub text: String,
    pub base_spread: i32,
    pub text_fn: Choice<TextFilter>,
    pub font_fn: Choice<FontStrategy>,
    pub rotation_fn: Choice<RotationStrategy>,
    pub spread_fn: Choice<SpreadStrategy>,
    pub sigil: Option<Sigil>,
    pub error: Option<ErrorBox>,
}

impl<S: FontSource> SigilApp<S> {
    /// Build the window state around a font source.
    pub fn new(source: S, settings: &Settings) -> Self {
        let fonts = FontChoices::new(source.families());
        info!("{} font families available", fonts.names.len());

        let cache = FontCache::new(settings.font_cache_capacity);
        let compositor = match settings.seed {
            Some(seed) => Compositor::with_seed(source, cache, settings.canvas, seed),
            None => Compositor::new(source, cache, settings.canvas),
        };

        Self {
            compositor,
            fonts,
            text: String::new(),
            base_spread: settings.base_spread,
            text_fn: Choice::new(TextFilter::all(), "Identity"),
            font_fn: Choice::new(FontStrategy::all(settings.seed), "Use random font"),
            rotation_fn: Choice::new(RotationStrategy::all(settings.seed), "Random 45° increments"),
            spread_fn: Choice::new(SpreadStrategy::all(settings.seed), "Random spread"),
            sigil: None,
            error: None,
        }
    }

    /// Save is only possible once a generation succeeded.
    pub fn can_save(&self) -> bool {
        self.sigil.is_some()
    }
}
