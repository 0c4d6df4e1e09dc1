//! Font functions - pick a font descriptor for each glyph.
//!
//! Strategies do not own the font list. The list and the user's current
//! pick live in [`FontChoices`], which the caller passes in per call.

use std::fmt;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use super::fonts::descriptor;

/// Font names offered to the user plus the currently selected one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontChoices {
    pub names: Vec<String>,
    pub selected: usize,
}

impl FontChoices {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, selected: 0 }
    }

    /// Choices with `name` selected; appended if not in the list yet.
    pub fn with_selected(mut self, name: &str) -> Self {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => self.selected = idx,
            None => {
                self.names.push(name.to_string());
                self.selected = self.names.len() - 1;
            }
        }
        self
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.names.get(self.selected).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Yields the font descriptor for one glyph at one size.
#[enum_dispatch]
pub trait FontFunction {
    fn font(&mut self, ch: char, size: u32, choices: &FontChoices) -> Result<String>;
}

/// Always the user's selected font.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectedFont;

impl FontFunction for SelectedFont {
    fn font(&mut self, _ch: char, size: u32, choices: &FontChoices) -> Result<String> {
        let Some(name) = choices.selected_name() else {
            anyhow::bail!("no fonts available for selection");
        };
        Ok(descriptor(name, size))
    }
}

/// A uniformly random font from the list, drawn independently per glyph.
#[derive(Clone, Debug)]
pub struct RandomFont {
    rng: fastrand::Rng,
}

impl RandomFont {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for RandomFont {
    fn default() -> Self {
        Self::new()
    }
}

impl FontFunction for RandomFont {
    fn font(&mut self, _ch: char, size: u32, choices: &FontChoices) -> Result<String> {
        if choices.is_empty() {
            anyhow::bail!("no fonts available for selection");
        }
        let name = &choices.names[self.rng.usize(..choices.names.len())];
        Ok(descriptor(name, size))
    }
}

/// All available font functions.
#[enum_dispatch(FontFunction)]
#[derive(Clone, Debug)]
pub enum FontStrategy {
    SelectedFont,
    RandomFont,
}

impl FontStrategy {
    /// One instance of every variant, in UI order; random ones seeded if `seed` is set.
    pub fn all(seed: Option<u64>) -> Vec<FontStrategy> {
        let random = seed.map_or_else(RandomFont::new, RandomFont::with_seed);
        vec![SelectedFont.into(), random.into()]
    }
}

impl Default for FontStrategy {
    fn default() -> Self {
        RandomFont::new().into()
    }
}

impl fmt::Display for FontStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStrategy::SelectedFont(_) => f.write_str("Use selected font"),
            FontStrategy::RandomFont(_) => f.write_str("Use random font"),
        }
    }
}
