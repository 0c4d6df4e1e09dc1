//! Sigiltron - sigil generator library
//!
//! Re-exports all modules for use by the binary target.

// Core engine (text, fonts, strategies, compositor, export)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod config;
pub mod dialogs;
pub mod runner;
pub mod widgets;

pub use app::SigilApp;
pub use config::Settings;
pub use core::{Compositor, FontCache, FontChoices, FontSource, Sigil, StaticFonts, Strategies, SystemFonts};
