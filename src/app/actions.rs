//! User actions: Generate and Save.
//!
//! These are the outermost handlers. Errors from the core end here: they are
//! logged, shown in the error box, and leave the previous state untouched.

use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use super::SigilApp;
use crate::core::export;
use crate::core::{FontSource, PassInput, Sigil, TextFunction};
use crate::dialogs::error::ErrorBox;
use crate::widgets::file_dialogs;

impl<S: FontSource> SigilApp<S> {
    /// Run one compositing pass over the current text and settings.
    fn try_generate(&mut self) -> Result<Sigil> {
        let raw: Vec<char> = self.text.chars().collect();
        let chars = self.text_fn.current().process(&raw);
        debug!(
            "Generate: {} chars -> {} after '{}'",
            raw.len(),
            chars.len(),
            self.text_fn.current()
        );

        let input = PassInput {
            font: self.font_fn.current_mut(),
            rotation: self.rotation_fn.current_mut(),
            spread: self.spread_fn.current_mut(),
            fonts: &self.fonts,
            base_spread: self.base_spread,
        };
        self.compositor.compose(&chars, input)
    }

    /// Generate button handler. Returns true if a new sigil is live.
    pub fn generate(&mut self) -> bool {
        match self.try_generate() {
            Ok(sigil) => {
                info!("Generated sigil with {} glyphs", sigil.glyph_count());
                self.sigil = Some(sigil);
                true
            }
            Err(e) => {
                self.error = Some(ErrorBox::from_error("Generate failed", &e));
                false
            }
        }
    }

    /// Save button handler: ask for a path, then write. Cancel writes nothing.
    pub fn save(&mut self) {
        if self.sigil.is_none() {
            return;
        }
        match file_dialogs::pick_save_path() {
            Some(path) => {
                self.save_to(&path);
            }
            None => debug!("Save cancelled"),
        }
    }

    /// Write the live sigil to `path`. Returns true on success.
    pub fn save_to(&mut self, path: &Path) -> bool {
        let Some(sigil) = &self.sigil else {
            self.error = Some(ErrorBox::without_error("Save failed", "Nothing to save: generate a sigil first"));
            return false;
        };

        match export::write_svg(path, sigil) {
            Ok(()) => true,
            Err(e) => {
                self.error = Some(ErrorBox::from_error("Save failed", &e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::app;

    #[test]
    fn test_generate_enables_save() {
        let mut app = app();
        app.text = "sigil".into();
        assert!(app.generate());
        assert!(app.can_save());
        assert_eq!(app.sigil.as_ref().unwrap().glyph_count(), 5);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_empty_text_generates_empty_sigil() {
        let mut app = app();
        assert!(app.generate());
        assert_eq!(app.sigil.as_ref().unwrap().glyph_count(), 0);
    }

    #[test]
    fn test_failed_generate_keeps_previous_sigil() {
        let mut app = app();
        app.text = "ab".into();
        assert!(app.generate());

        // Selected font that the source cannot resolve
        app.font_fn.selected = 0;
        app.fonts = app.fonts.clone().with_selected("Fraktur");
        app.text = "xyz".into();
        assert!(!app.generate());

        assert_eq!(app.sigil.as_ref().unwrap().glyph_count(), 2);
        let err = app.error.as_ref().unwrap();
        assert_eq!(err.title, "Generate failed");
        assert!(err.trace.as_ref().unwrap().contains("Fraktur"));
    }

    #[test]
    fn test_error_message_names_the_cause() {
        let mut app = app();
        app.fonts = crate::core::FontChoices::default();
        app.text = "x".into();
        assert!(!app.generate());

        let err = app.error.as_ref().unwrap();
        assert!(err.message.contains("no fonts available for selection"), "{}", err.message);
    }

    #[test]
    fn test_dedup_through_app() {
        let mut app = app();
        app.text_fn.selected = 0; // Remove duplicates
        app.text = "AAB".into();
        assert!(app.generate());
        let chars: Vec<char> = app.sigil.as_ref().unwrap().glyphs().iter().map(|g| g.ch).collect();
        assert_eq!(chars, vec!['A', 'B']);
    }

    #[test]
    fn test_save_to_writes_file() {
        let mut app = app();
        app.text = "AB".into();
        app.generate();

        let path = std::env::temp_dir().join(format!("sigiltron_app_{}.svg", std::process::id()));
        assert!(app.save_to(&path));
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let mut lines = written.lines();
        assert!(lines.next().unwrap().starts_with("<?xml"));
        assert!(lines.next().unwrap().starts_with("<!--"));
        assert!(lines.next().unwrap().starts_with("<svg"));
        assert_eq!(written.matches("<text").count(), 2);
    }

    #[test]
    fn test_failed_save_keeps_save_enabled() {
        let mut app = app();
        app.generate();
        let path = std::env::temp_dir().join("sigiltron_no_such_dir").join("x").join("out.svg");
        assert!(!app.save_to(&path));
        assert!(app.can_save());
        assert_eq!(app.error.as_ref().unwrap().title, "Save failed");
    }

    #[test]
    fn test_save_without_sigil_reports() {
        let mut app = app();
        let path = std::env::temp_dir().join("sigiltron_never_written.svg");
        assert!(!app.save_to(&path));
        assert!(app.error.as_ref().unwrap().trace.is_none());
        assert!(!path.exists());
    }
}
