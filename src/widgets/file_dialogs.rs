//! Shared file dialog helpers for widget UI.

use std::path::PathBuf;

/// Extensions offered by the save dialog
pub const SVG_EXTS: &[&str] = &["svg"];

/// Create configured file dialog for saving a sigil.
///
/// The filter only narrows what is listed; a typed name is used as-is.
pub fn create_svg_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("SVG Image", SVG_EXTS)
        .set_file_name("sigil.svg")
        .set_title(title)
}

/// Ask for a destination. None if the user cancelled.
pub fn pick_save_path() -> Option<PathBuf> {
    create_svg_dialog("Save sigil").save_file()
}
