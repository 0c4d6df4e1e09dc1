//! UI Widgets - reusable pieces of the main window

pub mod canvas;
pub mod file_dialogs;
pub mod status;
