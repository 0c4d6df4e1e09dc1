//! Dialogs - modal windows shown over the main UI.

pub mod error;
