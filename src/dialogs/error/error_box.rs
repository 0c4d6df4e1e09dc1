//! Error dialog: title, one-line message and an expandable trace.
//!
//! Every report is logged when the box is created, so the log has the
//! failure even if the window is dismissed unread.

use eframe::egui;
use log::error;

/// Messages longer than this are cut and end with "..."
pub const MAX_MESSAGE_LEN: usize = 120;

/// Shorten `message` to at most [`MAX_MESSAGE_LEN`] characters plus an ellipsis.
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() > MAX_MESSAGE_LEN {
        let head: String = message.chars().take(MAX_MESSAGE_LEN - 1).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

/// A reported failure waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBox {
    pub title: String,
    pub message: String,
    /// Full diagnostic (cause chain, backtrace when captured)
    pub trace: Option<String>,
}

impl ErrorBox {
    /// Report an error raised by a user action.
    pub fn from_error(title: &str, err: &anyhow::Error) -> Self {
        let trace = format!("{:?}", err);
        error!("{}: {}", title, trace);
        Self {
            title: title.to_string(),
            message: truncate_message(&format!("{:#}", err)),
            trace: Some(trace),
        }
    }

    /// Report a failure that has no error value behind it.
    pub fn without_error(title: &str, message: &str) -> Self {
        error!("{}: {}", title, message);
        Self {
            title: title.to_string(),
            message: truncate_message(message),
            trace: None,
        }
    }

    /// Render the dialog as a modal. Returns false once the user dismissed it.
    ///
    /// Widgets behind the backdrop receive no input while it is open.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut keep_open = true;

        let response = egui::Modal::new(egui::Id::new("error_box")).show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(ui.visuals().error_fg_color));
                ui.heading(self.title.as_str());
            });
            ui.add_space(8.0);
            ui.label(self.message.as_str());

            if let Some(trace) = &self.trace {
                ui.add_space(8.0);
                egui::CollapsingHeader::new("The full error backtrace is as follows:")
                    .default_open(false)
                    .show(ui, |ui| {
                        egui::ScrollArea::both()
                            .max_height(320.0)
                            .max_width(600.0)
                            .show(ui, |ui| {
                                ui.monospace(trace.as_str());
                            });
                    });
            }

            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                keep_open = false;
            }
        });

        // Escape or a click on the backdrop also dismisses
        if response.should_close() {
            keep_open = false;
        }
        keep_open
    }
}
