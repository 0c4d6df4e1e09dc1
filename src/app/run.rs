//! Main application loop - eframe::App implementation.
//!
//! Flow per frame:
//! 1. Control panel (may request Generate / Save)
//! 2. Status bar
//! 3. Canvas preview
//! 4. Error box, if one is pending
//! 5. Run requested actions

use eframe::egui;
use log::trace;

use super::SigilApp;
use crate::core::FontSource;
use crate::widgets::canvas;
use crate::widgets::status::StatusBar;

impl<S: FontSource> eframe::App for SigilApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Sigiltron");
                ui.separator();
                self.render_controls(ui)
            })
            .inner;

        let cache = self.compositor.cache();
        StatusBar::render(ctx, self.sigil.as_ref(), cache.len(), cache.stats());

        let canvas_size = self.compositor.canvas();
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show(ui, canvas_size, self.sigil.as_ref());
        });

        if let Some(error) = &self.error
            && !error.show(ctx)
        {
            self.error = None;
        }

        // Actions wait while an error is on screen
        if self.error.is_some() {
            return;
        }
        if actions.generate {
            trace!("Generate requested");
            self.generate();
        }
        if actions.save {
            trace!("Save requested");
            self.save();
        }
    }
}
