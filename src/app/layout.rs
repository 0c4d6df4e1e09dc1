//! Control panel for SigilApp.
//!
//! Rows mirror the pipeline: text function, font function, rotation
//! function, font, spread, spread function, intent text.

use std::fmt::Display;

use eframe::egui;

use super::{Choice, SigilApp};
use crate::core::FontSource;

/// Actions requested by the control panel this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PanelActions {
    pub generate: bool,
    pub save: bool,
}

/// Combo box over every item of a [`Choice`].
fn choice_combo<T: Display>(ui: &mut egui::Ui, id: &str, choice: &mut Choice<T>) {
    egui::ComboBox::from_id_salt(id)
        .width(220.0)
        .selected_text(choice.current().to_string())
        .show_ui(ui, |ui| {
            for (idx, item) in choice.items.iter().enumerate() {
                ui.selectable_value(&mut choice.selected, idx, item.to_string());
            }
        });
}

impl<S: FontSource> SigilApp<S> {
    /// Render the controls; returns which buttons were pressed.
    pub fn render_controls(&mut self, ui: &mut egui::Ui) -> PanelActions {
        let mut actions = PanelActions::default();

        egui::Grid::new("controls_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Text function");
                choice_combo(ui, "text_fn", &mut self.text_fn);
                ui.end_row();

                ui.label("Font function");
                choice_combo(ui, "font_fn", &mut self.font_fn);
                ui.end_row();

                ui.label("Rotation function");
                choice_combo(ui, "rotation_fn", &mut self.rotation_fn);
                ui.end_row();

                ui.label("Font");
                let selected = self.fonts.selected_name().unwrap_or("(no fonts)").to_string();
                egui::ComboBox::from_id_salt("font")
                    .width(220.0)
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (idx, name) in self.fonts.names.iter().enumerate() {
                            ui.selectable_value(&mut self.fonts.selected, idx, name.as_str());
                        }
                    });
                ui.end_row();

                ui.label("Spread");
                ui.add(egui::DragValue::new(&mut self.base_spread).speed(1.0));
                ui.end_row();

                ui.label("Spread function");
                choice_combo(ui, "spread_fn", &mut self.spread_fn);
                ui.end_row();

                ui.label("Intent");
                ui.horizontal(|ui| {
                    let edit = ui.add(egui::TextEdit::singleline(&mut self.text).desired_width(160.0));
                    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Generate").clicked() || submitted {
                        actions.generate = true;
                    }
                });
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.add_enabled(self.can_save(), egui::Button::new("Save...")).clicked() {
            actions.save = true;
        }

        actions
    }
}
