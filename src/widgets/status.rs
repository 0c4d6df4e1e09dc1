use eframe::egui;

use crate::core::font_cache::CacheStats;
use crate::core::Sigil;

/// Status bar at the bottom of the window
pub struct StatusBar;

impl StatusBar {
    /// Render status bar: live sigil size and font cache usage
    pub fn render(ctx: &egui::Context, sigil: Option<&Sigil>, cache_len: usize, stats: CacheStats) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match sigil {
                    Some(s) => {
                        let canvas = s.canvas();
                        ui.monospace(format!("{} glyphs", s.glyph_count()));
                        ui.separator();
                        ui.monospace(format!("{:>4}x{:<4}", canvas.width, canvas.height));
                    }
                    None => {
                        ui.monospace("No sigil");
                    }
                }

                ui.separator();

                ui.monospace(format!(
                    "Fonts cached: {} | hit rate: {:.1}%",
                    cache_len,
                    stats.hit_rate() * 100.0
                ));
            });
        });
    }
}
