//! Canvas - live preview of the current sigil.
//!
//! Glyphs are painted with egui's own fonts, so families differ from the
//! exported file; placement, size and rotation match it.

use eframe::egui::{self, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};
use eframe::egui::epaint::TextShape;

use crate::core::{CanvasSize, Sigil};

/// Portion of the line height above the baseline
const ASCENT_RATIO: f32 = 0.8;

/// Maps sigil canvas coordinates into a screen rectangle, keeping aspect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasLayout {
    pub scale: f32,
    pub origin: Pos2,
}

impl CanvasLayout {
    /// Fit `canvas` centered inside `rect`.
    pub fn fit(canvas: CanvasSize, rect: Rect) -> Self {
        let w = canvas.width.max(1) as f32;
        let h = canvas.height.max(1) as f32;
        let scale = (rect.width() / w).min(rect.height() / h);
        let size = Vec2::new(w * scale, h * scale);
        let origin = rect.center() - size / 2.0;
        Self { scale, origin }
    }

    pub fn map(&self, p: glam::Vec2) -> Pos2 {
        self.origin + Vec2::new(p.x, p.y) * self.scale
    }

    pub fn rect(&self, canvas: CanvasSize) -> Rect {
        Rect::from_min_size(
            self.origin,
            Vec2::new(canvas.width as f32, canvas.height as f32) * self.scale,
        )
    }
}

/// Paint the canvas area and, if present, the sigil.
pub fn show(ui: &mut egui::Ui, canvas: CanvasSize, sigil: Option<&Sigil>) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let canvas = sigil.map_or(canvas, Sigil::canvas);
    let layout = CanvasLayout::fit(canvas, response.rect);
    let area = layout.rect(canvas);

    painter.rect_filled(area, 0.0, Color32::WHITE);
    painter.rect_stroke(area, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);

    let Some(sigil) = sigil else {
        return;
    };

    let clipped = painter.with_clip_rect(area);
    for glyph in sigil.glyphs() {
        let font = FontId::proportional(glyph.size as f32 * layout.scale);
        let galley = clipped.layout_no_wrap(glyph.ch.to_string(), font, Color32::BLACK);

        // TextShape rotates around its top-left; shift so the baseline sits on the anchor
        let ascent = galley.size().y * ASCENT_RATIO;
        let (sin, cos) = glyph.angle.sin_cos();
        let lift = Vec2::new(ascent * sin, -ascent * cos);
        let pos = layout.map(glyph.anchor()) + lift;

        clipped.add(TextShape::new(pos, galley, Color32::BLACK).with_angle(glyph.angle));
    }
}
