//! Sigil - the output document of one compositing pass.
//!
//! Holds the SVG drawing tree and, alongside it, the list of placed glyphs
//! (used by the preview canvas and by tests).

use glam::{Affine2, Vec2};
use svg::node::element::Element;
use svg::Document;
use svg::Node;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        // Integer halves, like the window canvas the sigil is drawn into
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// One glyph as drawn: character, font and the frame it was drawn in.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Descriptor the font strategy produced
    pub descriptor: String,
    /// Resolved family name
    pub family: String,
    /// Point size
    pub size: u32,
    /// Offset along the local Y axis
    pub spread: i32,
    /// Accumulated rotation in radians at draw time
    pub angle: f32,
    /// Full canvas transform at draw time
    pub transform: Affine2,
}

impl PlacedGlyph {
    /// Glyph baseline origin in canvas coordinates.
    pub fn anchor(&self) -> Vec2 {
        self.transform.transform_point2(Vec2::new(0.0, self.spread as f32))
    }

    /// SVG `matrix(a b c d e f)` for the transform.
    pub fn svg_matrix(&self) -> String {
        let m = self.transform.matrix2;
        let t = self.transform.translation;
        format!(
            "matrix({} {} {} {} {} {})",
            m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, t.x, t.y
        )
    }

    fn to_element(&self) -> Element {
        let mut text = Element::new("text");
        text.assign("transform", self.svg_matrix());
        text.assign("x", 0);
        text.assign("y", self.spread);
        text.assign("font-family", escape_xml(&self.family));
        text.assign("font-size", self.size);
        // svg writes children on their own lines; default xml:space drops that padding
        text.append(svg::node::Text::new(escape_xml(&self.ch.to_string())));
        text
    }
}

/// Escape markup characters; svg writes text and attribute values verbatim.
fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Incrementally built output document.
#[derive(Clone, Debug)]
pub struct Sigil {
    canvas: CanvasSize,
    glyphs: Vec<PlacedGlyph>,
    document: Document,
}

impl Sigil {
    /// Empty document sized to `canvas`.
    pub fn new(canvas: CanvasSize) -> Self {
        let document = Document::new()
            .set("width", canvas.width)
            .set("height", canvas.height)
            .set("viewBox", (0, 0, canvas.width, canvas.height));
        Self {
            canvas,
            glyphs: Vec::new(),
            document,
        }
    }

    /// Append one glyph to the drawing.
    pub fn push(&mut self, glyph: PlacedGlyph) {
        self.document.append(glyph.to_element());
        self.glyphs.push(glyph);
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Serialized drawing tree, without XML prolog.
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}
