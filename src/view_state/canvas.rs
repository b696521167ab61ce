//! Glyph drawing seam.

use ratatui::style::Color;

/// The one drawing primitive the strip needs.
///
/// `(x, y)` is the glyph origin: left edge horizontally, baseline vertically.
pub trait GlyphCanvas {
    /// Draw `symbol` at `(x, y)`.
    fn draw_text(&mut self, symbol: &str, x: f32, y: f32, color: Color, size: u32);
}

/// One recorded [`GlyphCanvas::draw_text`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Symbol drawn.
    pub symbol: String,
    /// Glyph origin x.
    pub x: f32,
    /// Glyph baseline y.
    pub y: f32,
    /// Color used.
    pub color: Color,
    /// Effective glyph size.
    pub size: u32,
}

/// Canvas that records calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were made.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl GlyphCanvas for RecordingCanvas {
    fn draw_text(&mut self, symbol: &str, x: f32, y: f32, color: Color, size: u32) {
        self.calls.push(DrawCall {
            symbol: symbol.to_string(),
            x,
            y,
            color,
            size,
        });
    }
}
