//! Terminal-cell implementation of the glyph canvas.

use crate::view::styles::ColorConfig;
use crate::view_state::GlyphCanvas;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use unicode_width::UnicodeWidthStr;

/// Draws glyphs into a ratatui buffer, one terminal cell per unit.
///
/// The glyph's left edge lands on column `floor(x)`. Its vertical centre,
/// half a glyph above the baseline, lands on row `floor(y - size / 2)`.
/// Glyphs that fall outside `area` or would be cut by its right edge are
/// skipped.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    color_config: ColorConfig,
}

impl<'a> BufferCanvas<'a> {
    /// Canvas over `area` of `buffer`.
    pub fn new(buffer: &'a mut Buffer, area: Rect, color_config: ColorConfig) -> Self {
        let area = area.intersection(buffer.area);
        Self {
            buffer,
            area,
            color_config,
        }
    }

    /// Cell a glyph origin maps to, relative to the canvas area.
    pub fn cell_for(x: f32, y: f32, size: u32) -> Option<(u16, u16)> {
        let col = x.floor();
        let row = (y - size as f32 / 2.0).floor();
        if !(col.is_finite() && row.is_finite()) || col < 0.0 || row < 0.0 {
            return None;
        }
        // `as` saturates; anything past u16::MAX is off-screen anyway.
        Some((col as u16, row as u16))
    }
}

impl GlyphCanvas for BufferCanvas<'_> {
    fn draw_text(&mut self, symbol: &str, x: f32, y: f32, color: Color, size: u32) {
        if size == 0 {
            return;
        }
        let Some((col, row)) = Self::cell_for(x, y, size) else {
            return;
        };
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let room = usize::from(self.area.width - col);
        if symbol.width() > room {
            return;
        }
        self.buffer.set_stringn(
            self.area.x + col,
            self.area.y + row,
            symbol,
            room,
            self.color_config.fg(color),
        );
    }
}
