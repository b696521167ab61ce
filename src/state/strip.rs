//! The index strip widget.
//!
//! Owns the style, the symbol set and the cached geometry, and connects them
//! to the host callbacks: size negotiation, drawing and pointer events.

use super::pointer::{PointerEvent, PointerPhase};
use crate::config::ResolvedConfig;
use crate::model::{Extent, Orientation, Selection, SymbolSet};
use crate::view_state::{
    measure, GlyphCanvas, HitTester, LayoutCache, LayoutConfig, LayoutParams, MeasureSpec,
    PreferredSize, StripLayout,
};
use ratatui::style::Color;
use std::fmt;
use tracing::debug;

/// Single-subscriber selection callback.
pub type ChangeListener = Box<dyn FnMut(&Selection)>;

/// Visual settings of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripStyle {
    /// Glyph color.
    pub letter_color: Color,
    /// Requested glyph size, clamped per layout pass.
    pub letter_size: u32,
    /// Glyphs occupy two symbol widths.
    pub full_width: bool,
    /// Axis the symbols are laid out along.
    pub orientation: Orientation,
}

impl StripStyle {
    /// Default glyph color.
    pub const DEFAULT_COLOR: Color = Color::Gray;
    /// Default requested glyph size.
    pub const DEFAULT_LETTER_SIZE: u32 = 24;
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            letter_color: Self::DEFAULT_COLOR,
            letter_size: Self::DEFAULT_LETTER_SIZE,
            full_width: false,
            orientation: Orientation::Vertical,
        }
    }
}

/// Index strip widget.
///
/// Everything runs on the host's UI thread; no method blocks.
pub struct IndexStrip {
    style: StripStyle,
    symbols: SymbolSet,
    preferred: PreferredSize,
    size: Extent,
    layout: LayoutCache,
    hit_tester: HitTester,
    listener: Option<ChangeListener>,
    redraw_requested: bool,
}

impl IndexStrip {
    /// Create an unmeasured strip.
    pub fn new(style: StripStyle, symbols: SymbolSet) -> Self {
        Self {
            style,
            symbols,
            preferred: PreferredSize::default(),
            size: Extent::default(),
            layout: LayoutCache::new(),
            hit_tester: HitTester::new(),
            listener: None,
            redraw_requested: true,
        }
    }

    /// Create from resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let style = StripStyle {
            letter_color: config.letter_color,
            letter_size: config.letter_size,
            full_width: config.full_width,
            orientation: Orientation::from_horizontal(config.horizontal),
        };
        Self::new(style, config.symbols.clone()).with_preferred_size(PreferredSize::new(
            config.preferred_length,
            config.preferred_thickness,
        ))
    }

    /// Override the preferred size used by [`IndexStrip::on_measure`].
    pub fn with_preferred_size(mut self, preferred: PreferredSize) -> Self {
        self.preferred = preferred;
        self
    }

    // ===== Accessors =====

    /// Current style.
    pub fn style(&self) -> &StripStyle {
        &self.style
    }

    /// Current symbols.
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Size last assigned by the host.
    pub fn size(&self) -> Extent {
        self.size
    }

    /// Preferred size.
    pub fn preferred_size(&self) -> PreferredSize {
        self.preferred
    }

    /// Hit tester state.
    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// Layout cache, for inspecting recomputation.
    pub fn layout_cache(&self) -> &LayoutCache {
        &self.layout
    }

    /// Memoization key for the current inputs.
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(
            LayoutConfig::new(
                self.style.letter_size,
                self.style.full_width,
                self.style.orientation,
                self.size,
            ),
            self.symbols.len(),
        )
    }

    /// Layout for the current inputs, recomputed only if they changed.
    pub fn layout(&mut self) -> &StripLayout {
        let params = self.layout_params();
        self.layout.get(params)
    }

    // ===== Host callbacks =====

    /// Answer the host's size negotiation and adopt the result as the size.
    pub fn on_measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Extent {
        let measured = measure(self.style.orientation, self.preferred, width_spec, height_spec);
        debug!(?width_spec, ?height_spec, ?measured, "Measured index strip");
        self.on_size_changed(measured);
        measured
    }

    /// Host assigned a final size.
    pub fn on_size_changed(&mut self, size: Extent) {
        if self.size != size {
            self.size = size;
            self.redraw_requested = true;
        }
    }

    /// Draw every symbol at its anchor. Returns the number of draw calls.
    pub fn draw<C>(&mut self, canvas: &mut C) -> usize
    where
        C: GlyphCanvas + ?Sized,
    {
        self.redraw_requested = false;
        let params = self.layout_params();
        let layout = self.layout.get(params);
        let color = self.style.letter_color;
        let size = layout.glyph_size();
        let mut calls = 0;
        for (cell, symbol) in layout.cells().iter().zip(self.symbols.iter()) {
            canvas.draw_text(symbol, cell.x_text, cell.y_text, color, size);
            calls += 1;
        }
        calls
    }

    /// Feed a pointer event through the hit tester.
    ///
    /// Returns the change event, if any, after delivering it to the listener.
    /// `Move` without a preceding `Down` is hover and is ignored.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Option<Selection> {
        let change = match event.phase {
            PointerPhase::Down => self.track(event),
            PointerPhase::Move if self.hit_tester.is_tracking() => self.track(event),
            PointerPhase::Move => None,
            PointerPhase::Up => self.hit_tester.release(),
        };
        if let (Some(selection), Some(listener)) = (&change, self.listener.as_mut()) {
            listener(selection);
        }
        change
    }

    fn track(&mut self, event: PointerEvent) -> Option<Selection> {
        let params = self.layout_params();
        let layout = self.layout.get(params);
        let raw = HitTester::resolve_index(layout, event.position());
        self.hit_tester.report_touch(raw, &self.symbols)
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_on_change_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&Selection) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_on_change_listener(&mut self) {
        self.listener = None;
    }

    // ===== Mutators =====

    /// Replace the symbol set.
    pub fn set_symbols(&mut self, symbols: SymbolSet) {
        debug!(count = symbols.len(), "Strip symbols replaced");
        self.symbols = symbols;
        self.invalidate();
    }

    /// Change the requested glyph size.
    pub fn set_glyph_size(&mut self, size: u32) {
        debug!(size, "Strip glyph size changed");
        self.style.letter_size = size;
        self.invalidate();
    }

    /// Change the glyph color.
    pub fn set_glyph_color(&mut self, color: Color) {
        debug!(?color, "Strip glyph color changed");
        self.style.letter_color = color;
        self.invalidate();
    }

    /// Change the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        debug!(?orientation, "Strip orientation changed");
        self.style.orientation = orientation;
        self.invalidate();
    }

    /// Toggle full-width glyphs.
    pub fn set_full_width(&mut self, full_width: bool) {
        debug!(full_width, "Strip full-width changed");
        self.style.full_width = full_width;
        self.invalidate();
    }

    /// Whether the host should redraw before the next frame.
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // Geometry is keyed on the inputs, so a redraw request is enough to get a
    // fresh layout on the next draw.
    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }
}

impl fmt::Debug for IndexStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexStrip")
            .field("style", &self.style)
            .field("symbols", &self.symbols)
            .field("preferred", &self.preferred)
            .field("size", &self.size)
            .field("hit_tester", &self.hit_tester)
            .field("has_listener", &self.listener.is_some())
            .field("redraw_requested", &self.redraw_requested)
            .finish()
    }
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
