//! Cell partition of the strip and glyph anchor placement.
//!
//! The indexed axis is divided into `n` equal cells using truncating integer
//! division. The remainder is not redistributed, so the cells may stop short
//! of the container end by less than one cell. Every cell spans the full
//! cross axis.
//!
//! Anchor offsets inside a cell stay fractional. The cross-axis anchor is
//! shared by every cell and truncates to a whole unit.

use super::layout_params::{LayoutConfig, LayoutParams};
use crate::model::{Axis, Orientation, Point};
use tracing::debug;

/// Touch-sensitive rectangle for one symbol plus the glyph baseline origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    /// Left edge.
    pub x_start: f32,
    /// Right edge (exclusive).
    pub x_end: f32,
    /// Top edge.
    pub y_start: f32,
    /// Bottom edge (exclusive).
    pub y_end: f32,
    /// Glyph origin x.
    pub x_text: f32,
    /// Glyph baseline y.
    pub y_text: f32,
}

impl Cell {
    fn from_axes(
        orientation: Orientation,
        indexed: (f32, f32),
        cross: (f32, f32),
        anchor: Point,
    ) -> Self {
        let (x, y) = match orientation.indexed_axis() {
            Axis::Y => (cross, indexed),
            Axis::X => (indexed, cross),
        };
        Self {
            x_start: x.0,
            x_end: x.1,
            y_start: y.0,
            y_end: y.1,
            x_text: anchor.x,
            y_text: anchor.y,
        }
    }

    /// `(start, end)` along `axis`.
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::X => (self.x_start, self.x_end),
            Axis::Y => (self.y_start, self.y_end),
        }
    }

    /// Where the glyph is drawn.
    pub fn anchor(&self) -> Point {
        Point::new(self.x_text, self.y_text)
    }

    /// Centre of the rectangle.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.x_start + self.x_end) / 2.0,
            (self.y_start + self.y_end) / 2.0,
        )
    }

    /// Half-open containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_start
            && point.x < self.x_end
            && point.y >= self.y_start
            && point.y < self.y_end
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    orientation: Orientation,
    cell_extent: u32,
    glyph_size: u32,
    cells: Vec<Cell>,
}

impl StripLayout {
    /// Degenerate layout: nothing drawn, every hit misses.
    pub fn empty(orientation: Orientation) -> Self {
        Self {
            orientation,
            cell_extent: 0,
            glyph_size: 0,
            cells: Vec::new(),
        }
    }

    /// Orientation the cells were computed for.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of every cell along the indexed axis. Zero when empty or when
    /// there are more symbols than units along the axis.
    pub fn cell_extent(&self) -> u32 {
        self.cell_extent
    }

    /// Requested glyph size after clamping to the cell.
    pub fn glyph_size(&self) -> u32 {
        self.glyph_size
    }

    /// Cells in symbol order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for the degenerate layout.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Combined extent of all cells along the indexed axis.
    pub fn covered_extent(&self) -> u64 {
        u64::from(self.cell_extent) * self.cells.len() as u64
    }
}

/// Partition the container into one cell per symbol.
///
/// Returns the empty layout when there are no symbols or when either
/// container dimension is not positive. With more symbols than units along
/// the indexed axis every cell truncates to zero extent and the glyph to
/// size zero, but there is still one cell per symbol.
pub fn compute_layout(config: &LayoutConfig, symbol_count: usize) -> StripLayout {
    let orientation = config.orientation;
    let extent = config.extent();
    if symbol_count == 0 || !extent.is_positive() {
        return StripLayout::empty(orientation);
    }

    let indexed_axis = orientation.indexed_axis();
    let cross_axis = orientation.cross_axis();
    let indexed = extent.along(indexed_axis);
    let cross = extent.along(cross_axis);

    let cell_extent = match i32::try_from(symbol_count) {
        Ok(n) => indexed / n,
        Err(_) => 0,
    };

    // Both operands are non-negative here.
    let fit = cross.min(cell_extent) as u32;
    let glyph_size = config.glyph_size.min(fit);
    let glyph = GlyphBox::new(glyph_size, config.full_width);

    let cell_f = cell_extent as f32;
    let cross_anchor = glyph.cross_offset(cross_axis, cross) as f32;
    let indexed_anchor = glyph.offset(indexed_axis, cell_f);

    let cells = (0..symbol_count)
        .map(|i| {
            let start = i as f32 * cell_f;
            let end = (i + 1) as f32 * cell_f;
            Cell::from_axes(
                orientation,
                (start, end),
                (0.0, cross as f32),
                Point::from_axes(orientation, start + indexed_anchor, cross_anchor),
            )
        })
        .collect();

    StripLayout {
        orientation,
        cell_extent: cell_extent as u32,
        glyph_size,
        cells,
    }
}

/// Glyph footprint used to centre it inside a span.
struct GlyphBox {
    size: i32,
    width: i32,
}

impl GlyphBox {
    fn new(size: u32, full_width: bool) -> Self {
        // Clamped to the container, so it fits in i32.
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        let width = if full_width { size.saturating_mul(2) } else { size };
        Self { size, width }
    }

    /// Offset of the glyph origin inside a span of length `span`.
    ///
    /// Horizontally the origin is the glyph's left edge; vertically it is the
    /// baseline, which sits one glyph size below the top of the glyph.
    fn offset(&self, axis: Axis, span: f32) -> f32 {
        match axis {
            Axis::X => (span - self.width as f32) / 2.0,
            Axis::Y => (span + self.size as f32) / 2.0,
        }
    }

    /// [`GlyphBox::offset`] across the whole strip, truncated toward zero.
    fn cross_offset(&self, axis: Axis, span: i32) -> i32 {
        match axis {
            Axis::X => span.saturating_sub(self.width) / 2,
            Axis::Y => span.saturating_add(self.size) / 2,
        }
    }
}

/// Memoized [`compute_layout`].
///
/// Recomputes only when the [`LayoutParams`] key changes, so drawing can ask
/// for the layout every frame without paying for it.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    entry: Option<(LayoutParams, StripLayout)>,
    recomputations: usize,
}

impl LayoutCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for `params`, recomputing if they differ from the cached key.
    pub fn get(&mut self, params: LayoutParams) -> &StripLayout {
        if matches!(&self.entry, Some((key, _)) if *key != params) {
            self.entry = None;
        }
        let (_, layout) = self.entry.get_or_insert_with(|| {
            let layout = compute_layout(&params.config, params.symbol_count);
            debug!(
                symbols = params.symbol_count,
                width = params.config.width,
                height = params.config.height,
                orientation = ?params.config.orientation,
                cell_extent = layout.cell_extent(),
                glyph_size = layout.glyph_size(),
                "Recomputed strip layout"
            );
            self.recomputations += 1;
            (params, layout)
        });
        layout
    }

    /// Most recently computed layout, if any.
    pub fn current(&self) -> Option<&StripLayout> {
        self.entry.as_ref().map(|(_, layout)| layout)
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times a layout has been computed.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
