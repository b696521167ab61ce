//! Layout inputs and the memoization key built from them.

use crate::model::{Extent, Orientation};

/// Everything that shapes one layout pass, apart from the symbol count.
///
/// Immutable per pass; changing any field produces a different
/// [`LayoutParams`] and therefore a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Requested glyph size before clamping.
    pub glyph_size: u32,
    /// Glyphs occupy two symbol widths instead of one.
    pub full_width: bool,
    /// Which axis is partitioned.
    pub orientation: Orientation,
    /// Container width in host units.
    pub width: i32,
    /// Container height in host units.
    pub height: i32,
}

impl LayoutConfig {
    /// Create new layout config.
    pub fn new(glyph_size: u32, full_width: bool, orientation: Orientation, extent: Extent) -> Self {
        Self {
            glyph_size,
            full_width,
            orientation,
            width: extent.width,
            height: extent.height,
        }
    }

    /// Container size.
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }
}

/// Memoization key for [`super::layout::LayoutCache`].
///
/// Cell geometry depends on the symbols only through their count, so two
/// symbol sets of equal length share a layout.
///
/// # Equality Semantics
/// Two LayoutParams are equal if they would produce identical layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    /// Per-pass configuration.
    pub config: LayoutConfig,
    /// Number of symbols to partition the container into.
    pub symbol_count: usize,
}

impl LayoutParams {
    /// Create new layout params.
    pub fn new(config: LayoutConfig, symbol_count: usize) -> Self {
        Self {
            config,
            symbol_count,
        }
    }
}
