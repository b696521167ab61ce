//! Preferred-size negotiation.
//!
//! The host offers one constraint per axis; the strip answers with the size
//! it wants. Along the indexed axis it prefers a long default, across it a
//! thin default thickness.

use crate::model::{Extent, Orientation};

/// Default preferred extent along the indexed axis.
pub const DEFAULT_LENGTH: i32 = 1080;

/// Default preferred extent along the cross axis.
pub const DEFAULT_THICKNESS: i32 = 40;

/// Host constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    /// The size is imposed.
    Exact(i32),
    /// Any size up to the bound.
    AtMost(i32),
    /// No constraint.
    Unconstrained,
}

impl MeasureSpec {
    /// Resolve against the preferred size for this axis.
    pub fn resolve(self, preferred: i32) -> i32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(max) => preferred.min(max),
            Self::Unconstrained => preferred,
        }
    }
}

/// Preferred strip size, independent of orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreferredSize {
    /// Along the indexed axis.
    pub length: i32,
    /// Along the cross axis.
    pub thickness: i32,
}

impl PreferredSize {
    /// Create new preferred size.
    pub fn new(length: i32, thickness: i32) -> Self {
        Self { length, thickness }
    }
}

impl Default for PreferredSize {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_THICKNESS)
    }
}

/// Measured size for the given constraints.
///
/// Each axis is resolved on its own; the orientation only decides which
/// preferred value applies to which axis.
pub fn measure(
    orientation: Orientation,
    preferred: PreferredSize,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Extent {
    let defaults = Extent::from_axes(orientation, preferred.length, preferred.thickness);
    Extent::new(
        width_spec.resolve(defaults.width),
        height_spec.resolve(defaults.height),
    )
}
