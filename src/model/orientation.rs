//! Orientation and axis abstraction.
//!
//! The strip partitions exactly one axis of its container (the *indexed*
//! axis) and spans the other one fully (the *cross* axis). Layout and
//! hit-testing are written once against that pair and only specialized
//! back into x/y when a cell is materialized.

/// Which direction the strip runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Symbols stacked top to bottom (the classic side index).
    #[default]
    Vertical,
    /// Symbols laid out left to right.
    Horizontal,
}

impl Orientation {
    /// Build from the `horizontal` flag used by configuration.
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Whether this is [`Orientation::Horizontal`].
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// The axis that is split into one cell per symbol.
    pub fn indexed_axis(self) -> Axis {
        match self {
            Self::Vertical => Axis::Y,
            Self::Horizontal => Axis::X,
        }
    }

    /// The axis every cell spans completely.
    pub fn cross_axis(self) -> Axis {
        self.indexed_axis().other()
    }

    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// A screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal screen axis.
    X,
    /// Vertical screen axis.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Integer container size.
///
/// Signed on purpose: a host that has not measured yet reports zero or a
/// negative value, which layout treats as "no cells".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Width in host units.
    pub width: i32,
    /// Height in host units.
    pub height: i32,
}

impl Extent {
    /// Create a new extent.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Build an extent from its indexed/cross components.
    pub fn from_axes(orientation: Orientation, indexed: i32, cross: i32) -> Self {
        match orientation.indexed_axis() {
            Axis::Y => Self::new(cross, indexed),
            Axis::X => Self::new(indexed, cross),
        }
    }

    /// Size along `axis`.
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// True when both dimensions are strictly positive.
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pointer or anchor position in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a point from its indexed/cross components.
    pub fn from_axes(orientation: Orientation, indexed: f32, cross: f32) -> Self {
        match orientation.indexed_axis() {
            Axis::Y => Self::new(cross, indexed),
            Axis::X => Self::new(indexed, cross),
        }
    }

    /// Coordinate along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}
