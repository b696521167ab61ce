//! Layout dimension constants for the strip host.

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the selected-symbol popup, borders included.
///
/// Wide enough for a two-cell symbol with padding on both sides.
pub const OVERLAY_WIDTH: u16 = 7;

/// Height of the selected-symbol popup, borders included.
pub const OVERLAY_HEIGHT: u16 = 3;
