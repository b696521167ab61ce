//! Strip geometry (pure core).
//!
//! Layout, preferred-size negotiation and hit-testing. Nothing in here does
//! I/O; the widget in [`crate::state`] stitches these together and the
//! terminal host in [`crate::view`] supplies sizes, pointers and a canvas.

pub mod canvas;
pub mod layout;
pub mod layout_params;
pub mod measure;

pub use canvas::{DrawCall, GlyphCanvas, RecordingCanvas};
pub use hit_test::{GestureState, HitTester};
pub use layout::{compute_layout, Cell, LayoutCache, StripLayout};
pub use layout_params::{LayoutConfig, LayoutParams};
pub use measure::{measure, MeasureSpec, PreferredSize, DEFAULT_LENGTH, DEFAULT_THICKNESS};
