//! Widget state and input routing.
//!
//! [`IndexStrip`] is the widget itself; [`mouse_handler`] adapts terminal
//! mouse events to its pointer API.

pub mod mouse_handler;
pub mod pointer;
pub mod strip;

pub use mouse_handler::{area_contains, handle_mouse, route_mouse};
pub use pointer::{PointerEvent, PointerPhase};
pub use strip::{ChangeListener, IndexStrip, StripStyle};
