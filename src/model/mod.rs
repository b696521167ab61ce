//! Domain model types (pure).
//!
//! All types in this module are plain data with no I/O.

pub mod error;
pub mod key_action;
pub mod orientation;
pub mod selection;
pub mod symbols;

// Re-export for convenience
pub use error::AppError;
pub use key_action::KeyAction;
pub use orientation::{Axis, Extent, Orientation, Point};
pub use selection::Selection;
pub use symbols::SymbolSet;
