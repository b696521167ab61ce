//! Index strip
//!
//! A navigation strip that lays an ordered list of symbols out along one
//! axis, draws them, and turns pointer positions into selection events.
//!
//! The geometry core (`view_state`) is pure: layout and hit-testing are
//! functions of their inputs. `state` wraps it in the widget, and `view`
//! hosts the widget in a terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
