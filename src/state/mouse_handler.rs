//! Mouse event handler.
//!
//! Translates terminal mouse events into strip-local pointer events.

use super::pointer::PointerEvent;
use super::strip::IndexStrip;
use crate::model::Selection;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Whether `(column, row)` lies inside `area`.
pub fn area_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Convert a terminal mouse event into a pointer event for the strip.
///
/// # Arguments
/// * `mouse` - Raw terminal mouse event
/// * `strip_area` - Where the strip was last drawn
/// * `tracking` - Whether a strip gesture is in progress
///
/// # Behavior
/// - Left press inside the strip starts a gesture
/// - Left drag and release are forwarded only while tracking, wherever the
///   pointer is, so leaving the strip produces out-of-range coordinates
/// - Everything else (other buttons, scroll, hover) is dropped
pub fn route_mouse(mouse: MouseEvent, strip_area: Rect, tracking: bool) -> Option<PointerEvent> {
    let x = f32::from(mouse.column) - f32::from(strip_area.x);
    let y = f32::from(mouse.row) - f32::from(strip_area.y);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if area_contains(strip_area, mouse.column, mouse.row) =>
        {
            Some(PointerEvent::down(x, y))
        }
        MouseEventKind::Drag(MouseButton::Left) if tracking => Some(PointerEvent::moved(x, y)),
        MouseEventKind::Up(MouseButton::Left) if tracking => Some(PointerEvent::up(x, y)),
        _ => None,
    }
}

/// Route a mouse event to the strip.
///
/// Returns the selection change, if any. Before the strip has been laid out
/// on screen only a release of a tracking gesture gets through, so a gesture
/// always ends even if the strip moved under it.
pub fn handle_mouse(
    strip: &mut IndexStrip,
    mouse: MouseEvent,
    strip_area: Option<Rect>,
) -> Option<Selection> {
    let tracking = strip.hit_tester().is_tracking();
    let event = match strip_area {
        Some(area) => route_mouse(mouse, area, tracking)?,
        None => match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) if tracking => {
                PointerEvent::up(f32::from(mouse.column), f32::from(mouse.row))
            }
            _ => return None,
        },
    };
    strip.on_pointer(event)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
