//! Screen layout for the strip host.
//!
//! The strip docks on the right edge when vertical and along the bottom
//! when horizontal. One status line sits below everything.

use crate::model::{Extent, Orientation, Selection};
use crate::view::constants::STATUS_BAR_HEIGHT;
use crate::view::styles::{status_bar_style, ColorConfig};
use crate::view_state::MeasureSpec;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostAreas {
    /// Space left over for the overlay.
    pub content: Rect,
    /// Where the strip is drawn.
    pub strip: Rect,
    /// Status line.
    pub status: Rect,
}

impl HostAreas {
    /// Areas for a strip of the measured size docked in `body`.
    pub fn arrange(body: Rect, status: Rect, orientation: Orientation, measured: Extent) -> Self {
        let strip = dock_strip(body, orientation, measured);
        Self {
            content: content_area(body, strip, orientation),
            strip,
            status,
        }
    }
}

/// Split off the one-line status bar at the bottom.
pub fn split_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Size constraints the host passes to the strip.
///
/// The indexed axis gets the whole body; the cross axis is capped at
/// `thickness` cells.
pub fn measure_specs(
    body: Rect,
    orientation: Orientation,
    thickness: u16,
) -> (MeasureSpec, MeasureSpec) {
    let across = MeasureSpec::AtMost(i32::from(thickness));
    match orientation {
        Orientation::Vertical => (across, MeasureSpec::Exact(i32::from(body.height))),
        Orientation::Horizontal => (MeasureSpec::Exact(i32::from(body.width)), across),
    }
}

fn to_cells(value: i32, max: u16) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX).min(max)
}

/// Place a strip of the measured size against the docking edge of `body`.
pub fn dock_strip(body: Rect, orientation: Orientation, measured: Extent) -> Rect {
    let width = to_cells(measured.width, body.width);
    let height = to_cells(measured.height, body.height);
    match orientation {
        Orientation::Vertical => Rect::new(body.right() - width, body.y, width, height),
        Orientation::Horizontal => Rect::new(body.x, body.bottom() - height, width, height),
    }
}

/// Body minus the strip's band.
pub fn content_area(body: Rect, strip: Rect, orientation: Orientation) -> Rect {
    match orientation {
        Orientation::Vertical => Rect {
            width: body.width.saturating_sub(strip.width),
            ..body
        },
        Orientation::Horizontal => Rect {
            height: body.height.saturating_sub(strip.height),
            ..body
        },
    }
}

/// Short description of the last selection event.
pub fn describe_event(event: Option<&Selection>) -> String {
    match event {
        None => "touch the strip".to_string(),
        Some(Selection::Cleared) => "cleared".to_string(),
        Some(Selection::Selected { index, symbol }) => format!("{} ({})", symbol, index),
    }
}

/// Status line text: last event followed by key hints.
pub fn build_status_text(event: Option<&Selection>) -> String {
    format!(
        " {} | o:orient f:full +/-:size c:color q:quit",
        describe_event(event)
    )
}

/// Render the status bar.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    event: Option<&Selection>,
    color_config: ColorConfig,
) {
    let paragraph =
        Paragraph::new(Line::from(build_status_text(event))).style(status_bar_style(color_config));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
