//! Popup showing the symbol under the pointer.

use super::constants::{OVERLAY_HEIGHT, OVERLAY_WIDTH};
use super::styles::{overlay_style, ColorConfig};
use crate::model::Selection;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the popup centered in `area` while a symbol is selected.
///
/// Nothing is drawn for `None`, `Cleared`, or an area too small for the box.
pub fn render_selection_overlay(
    frame: &mut Frame,
    area: Rect,
    event: Option<&Selection>,
    color_config: ColorConfig,
) {
    let Some(symbol) = event.and_then(Selection::symbol) else {
        return;
    };
    let Some(popup_area) = centered_box(OVERLAY_WIDTH, OVERLAY_HEIGHT, area) else {
        return;
    };

    frame.render_widget(Clear, popup_area);
    let popup = Paragraph::new(Line::from(symbol.to_string()))
        .block(Block::default().borders(Borders::ALL))
        .style(overlay_style(color_config))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}

/// A `width` x `height` box centered in `area`, if it fits.
fn centered_box(width: u16, height: u16, area: Rect) -> Option<Rect> {
    if area.width < width || area.height < height {
        return None;
    }
    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}
