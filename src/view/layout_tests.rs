//! Tests for host screen layout.

use super::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn frame_area() -> Rect {
    Rect::new(0, 0, 80, 28)
}

#[test]
fn status_line_is_last_row() {
    let (body, status) = split_status(frame_area());
    assert_eq!(body, Rect::new(0, 0, 80, 27));
    assert_eq!(status, Rect::new(0, 27, 80, 1));
}

#[test]
fn vertical_specs_fix_height_and_cap_width() {
    let (body, _) = split_status(frame_area());
    let (w, h) = measure_specs(body, Orientation::Vertical, 3);
    assert_eq!(w, MeasureSpec::AtMost(3));
    assert_eq!(h, MeasureSpec::Exact(27));
}

#[test]
fn horizontal_specs_fix_width_and_cap_height() {
    let (body, _) = split_status(frame_area());
    let (w, h) = measure_specs(body, Orientation::Horizontal, 2);
    assert_eq!(w, MeasureSpec::Exact(80));
    assert_eq!(h, MeasureSpec::AtMost(2));
}

#[test]
fn vertical_strip_docks_right() {
    let body = Rect::new(0, 0, 80, 27);
    let strip = dock_strip(body, Orientation::Vertical, Extent::new(3, 27));
    assert_eq!(strip, Rect::new(77, 0, 3, 27));
    assert_eq!(
        content_area(body, strip, Orientation::Vertical),
        Rect::new(0, 0, 77, 27)
    );
}

#[test]
fn horizontal_strip_docks_bottom() {
    let body = Rect::new(0, 0, 80, 27);
    let strip = dock_strip(body, Orientation::Horizontal, Extent::new(80, 3));
    assert_eq!(strip, Rect::new(0, 24, 80, 3));
    assert_eq!(
        content_area(body, strip, Orientation::Horizontal),
        Rect::new(0, 0, 80, 24)
    );
}

#[test]
fn oversized_or_negative_extent_is_clamped() {
    let body = Rect::new(0, 0, 10, 5);
    assert_eq!(
        dock_strip(body, Orientation::Vertical, Extent::new(40, 1080)),
        Rect::new(0, 0, 10, 5)
    );
    assert_eq!(
        dock_strip(body, Orientation::Vertical, Extent::new(-3, -1)),
        Rect::new(10, 0, 0, 0)
    );
}

#[test]
fn status_text_describes_events() {
    assert!(build_status_text(None).starts_with(" touch the strip |"));
    assert!(build_status_text(Some(&Selection::Cleared)).starts_with(" cleared |"));
    assert!(build_status_text(Some(&Selection::selected(1, "B"))).starts_with(" B (1) |"));
}

#[test]
fn status_bar_renders_text() {
    let mut terminal = Terminal::new(TestBackend::new(50, 1)).expect("test terminal");
    terminal
        .draw(|frame| {
            render_status_bar(
                frame,
                frame.area(),
                Some(&Selection::selected(2, "C")),
                ColorConfig::disabled(),
            )
        })
        .expect("draw");
    let line: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(line.starts_with(" C (2) | o:orient"), "got {:?}", line);
}
