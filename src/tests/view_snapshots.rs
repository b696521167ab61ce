//! Snapshot tests for the terminal host
//!
//! Uses insta + ratatui TestBackend to pin what the host draws. Each row is
//! framed with `|` so leading and trailing blanks stay visible.

use crate::config::KeyBindings;
use crate::model::{Orientation, Selection, SymbolSet};
use crate::state::{IndexStrip, StripStyle};
use crate::view::{ColorConfig, TuiApp};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;

// ===== Test Helpers =====

fn framed(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            format!("|{}|", row)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn create_app(
    style: StripStyle,
    symbols: &[&str],
    width: u16,
    height: u16,
    color_config: ColorConfig,
) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    TuiApp::new_for_test(
        terminal,
        IndexStrip::new(style, SymbolSet::new(symbols.iter().copied())),
        KeyBindings::default(),
        color_config,
        3,
    )
}

fn render(app: &mut TuiApp<TestBackend>) -> String {
    app.render_test().expect("render");
    framed(app.terminal().backend().buffer())
}

// ===== Snapshots =====

#[test]
fn vertical_strip_docked_right() {
    let mut app = create_app(
        StripStyle::default(),
        &["A", "B", "C", "D", "E"],
        12,
        6,
        ColorConfig::disabled(),
    );
    insta::assert_snapshot!(render(&mut app), @r"
    |          A |
    |          B |
    |          C |
    |          D |
    |          E |
    | touch the s|
    ");
}

#[test]
fn horizontal_strip_docked_bottom() {
    let style = StripStyle {
        orientation: Orientation::Horizontal,
        ..StripStyle::default()
    };
    let mut app = create_app(style, &["A", "B", "C", "D"], 12, 4, ColorConfig::disabled());
    insta::assert_snapshot!(render(&mut app), @r"
    |            |
    |A  B  C  D  |
    |            |
    | touch the s|
    ");
}

#[test]
fn selection_shows_overlay_and_status() {
    let mut app = create_app(
        StripStyle::default(),
        &["A", "B", "C", "D", "E"],
        20,
        7,
        ColorConfig::disabled(),
    );
    app.render_test().expect("render");
    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 18,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.last_event(), Some(&Selection::selected(1, "B")));
    insta::assert_snapshot!(render(&mut app), @r"
    |                  A |
    |     ┌─────┐      B |
    |     │  B  │      C |
    |     └─────┘      D |
    |                  E |
    |                    |
    | B (1) | o:orient f:|
    ");
}

#[test]
fn strip_glyphs_use_letter_color_when_enabled() {
    let style = StripStyle {
        letter_color: Color::Cyan,
        ..StripStyle::default()
    };
    let mut app = create_app(style, &["A", "B"], 12, 3, ColorConfig::enabled());
    app.render_test().expect("render");
    let buffer = app.terminal().backend().buffer();
    // Two body rows, strip at columns 9..12, glyph column 10.
    assert_eq!(buffer[(10, 0)].symbol(), "A");
    assert_eq!(buffer[(10, 0)].fg, Color::Cyan);
    assert_eq!(buffer[(10, 1)].symbol(), "B");
}
