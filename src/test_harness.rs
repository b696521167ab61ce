//! Acceptance test harness driving the terminal host headlessly.
//!
//! Wraps a `TuiApp<TestBackend>` and feeds it synthetic key and mouse
//! events, the way a user at a real terminal would.

use crate::config::keybindings::KeyBindings;
use crate::model::{Selection, SymbolSet};
use crate::state::{IndexStrip, StripStyle};
use crate::view::{ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string for assertions and snapshots.
///
/// Trailing spaces are trimmed; blank lines are kept so row numbers line up.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Headless host for acceptance tests.
pub struct StripHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every scenario uses every helper
impl StripHarness {
    /// Host a strip with the given style and symbols on a `width` x `height`
    /// terminal, colors off, three-cell strip band.
    pub fn new(
        style: StripStyle,
        symbols: SymbolSet,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app = TuiApp::new_for_test(
            terminal,
            IndexStrip::new(style, symbols),
            KeyBindings::default(),
            ColorConfig::disabled(),
            3,
        );
        Ok(Self { app, running: true })
    }

    /// Default vertical Latin strip on an 80x28 terminal: one row per symbol.
    pub fn latin() -> Self {
        Self::new(StripStyle::default(), SymbolSet::latin(), 80, 28)
            .expect("TestBackend terminal creation cannot fail")
    }

    /// Send a key; returns true if the app quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send a key with modifiers; returns true if the app quit.
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render one frame and return it as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Render, then press the left button at a terminal cell.
    pub fn press_at(&mut self, column: u16, row: u16) -> Option<Selection> {
        let _ = self.app.render_test();
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// Drag with the left button held.
    pub fn drag_to(&mut self, column: u16, row: u16) -> Option<Selection> {
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
    }

    /// Release the left button.
    pub fn release_at(&mut self, column: u16, row: u16) -> Option<Selection> {
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> Option<Selection> {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        if self.app.handle_mouse_test(event) {
            self.app.last_event().cloned()
        } else {
            None
        }
    }

    /// The hosted strip.
    pub fn strip(&self) -> &IndexStrip {
        self.app.strip()
    }

    /// Where the strip was last drawn.
    pub fn strip_area(&self) -> Option<Rect> {
        self.app.last_strip_area()
    }
}
