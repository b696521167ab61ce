//! Terminal host for the index strip (impure shell)

pub mod canvas;
pub mod constants;
pub mod layout;
pub mod overlay;
pub mod styles;

pub use canvas::BufferCanvas;
pub use layout::HostAreas;
pub use overlay::render_selection_overlay;
pub use styles::{next_letter_color, ColorConfig, LETTER_PALETTE};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{KeyAction, Selection};
use crate::state::{self, IndexStrip};
use crossterm::{
    event::{self, Event, KeyEvent, MouseEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Host application: one strip docked against a terminal edge.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    strip: IndexStrip,
    key_bindings: KeyBindings,
    color_config: ColorConfig,
    /// Cells reserved for the strip across its axis.
    strip_thickness: u16,
    /// Last rendered strip area (for mouse routing)
    last_strip_area: Option<Rect>,
    /// Most recent selection change, shown in the overlay and status bar.
    last_event: Option<Selection>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(config: &ResolvedConfig, color_config: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            IndexStrip::from_config(config),
            KeyBindings::default(),
            color_config,
            config.strip_thickness,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q, Esc or Ctrl+C). Redraws only when an
    /// event changed something.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let dirty = match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    false
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    true
                }
                _ => false,
            };
            if dirty || self.strip.needs_redraw() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        mut strip: IndexStrip,
        key_bindings: KeyBindings,
        color_config: ColorConfig,
        strip_thickness: u16,
    ) -> Self {
        strip.set_on_change_listener(|selection| {
            trace!(
                index = selection.raw_index(),
                symbol = selection.symbol().unwrap_or(""),
                "Strip selection changed"
            );
        });
        Self {
            terminal,
            strip,
            key_bindings,
            color_config,
            strip_thickness,
            last_strip_area: None,
            last_event: None,
        }
    }

    /// Handle keyboard input
    ///
    /// Returns true if app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        let style = *self.strip.style();
        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleOrientation => {
                self.strip.set_orientation(style.orientation.toggled());
                // Docking edge moves; stale area must not route clicks.
                self.last_strip_area = None;
            }
            KeyAction::ToggleFullWidth => self.strip.set_full_width(!style.full_width),
            KeyAction::IncreaseLetterSize => {
                self.strip.set_glyph_size(style.letter_size.saturating_add(1))
            }
            KeyAction::DecreaseLetterSize => {
                self.strip.set_glyph_size(style.letter_size.saturating_sub(1))
            }
            KeyAction::CycleLetterColor => self
                .strip
                .set_glyph_color(next_letter_color(style.letter_color)),
        }
        false
    }

    /// Handle mouse input
    ///
    /// Presses and drags over the strip drive selection; the change event,
    /// if any, becomes the displayed event. Returns true if it changed.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match state::handle_mouse(&mut self.strip, mouse, self.last_strip_area) {
            Some(change) => {
                self.last_event = Some(change);
                true
            }
            None => false,
        }
    }

    /// Render the current frame
    ///
    /// Negotiates the strip size against the current terminal, docks it,
    /// then draws strip, overlay and status bar.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let orientation = self.strip.style().orientation;

        let (body, status) = layout::split_status(frame_area);
        let (width_spec, height_spec) =
            layout::measure_specs(body, orientation, self.strip_thickness);
        let measured = self.strip.on_measure(width_spec, height_spec);
        let areas = HostAreas::arrange(body, status, orientation, measured);
        self.last_strip_area = Some(areas.strip);

        let strip = &mut self.strip;
        let color_config = self.color_config;
        let last_event = self.last_event.as_ref();
        self.terminal.draw(|frame| {
            let mut canvas = BufferCanvas::new(frame.buffer_mut(), areas.strip, color_config);
            strip.draw(&mut canvas);
            overlay::render_selection_overlay(frame, areas.content, last_event, color_config);
            layout::render_status_bar(frame, areas.status, last_event, color_config);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        strip: IndexStrip,
        key_bindings: KeyBindings,
        color_config: ColorConfig,
        strip_thickness: u16,
    ) -> Self {
        Self::with_terminal(terminal, strip, key_bindings, color_config, strip_thickness)
    }

    /// Get reference to the strip (test-only accessor)
    pub(crate) fn strip(&self) -> &IndexStrip {
        &self.strip
    }

    /// Most recent selection change (test-only accessor)
    pub(crate) fn last_event(&self) -> Option<&Selection> {
        self.last_event.as_ref()
    }

    /// Where the strip was last drawn (test-only accessor)
    pub(crate) fn last_strip_area(&self) -> Option<Rect> {
        self.last_strip_area
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    ///
    /// Returns true if the displayed selection changed.
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse(mouse)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including after an error.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig, color_config: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, color_config)?;
    info!(
        symbols = config.symbols.len(),
        horizontal = config.horizontal,
        "Index strip host started"
    );

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
