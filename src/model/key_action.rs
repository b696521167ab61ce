//! Domain-level keyboard actions independent of key bindings.

/// Host actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Switch the strip between vertical and horizontal. Default: o
    ToggleOrientation,
    /// Toggle full-width glyphs (two symbol widths). Default: f
    ToggleFullWidth,
    /// Grow the requested glyph size by one unit. Default: +/=
    IncreaseLetterSize,
    /// Shrink the requested glyph size by one unit. Default: -
    DecreaseLetterSize,
    /// Rotate through the glyph color palette. Default: c
    CycleLetterColor,
}
