//! Host styling: color switch, glyph palette and chrome styles.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }

    /// Foreground style for `color`, or the terminal default when disabled.
    pub fn fg(self, color: Color) -> Style {
        if self.enabled {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }
}

// ===== Glyph palette =====

/// Colors visited by the cycle-color key, in order.
pub const LETTER_PALETTE: [Color; 6] = [
    Color::Gray,
    Color::White,
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
];

/// Palette entry after `current`.
///
/// A color outside the palette (from config) restarts at the first entry.
pub fn next_letter_color(current: Color) -> Color {
    let next = LETTER_PALETTE
        .iter()
        .position(|&c| c == current)
        .map_or(0, |i| (i + 1) % LETTER_PALETTE.len());
    LETTER_PALETTE[next]
}

// ===== Chrome =====

/// Style of the bottom status line.
pub fn status_bar_style(config: ColorConfig) -> Style {
    config.fg(Color::DarkGray)
}

/// Style of the selected-symbol popup.
pub fn overlay_style(config: ColorConfig) -> Style {
    config.fg(Color::Yellow).add_modifier(Modifier::BOLD)
}
