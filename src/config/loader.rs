//! Configuration file loading with precedence handling.

use crate::model::SymbolSet;
use crate::view_state::{DEFAULT_LENGTH, DEFAULT_THICKNESS};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "INDEX_STRIP_CONFIG";
/// Environment variable overriding the glyph color.
pub const LETTER_COLOR_ENV: &str = "INDEX_STRIP_LETTER_COLOR";
/// Environment variable overriding the symbols (comma-separated).
pub const SYMBOLS_ENV: &str = "INDEX_STRIP_SYMBOLS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A color setting could not be parsed.
    #[error("Invalid color {value:?}: {reason}")]
    InvalidColor {
        /// The rejected value.
        value: String,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/index-strip/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Glyph color: a named color (`"gray"`), an index (`"33"`) or `"#rrggbb"`.
    #[serde(default)]
    pub letter_color: Option<String>,

    /// Requested glyph size.
    #[serde(default)]
    pub letter_size: Option<u32>,

    /// Glyphs occupy two symbol widths.
    #[serde(default)]
    pub full_width: Option<bool>,

    /// Lay symbols out left to right.
    #[serde(default)]
    pub horizontal: Option<bool>,

    /// Symbols in display order.
    #[serde(default)]
    pub symbols: Option<Vec<String>>,

    /// Preferred size along the indexed axis.
    #[serde(default)]
    pub preferred_length: Option<i32>,

    /// Preferred size across the indexed axis.
    #[serde(default)]
    pub preferred_thickness: Option<i32>,

    /// Terminal cells reserved for the strip across its axis.
    #[serde(default)]
    pub strip_thickness: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Glyph color.
    pub letter_color: Color,
    /// Requested glyph size.
    pub letter_size: u32,
    /// Full-width glyphs.
    pub full_width: bool,
    /// Horizontal orientation.
    pub horizontal: bool,
    /// Symbols in display order.
    pub symbols: SymbolSet,
    /// Preferred size along the indexed axis.
    pub preferred_length: i32,
    /// Preferred size across the indexed axis.
    pub preferred_thickness: i32,
    /// Terminal cells reserved for the strip.
    pub strip_thickness: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            letter_color: Color::Gray,
            letter_size: 24,
            full_width: false,
            horizontal: false,
            symbols: SymbolSet::latin(),
            preferred_length: DEFAULT_LENGTH,
            preferred_thickness: DEFAULT_THICKNESS,
            strip_thickness: 3,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags.
///
/// `None` (or `false` for switches) leaves the lower-precedence value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--letter-color`
    pub letter_color: Option<Color>,
    /// `--letter-size`
    pub letter_size: Option<u32>,
    /// `--full-width`
    pub full_width: bool,
    /// `--horizontal`
    pub horizontal: bool,
    /// `--symbols`
    pub symbols: Option<SymbolSet>,
}

/// Parse a color setting.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] for anything ratatui cannot parse.
pub fn parse_color(value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|e| ConfigError::InvalidColor {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/index-strip/index-strip.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("index-strip").join("index-strip.log")
    } else {
        PathBuf::from("index-strip.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/index-strip/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("index-strip").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `INDEX_STRIP_CONFIG` environment variable
/// 3. Default path `~/.config/index-strip/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] if `letter_color` cannot be parsed.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let letter_color = match config.letter_color {
        Some(value) => parse_color(&value)?,
        None => defaults.letter_color,
    };

    Ok(ResolvedConfig {
        letter_color,
        letter_size: config.letter_size.unwrap_or(defaults.letter_size),
        full_width: config.full_width.unwrap_or(defaults.full_width),
        horizontal: config.horizontal.unwrap_or(defaults.horizontal),
        symbols: config
            .symbols
            .map(SymbolSet::from)
            .unwrap_or(defaults.symbols),
        preferred_length: config.preferred_length.unwrap_or(defaults.preferred_length),
        preferred_thickness: config
            .preferred_thickness
            .unwrap_or(defaults.preferred_thickness),
        strip_thickness: config.strip_thickness.unwrap_or(defaults.strip_thickness),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `INDEX_STRIP_LETTER_COLOR`: Override glyph color
/// - `INDEX_STRIP_SYMBOLS`: Override symbols (comma-separated)
///
/// # Errors
///
/// Returns [`ConfigError::InvalidColor`] if the color variable cannot be parsed.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(color) = std::env::var(LETTER_COLOR_ENV) {
        config.letter_color = parse_color(&color)?;
    }

    if let Ok(symbols) = std::env::var(SYMBOLS_ENV) {
        config.symbols = SymbolSet::parse_list(&symbols);
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(color) = overrides.letter_color {
        config.letter_color = color;
    }

    if let Some(size) = overrides.letter_size {
        config.letter_size = size;
    }

    // Switches can only turn a setting on.
    if overrides.full_width {
        config.full_width = true;
    }
    if overrides.horizontal {
        config.horizontal = true;
    }

    if let Some(symbols) = overrides.symbols {
        config.symbols = symbols;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
