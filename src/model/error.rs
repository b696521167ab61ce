//! Error types for the index-strip application.
//!
//! The geometry core is total: every input it can be given maps to a layout
//! or a hit-test result, so it has no error type. Failures only arise at the
//! edges of the program (configuration, log file setup, terminal I/O) and
//! are collected here into a single top-level [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file unreadable, invalid TOML, bad color
//!   - [`LoggingError`] - Log directory or subscriber setup failed
//!   - [`TuiError`] - Terminal setup, drawing or event polling failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal: `main` reports them on stderr and exits.
///
/// # Examples
///
/// ```
/// use index_strip::config::ConfigError;
/// use index_strip::model::AppError;
///
/// let err: AppError = ConfigError::InvalidPath("bad".to_string()).into();
/// assert!(err.to_string().contains("bad"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal host failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),
}
