//! Index strip - Entry Point

use clap::Parser;
use index_strip::config::{self, CliOverrides};
use index_strip::model::SymbolSet;
use index_strip::view::ColorConfig;
use ratatui::style::Color;
use std::path::PathBuf;
use tracing::info;

/// Index strip - a touchable A-Z navigation strip in your terminal
#[derive(Parser, Debug)]
#[command(name = "index-strip")]
#[command(version)]
#[command(about = "Terminal host for an index-strip navigation widget")]
pub struct Args {
    /// Lay the symbols out left to right along the bottom edge
    #[arg(long)]
    pub horizontal: bool,

    /// Give each glyph two symbol widths
    #[arg(long)]
    pub full_width: bool,

    /// Requested glyph size (clamped to the strip's cells)
    #[arg(long)]
    pub letter_size: Option<u32>,

    /// Glyph color: name ("gray"), index ("33") or hex ("#ff8800")
    #[arg(long, value_parser = config::parse_color)]
    pub letter_color: Option<Color>,

    /// Comma-separated symbols to show instead of A-Z and #
    #[arg(long)]
    pub symbols: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override file and environment settings.
    pub fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            letter_color: self.letter_color,
            letter_size: self.letter_size,
            full_width: self.full_width,
            horizontal: self.horizontal,
            symbols: self.symbols.as_deref().map(SymbolSet::parse_list),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file)?;
        let with_env = config::apply_env_overrides(merged)?;
        config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    index_strip::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let color_config = ColorConfig::from_env_and_args(args.no_color);
    index_strip::view::run(&config, color_config)?;

    Ok(())
}
