//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Effect;

/// Live camera intensity-histogram overlay
#[derive(Parser, Debug)]
#[command(name = "histoscope")]
#[command(version, about = "Intensity-histogram overlay for camera frames", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Frame width in pixels (must be even)
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height in pixels (must be even)
    #[arg(long)]
    pub height: Option<u32>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Color-effect mode
    #[arg(long, value_enum)]
    pub effect: Option<Effect>,

    /// Stop after this many frames (run until Ctrl+C if omitted)
    #[arg(long, short = 'n')]
    pub frames: Option<u64>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
