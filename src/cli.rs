// CLI definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trackpad2key")]
#[command(version, about = "Mouse and trackpad to keyboard emulator for the Linux console")]
pub struct Cli {
    /// Path to the settings file (default: per-user config directory)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(short, long)]
    pub create: bool,

    /// List available input devices and exit
    #[arg(short, long)]
    pub list_devices: bool,

    /// Input device to monitor (overrides the settings file)
    #[arg(short, long, value_name = "PATH")]
    pub device: Option<PathBuf>,
}
