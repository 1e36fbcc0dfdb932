//! trackpad2key - Trackpad to Keyboard Emulation
//!
//! Translates mouse/trackpad movement and button clicks into keyboard key
//! presses, so pointer gestures can drive programs in a plain terminal.
//! No X/Wayland needed.

mod cli;
mod config;
mod device;
mod emitter;
mod event;
mod monitor;
mod translator;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Cli;
use config::Config;
use emitter::UinputEmitter;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list_devices {
        list_devices();
        return Ok(());
    }

    let settings_path = match cli.settings {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if cli.create {
        Config::write_default(&settings_path)?;
        println!("Default settings file created at: {}", settings_path.display());
        return Ok(());
    }

    info!("trackpad2key starting...");

    let config = Config::load(&settings_path)?;
    config.validate()?;

    let device_path = resolve_device(cli.device, &config)?;

    let mut emitter = UinputEmitter::new(&config)?;

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = stop.clone();
    ctrlc::set_handler(move || {
        stop_flag.store(true, Ordering::Relaxed);
    })
    .context("Failed to install signal handler")?;

    info!(
        "Monitoring {:?} (threshold={}, debounce={}ms)",
        device_path, config.threshold, config.debounce_ms
    );
    monitor::run(&config, &device_path, &mut emitter, &stop)?;

    info!("trackpad2key shutting down");
    Ok(())
}

fn list_devices() {
    let devices = device::list_input_devices();
    if devices.is_empty() {
        println!("No readable input devices found (are you running as root?)");
        return;
    }
    for dev in devices {
        println!(
            "{:<24} {:<40} buttons={} rel={}",
            dev.path.display(),
            dev.name,
            dev.has_pointer_buttons,
            dev.has_rel_axes
        );
    }
}

/// Command line beats the settings file; an empty setting means auto-detect.
fn resolve_device(override_path: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    if !config.device.is_empty() {
        return Ok(PathBuf::from(&config.device));
    }
    match device::find_pointer_device() {
        Some(path) => Ok(path),
        None => bail!("No pointing device found; set 'device' in the settings file"),
    }
}
