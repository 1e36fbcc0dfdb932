//! Device monitoring loop (evdev grab + translation)
//!
//! Grabs the pointing device exclusively so its events never reach the rest
//! of the system, feeds each one through the translator, and drives the key
//! emitter with whatever it decides. The grab is released on every exit path,
//! otherwise the device would stay invisible system-wide.

use crate::config::Config;
use crate::emitter::KeyEmitter;
use crate::event;
use crate::translator::Translator;
use anyhow::{Context, Result};
use evdev::Device;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Grab the device and translate its events until `stop` is set or the
/// device goes away.
pub fn run(
    config: &Config,
    device_path: &Path,
    emitter: &mut dyn KeyEmitter,
    stop: &AtomicBool,
) -> Result<()> {
    let mut dev = Device::open(device_path)
        .with_context(|| format!("Failed to open evdev device: {device_path:?}"))?;

    set_nonblocking(&dev).context("Failed to set evdev device non-blocking")?;

    dev.grab()
        .with_context(|| format!("Failed to grab evdev device: {device_path:?}"))?;
    info!(
        "Grabbed {:?} ('{}')",
        device_path,
        dev.name().unwrap_or("?")
    );

    let mut translator = Translator::new(config.clone(), Instant::now());
    let result = event_loop(&mut dev, &mut translator, emitter, stop);

    // Best-effort ungrab. (Dropping the device would also release the grab.)
    let _ = dev.ungrab();
    info!("Released {:?}", device_path);

    result
}

fn event_loop(
    dev: &mut Device,
    translator: &mut Translator,
    emitter: &mut dyn KeyEmitter,
    stop: &AtomicBool,
) -> Result<()> {
    while !stop.load(Ordering::Relaxed) {
        match dev.fetch_events() {
            Ok(events) => {
                for ev in events {
                    let Some(pointer_event) = event::from_input_event(&ev) else {
                        continue;
                    };
                    debug!("pointer event: {:?}", pointer_event);
                    if let Some(key) = translator.handle(pointer_event, Instant::now()) {
                        // Fire-and-forget: a failed emission never reaches
                        // back into the translator's state.
                        if let Err(e) = emitter.press_and_release(key) {
                            warn!("failed to synthesize '{key}': {e:#}");
                        }
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                thread::sleep(Duration::from_millis(5));
            }
            Err(e) => return Err(e).context("Failed to read events from evdev device"),
        }
    }
    Ok(())
}

fn set_nonblocking(dev: &Device) -> Result<()> {
    let raw_fd = dev.as_raw_fd();

    // Preserve existing flags; just OR in O_NONBLOCK.
    let current = unsafe { libc::fcntl(raw_fd, libc::F_GETFL) };
    if current < 0 {
        return Err(std::io::Error::last_os_error()).context("fcntl(F_GETFL) failed");
    }

    let rc = unsafe { libc::fcntl(raw_fd, libc::F_SETFL, current | libc::O_NONBLOCK) };
    if rc < 0 {
        return Err(std::io::Error::last_os_error()).context("fcntl(F_SETFL, O_NONBLOCK) failed");
    }
    Ok(())
}
