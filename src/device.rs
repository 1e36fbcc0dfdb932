//! Input device enumeration and selection

use evdev::{Device, Key};
use std::path::PathBuf;
use tracing::{info, warn};

/// Summary of one /dev/input/event* node.
#[derive(Debug, Clone)]
pub struct InputDeviceInfo {
    pub path: PathBuf,
    pub name: String,
    pub has_pointer_buttons: bool,
    pub has_rel_axes: bool,
}

fn describe(path: PathBuf, dev: &Device) -> InputDeviceInfo {
    let name = dev.name().unwrap_or_default().to_string();

    let has_pointer_buttons = dev
        .supported_keys()
        .map(|k| {
            k.contains(Key::BTN_LEFT) || k.contains(Key::BTN_RIGHT) || k.contains(Key::BTN_MIDDLE)
        })
        .unwrap_or(false);

    let has_rel_axes = dev
        .supported_relative_axes()
        .map(|r| r.iter().next().is_some())
        .unwrap_or(false);

    InputDeviceInfo {
        path,
        name,
        has_pointer_buttons,
        has_rel_axes,
    }
}

/// List every readable input device with its pointer capabilities.
pub fn list_input_devices() -> Vec<InputDeviceInfo> {
    let mut devices: Vec<InputDeviceInfo> = evdev::enumerate()
        .map(|(path, dev)| describe(path, &dev))
        .collect();
    devices.sort_by(|a, b| a.path.cmp(&b.path));
    devices
}

/// Pick a pointing device when the settings file doesn't name one.
///
/// First device exposing both mouse buttons and relative axes wins; a device
/// with only relative axes is the fallback.
pub fn find_pointer_device() -> Option<PathBuf> {
    let mut rel_only: Option<PathBuf> = None;

    info!("Scanning /dev/input/event* for a pointing device...");
    for info in list_input_devices() {
        info!(
            "  {:?}: '{}' [buttons={} rel={}]",
            info.path.display(),
            info.name,
            info.has_pointer_buttons,
            info.has_rel_axes
        );

        if info.has_pointer_buttons && info.has_rel_axes {
            info!("Selected pointing device: {:?} ('{}')", info.path, info.name);
            return Some(info.path);
        }
        if info.has_rel_axes && rel_only.is_none() {
            rel_only = Some(info.path);
        }
    }

    if let Some(ref p) = rel_only {
        info!("Selected fallback device with relative axes: {:?}", p);
        return rel_only;
    }

    warn!("No suitable pointing device found!");
    None
}
