//! Synthetic key press output (uinput virtual keyboard)

use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use evdev::{
    AttributeSet, EventType, InputEvent, Key, uinput::VirtualDevice, uinput::VirtualDeviceBuilder,
};
use tracing::debug;

/// Something that can synthesize a key press followed by a release.
pub trait KeyEmitter {
    fn press_and_release(&mut self, key_name: &str) -> Result<()>;
}

/// Resolve a settings-file key name to an evdev key code.
///
/// Names are matched case-insensitively. Covers the keys a terminal
/// application can react to; anything else is rejected at config validation.
pub fn lookup_key(name: &str) -> Option<Key> {
    let lower = name.trim().to_ascii_lowercase();
    let key = match lower.as_str() {
        "enter" | "return" => Key::KEY_ENTER,
        "esc" | "escape" => Key::KEY_ESC,
        "tab" => Key::KEY_TAB,
        "space" => Key::KEY_SPACE,
        "backspace" => Key::KEY_BACKSPACE,
        "delete" | "del" => Key::KEY_DELETE,
        "insert" => Key::KEY_INSERT,
        "up" => Key::KEY_UP,
        "down" => Key::KEY_DOWN,
        "left" => Key::KEY_LEFT,
        "right" => Key::KEY_RIGHT,
        "home" => Key::KEY_HOME,
        "end" => Key::KEY_END,
        "pageup" | "pgup" => Key::KEY_PAGEUP,
        "pagedown" | "pgdn" => Key::KEY_PAGEDOWN,
        "minus" => Key::KEY_MINUS,
        "equal" => Key::KEY_EQUAL,
        "comma" => Key::KEY_COMMA,
        "dot" | "period" => Key::KEY_DOT,
        "slash" => Key::KEY_SLASH,
        "a" => Key::KEY_A,
        "b" => Key::KEY_B,
        "c" => Key::KEY_C,
        "d" => Key::KEY_D,
        "e" => Key::KEY_E,
        "f" => Key::KEY_F,
        "g" => Key::KEY_G,
        "h" => Key::KEY_H,
        "i" => Key::KEY_I,
        "j" => Key::KEY_J,
        "k" => Key::KEY_K,
        "l" => Key::KEY_L,
        "m" => Key::KEY_M,
        "n" => Key::KEY_N,
        "o" => Key::KEY_O,
        "p" => Key::KEY_P,
        "q" => Key::KEY_Q,
        "r" => Key::KEY_R,
        "s" => Key::KEY_S,
        "t" => Key::KEY_T,
        "u" => Key::KEY_U,
        "v" => Key::KEY_V,
        "w" => Key::KEY_W,
        "x" => Key::KEY_X,
        "y" => Key::KEY_Y,
        "z" => Key::KEY_Z,
        "0" => Key::KEY_0,
        "1" => Key::KEY_1,
        "2" => Key::KEY_2,
        "3" => Key::KEY_3,
        "4" => Key::KEY_4,
        "5" => Key::KEY_5,
        "6" => Key::KEY_6,
        "7" => Key::KEY_7,
        "8" => Key::KEY_8,
        "9" => Key::KEY_9,
        "f1" => Key::KEY_F1,
        "f2" => Key::KEY_F2,
        "f3" => Key::KEY_F3,
        "f4" => Key::KEY_F4,
        "f5" => Key::KEY_F5,
        "f6" => Key::KEY_F6,
        "f7" => Key::KEY_F7,
        "f8" => Key::KEY_F8,
        "f9" => Key::KEY_F9,
        "f10" => Key::KEY_F10,
        "f11" => Key::KEY_F11,
        "f12" => Key::KEY_F12,
        _ => return None,
    };
    Some(key)
}

/// Virtual keyboard backed by uinput.
pub struct UinputEmitter {
    device: VirtualDevice,
}

impl UinputEmitter {
    /// Build a virtual keyboard carrying exactly the keys the config binds.
    pub fn new(config: &Config) -> Result<Self> {
        let mut keys: AttributeSet<Key> = AttributeSet::new();
        for (field, name) in config.bound_keys() {
            let key = lookup_key(name)
                .ok_or_else(|| anyhow!("unknown key name '{name}' for '{field}'"))?;
            keys.insert(key);
        }

        let device = VirtualDeviceBuilder::new()
            .context("Failed to create uinput builder")?
            .name("trackpad2key virtual keyboard")
            .with_keys(&keys)
            .context("Failed to set key capabilities")?
            .build()
            .context("Failed to build uinput device")?;

        Ok(Self { device })
    }
}

impl KeyEmitter for UinputEmitter {
    fn press_and_release(&mut self, key_name: &str) -> Result<()> {
        let key =
            lookup_key(key_name).ok_or_else(|| anyhow!("unknown key name '{key_name}'"))?;
        debug!("pressing '{}' (code {})", key_name, key.code());

        let press = InputEvent::new(EventType::KEY, key.code(), 1);
        let release = InputEvent::new(EventType::KEY, key.code(), 0);
        let sync = InputEvent::new(EventType::SYNCHRONIZATION, 0, 0);
        self.device
            .emit(&[press, sync.clone(), release, sync])
            .with_context(|| format!("uinput emit failed for '{key_name}'"))?;
        Ok(())
    }
}
