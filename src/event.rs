//! Pointer event model
//!
//! Reduces the raw evdev stream to the two event shapes the translator cares
//! about: button transitions and relative axis deltas.

use evdev::{InputEvent, InputEventKind, Key, RelativeAxisType};

/// Pointer button classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
}

/// Relative movement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One meaningful notification from the pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Button { button: Button, pressed: bool },
    Motion { axis: Axis, delta: i32 },
}

/// Map a raw evdev event to a pointer event.
///
/// Anything that is not a left/right/middle button transition or an X/Y
/// relative delta returns `None` (sync, misc, scroll wheel, key repeats).
pub fn from_input_event(ev: &InputEvent) -> Option<PointerEvent> {
    match ev.kind() {
        InputEventKind::Key(key) => {
            let button = match key {
                Key::BTN_LEFT => Button::Left,
                Key::BTN_RIGHT => Button::Right,
                Key::BTN_MIDDLE => Button::Middle,
                _ => return None,
            };
            // value 2 is autorepeat, which buttons don't meaningfully do
            let pressed = match ev.value() {
                1 => true,
                0 => false,
                _ => return None,
            };
            Some(PointerEvent::Button { button, pressed })
        }
        InputEventKind::RelAxis(axis) => {
            let axis = match axis {
                RelativeAxisType::REL_X => Axis::X,
                RelativeAxisType::REL_Y => Axis::Y,
                _ => return None,
            };
            Some(PointerEvent::Motion {
                axis,
                delta: ev.value(),
            })
        }
        _ => None,
    }
}
