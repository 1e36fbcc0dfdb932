//! Pointer-to-key translation engine
//!
//! Turns the stream of pointer events into discrete key presses: button
//! presses map straight to their bound keys, while axis deltas accumulate
//! until they cross the movement threshold and fire a direction key. A
//! debounce interval keeps one continuous swipe from firing a burst of
//! repeated directions.
//!
//! The translator is a pure state machine: it never touches the device or
//! uinput, so the whole policy is testable without hardware.

use crate::config::Config;
use crate::event::{Axis, Button, PointerEvent};
use std::time::Instant;

pub struct Translator {
    config: Config,
    x_accum: i32,
    y_accum: i32,
    /// Time of the most recent directional fire (button presses don't count)
    last_fire: Instant,
}

impl Translator {
    /// Create a translator with both accumulators empty.
    ///
    /// `start` seeds the debounce timer, so axis movement within the first
    /// debounce interval after startup is ignored.
    pub fn new(config: Config, start: Instant) -> Self {
        Self {
            config,
            x_accum: 0,
            y_accum: 0,
            last_fire: start,
        }
    }

    /// Feed one pointer event and decide which key to press, if any.
    ///
    /// Button presses always fire immediately. Axis deltas inside the
    /// debounce window are dropped outright, not queued; outside it they
    /// accumulate per axis, and crossing the threshold fires the direction
    /// given by the accumulator's sign, resets that axis only, and restarts
    /// the debounce timer.
    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> Option<&str> {
        match event {
            PointerEvent::Button {
                button,
                pressed: true,
            } => Some(self.click_key(button)),
            PointerEvent::Button { pressed: false, .. } => None,
            PointerEvent::Motion { axis, delta } => {
                if now.duration_since(self.last_fire) < self.config.debounce() {
                    return None;
                }
                let accum = match axis {
                    Axis::X => &mut self.x_accum,
                    Axis::Y => &mut self.y_accum,
                };
                *accum += delta;
                if accum.abs() >= self.config.threshold {
                    let positive = *accum > 0;
                    *accum = 0;
                    self.last_fire = now;
                    Some(self.direction_key(axis, positive))
                } else {
                    None
                }
            }
        }
    }

    fn click_key(&self, button: Button) -> &str {
        match button {
            Button::Left => &self.config.left_click,
            Button::Right => &self.config.right_click,
            Button::Middle => &self.config.middle_click,
        }
    }

    /// Direction binding for an axis and accumulator sign.
    fn direction_key(&self, axis: Axis, positive: bool) -> &str {
        match (axis, positive) {
            (Axis::X, true) => &self.config.right,
            (Axis::X, false) => &self.config.left,
            (Axis::Y, true) => &self.config.down,
            (Axis::Y, false) => &self.config.up,
        }
    }
}
