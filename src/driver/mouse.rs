//! Default mouse sub-driver.

use parking_lot::Mutex;

use super::MouseHandler;
use crate::event::{MouseButtonEvent, MouseMotionEvent, MouseWheelEvent};

#[derive(Debug, Default, Clone, Copy)]
struct MouseInner {
    x: i32,
    y: i32,
    buttons: u32,
    wheel_x: i32,
    wheel_y: i32,
}

/// Mouse handler tracking absolute position, the held button mask and the
/// accumulated wheel travel.
#[derive(Debug, Default)]
pub struct MouseState {
    inner: Mutex<MouseInner>,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported cursor position.
    pub fn position(&self) -> (i32, i32) {
        let m = self.inner.lock();
        (m.x, m.y)
    }

    /// Is the 1-based button index currently held?
    pub fn is_button_pressed(&self, button: u8) -> bool {
        if button == 0 || button > 32 {
            return false;
        }
        self.inner.lock().buttons & (1 << (button - 1)) != 0
    }

    /// Total wheel travel since creation, horizontal then vertical.
    pub fn wheel(&self) -> (i32, i32) {
        let m = self.inner.lock();
        (m.wheel_x, m.wheel_y)
    }
}

impl MouseHandler for MouseState {
    fn process_button(&self, event: &MouseButtonEvent) {
        if event.button == 0 || event.button > 32 {
            return;
        }
        let bit = 1u32 << (event.button - 1);
        let mut m = self.inner.lock();
        m.x = event.x;
        m.y = event.y;
        if event.pressed {
            m.buttons |= bit;
        } else {
            m.buttons &= !bit;
        }
    }

    fn process_motion(&self, event: &MouseMotionEvent) {
        let mut m = self.inner.lock();
        m.x = event.x;
        m.y = event.y;
        m.buttons = event.buttons;
    }

    fn process_wheel(&self, event: &MouseWheelEvent) {
        // A flipped report carries inverted axis values.
        let (x, y) = if event.flipped {
            (-event.x, -event.y)
        } else {
            (event.x, event.y)
        };
        let mut m = self.inner.lock();
        m.wheel_x += x;
        m.wheel_y += y;
    }
}
