//! Default joystick sub-driver.
//!
//! Tracks per-device axis, trackball, button and hat state keyed by the
//! native instance id. Devices appear on an added notification and vanish
//! on a removed one; motion for a device that was never announced (or was
//! just unplugged) is dropped.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use super::JoystickHandler;
use crate::event::{JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent};

/// State of one attached joystick.
#[derive(Debug, Default, Clone)]
pub struct JoystickDevice {
    axes: HashMap<u8, i16>,
    balls: HashMap<u8, (i32, i32)>,
    buttons: HashSet<u8>,
    hats: HashMap<u8, u8>,
}

impl JoystickDevice {
    /// Last reported axis position, if the axis has ever moved.
    pub fn axis(&self, axis: u8) -> Option<i16> {
        self.axes.get(&axis).copied()
    }

    /// Accumulated trackball travel.
    pub fn ball(&self, ball: u8) -> Option<(i32, i32)> {
        self.balls.get(&ball).copied()
    }

    pub fn is_button_pressed(&self, button: u8) -> bool {
        self.buttons.contains(&button)
    }

    /// Last reported hat direction bitmask.
    pub fn hat(&self, hat: u8) -> Option<u8> {
        self.hats.get(&hat).copied()
    }
}

/// Joystick handler tracking every attached device.
#[derive(Debug, Default)]
pub struct JoystickTable {
    devices: Mutex<HashMap<i32, JoystickDevice>>,
}

impl JoystickTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device_count(&self) -> usize {
        self.devices.lock().len()
    }

    pub fn is_attached(&self, which: i32) -> bool {
        self.devices.lock().contains_key(&which)
    }

    /// Snapshot of one device's state.
    pub fn device(&self, which: i32) -> Option<JoystickDevice> {
        self.devices.lock().get(&which).cloned()
    }
}

impl JoystickHandler for JoystickTable {
    fn process_device(&self, event: &JoyDeviceEvent) {
        let mut devices = self.devices.lock();
        if event.added {
            devices.entry(event.which).or_default();
        } else {
            devices.remove(&event.which);
        }
    }

    fn process_axis(&self, event: &JoyAxisEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            dev.axes.insert(event.axis, event.value);
        }
    }

    fn process_ball(&self, event: &JoyBallEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            let travel = dev.balls.entry(event.ball).or_insert((0, 0));
            travel.0 += i32::from(event.xrel);
            travel.1 += i32::from(event.yrel);
        }
    }

    fn process_button(&self, event: &JoyButtonEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            if event.pressed {
                dev.buttons.insert(event.button);
            } else {
                dev.buttons.remove(&event.button);
            }
        }
    }

    fn process_hat(&self, event: &JoyHatEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            dev.hats.insert(event.hat, event.value);
        }
    }

    fn shutdown(&self) {
        self.devices.lock().clear();
    }
}
