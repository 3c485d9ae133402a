//! Default game controller sub-driver.

use std::collections::{HashMap, HashSet};

use parking_lot::Mutex;

use super::GamepadHandler;
use crate::event::{ControllerAxisEvent, ControllerButtonEvent, ControllerDeviceEvent};

/// State of one attached controller.
#[derive(Debug, Default, Clone)]
pub struct GamepadDevice {
    axes: HashMap<u8, i16>,
    buttons: HashSet<u8>,
}

impl GamepadDevice {
    pub fn axis(&self, axis: u8) -> Option<i16> {
        self.axes.get(&axis).copied()
    }

    pub fn is_button_pressed(&self, button: u8) -> bool {
        self.buttons.contains(&button)
    }
}

/// Controller handler tracking every attached device.
#[derive(Debug, Default)]
pub struct GamepadTable {
    devices: Mutex<HashMap<i32, GamepadDevice>>,
}

impl GamepadTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device_count(&self) -> usize {
        self.devices.lock().len()
    }

    pub fn device(&self, which: i32) -> Option<GamepadDevice> {
        self.devices.lock().get(&which).cloned()
    }
}

impl GamepadHandler for GamepadTable {
    fn process_device(&self, event: &ControllerDeviceEvent) {
        let mut devices = self.devices.lock();
        if event.added {
            devices.entry(event.which).or_default();
        } else {
            devices.remove(&event.which);
        }
    }

    fn process_axis(&self, event: &ControllerAxisEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            dev.axes.insert(event.axis, event.value);
        }
    }

    fn process_button(&self, event: &ControllerButtonEvent) {
        if let Some(dev) = self.devices.lock().get_mut(&event.which) {
            if event.pressed {
                dev.buttons.insert(event.button);
            } else {
                dev.buttons.remove(&event.button);
            }
        }
    }
}
