//! Shared per-driver state.

use super::SubDrivers;
#[cfg(feature = "controller")]
use super::GamepadHandler;
use super::{JoystickHandler, KeyboardHandler, MouseHandler};
use crate::registry::DriverHandle;

/// One registered input driver: its handle plus the sub-drivers events are
/// routed to.
///
/// Instances are held behind `Arc` by the registry and by any dispatch in
/// flight, so routing can finish against a driver that was unregistered
/// mid-event.
pub struct DriverInstance {
    handle: DriverHandle,
    keyboard: Box<dyn KeyboardHandler>,
    mouse: Box<dyn MouseHandler>,
    joystick: Box<dyn JoystickHandler>,
    #[cfg(feature = "controller")]
    gamepad: Box<dyn GamepadHandler>,
}

impl DriverInstance {
    pub(crate) fn new(handle: DriverHandle, subs: SubDrivers) -> Self {
        Self {
            handle,
            keyboard: subs.keyboard,
            mouse: subs.mouse,
            joystick: subs.joystick,
            #[cfg(feature = "controller")]
            gamepad: subs.gamepad,
        }
    }

    pub fn handle(&self) -> DriverHandle {
        self.handle
    }

    pub fn keyboard(&self) -> &dyn KeyboardHandler {
        self.keyboard.as_ref()
    }

    pub fn mouse(&self) -> &dyn MouseHandler {
        self.mouse.as_ref()
    }

    pub fn joystick(&self) -> &dyn JoystickHandler {
        self.joystick.as_ref()
    }

    #[cfg(feature = "controller")]
    pub fn gamepad(&self) -> &dyn GamepadHandler {
        self.gamepad.as_ref()
    }
}
