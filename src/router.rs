//! Event routing.
//!
//! Pure fan-out from a decoded event to the owning driver's sub-drivers.
//! The match is exhaustive, so adding an event shape without choosing a
//! destination fails to compile.

use crate::driver::DriverInstance;
use crate::event::InputEvent;

/// Deliver one decoded event to the matching sub-driver.
pub fn route(instance: &DriverInstance, event: &InputEvent) {
    match event {
        InputEvent::Key(ev) => instance.keyboard().process_key(ev),
        InputEvent::MouseButton(ev) => instance.mouse().process_button(ev),
        InputEvent::MouseMotion(ev) => instance.mouse().process_motion(ev),
        InputEvent::MouseWheel(ev) => instance.mouse().process_wheel(ev),
        InputEvent::JoyDevice(ev) => instance.joystick().process_device(ev),
        InputEvent::JoyAxis(ev) => instance.joystick().process_axis(ev),
        InputEvent::JoyBall(ev) => instance.joystick().process_ball(ev),
        InputEvent::JoyButton(ev) => instance.joystick().process_button(ev),
        InputEvent::JoyHat(ev) => instance.joystick().process_hat(ev),
        #[cfg(feature = "controller")]
        InputEvent::ControllerDevice(ev) => instance.gamepad().process_device(ev),
        #[cfg(feature = "controller")]
        InputEvent::ControllerAxis(ev) => instance.gamepad().process_axis(ev),
        #[cfg(feature = "controller")]
        InputEvent::ControllerButton(ev) => instance.gamepad().process_button(ev),
    }
}
