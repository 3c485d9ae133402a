//! Input sub-drivers.
//!
//! Each input category has one consumption trait with a `process_*`
//! operation per body shape. The event router is the only dispatch-path
//! caller of these operations, and it may invoke them from any thread the
//! native loop runs callbacks on, so every handler is `Send + Sync` and
//! takes `&self`.
//!
//! The default implementations track the observable device state behind
//! short-lived locks; embedders with their own input stacks can supply any
//! other implementation through [`SubDrivers`].

pub mod instance;
pub mod joystick;
pub mod keyboard;
pub mod mouse;

#[cfg(feature = "controller")]
pub mod gamepad;

pub use instance::DriverInstance;
pub use joystick::JoystickTable;
pub use keyboard::KeyboardState;
pub use mouse::MouseState;

#[cfg(feature = "controller")]
pub use gamepad::GamepadTable;

#[cfg(feature = "controller")]
use crate::event::{ControllerAxisEvent, ControllerButtonEvent, ControllerDeviceEvent};
use crate::event::{
    JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent, KeyEvent,
    MouseButtonEvent, MouseMotionEvent, MouseWheelEvent,
};

/// Consumer of key state changes.
pub trait KeyboardHandler: Send + Sync {
    fn process_key(&self, event: &KeyEvent);
}

/// Consumer of mouse button, motion and wheel events.
pub trait MouseHandler: Send + Sync {
    fn process_button(&self, event: &MouseButtonEvent);
    fn process_motion(&self, event: &MouseMotionEvent);
    fn process_wheel(&self, event: &MouseWheelEvent);
}

/// Consumer of joystick events.
pub trait JoystickHandler: Send + Sync {
    fn process_device(&self, event: &JoyDeviceEvent);
    fn process_axis(&self, event: &JoyAxisEvent);
    fn process_ball(&self, event: &JoyBallEvent);
    fn process_button(&self, event: &JoyButtonEvent);
    fn process_hat(&self, event: &JoyHatEvent);

    /// Release any native resources the handler owns. Called exactly once,
    /// at the start of disposal, while the event watch is still installed.
    fn shutdown(&self) {}
}

/// Consumer of game controller events.
#[cfg(feature = "controller")]
pub trait GamepadHandler: Send + Sync {
    fn process_device(&self, event: &ControllerDeviceEvent);
    fn process_axis(&self, event: &ControllerAxisEvent);
    fn process_button(&self, event: &ControllerButtonEvent);
}

/// The sub-driver set owned by one driver instance.
pub struct SubDrivers {
    pub keyboard: Box<dyn KeyboardHandler>,
    pub mouse: Box<dyn MouseHandler>,
    pub joystick: Box<dyn JoystickHandler>,
    #[cfg(feature = "controller")]
    pub gamepad: Box<dyn GamepadHandler>,
}

impl Default for SubDrivers {
    fn default() -> Self {
        Self {
            keyboard: Box::new(KeyboardState::new()),
            mouse: Box::new(MouseState::new()),
            joystick: Box::new(JoystickTable::new()),
            #[cfg(feature = "controller")]
            gamepad: Box::new(GamepadTable::new()),
        }
    }
}
