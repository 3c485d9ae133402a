//! Decoded input event payloads.
//!
//! [`InputEvent`] is the memory-safe representation of one native event:
//! a discriminant plus a kind-specific body, with every field copied out of
//! the native record. Unlike the record it was decoded from, a payload owns
//! all of its data and may outlive the callback that produced it.

pub mod decode;
pub mod raw;

pub use decode::decode;

/// One key state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub scancode: i32,
    pub sym: i32,
    pub modifiers: u16,
    pub pressed: bool,
    /// Key-repeat report for a key that is already held.
    pub repeat: bool,
}

/// One mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub which: u32,
    pub button: u8,
    pub pressed: bool,
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

/// Mouse movement with the button mask held during the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMotionEvent {
    pub which: u32,
    pub buttons: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Mouse wheel scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseWheelEvent {
    pub which: u32,
    pub x: i32,
    pub y: i32,
    /// The native source reported inverted axes for this scroll.
    pub flipped: bool,
}

/// Joystick hot-plug notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyDeviceEvent {
    pub which: i32,
    pub added: bool,
}

/// Joystick axis motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyAxisEvent {
    pub which: i32,
    pub axis: u8,
    pub value: i16,
}

/// Joystick trackball motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyBallEvent {
    pub which: i32,
    pub ball: u8,
    pub xrel: i16,
    pub yrel: i16,
}

/// Joystick button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyButtonEvent {
    pub which: i32,
    pub button: u8,
    pub pressed: bool,
}

/// Joystick hat motion. `value` is a direction bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyHatEvent {
    pub which: i32,
    pub hat: u8,
    pub value: u8,
}

/// Game controller hot-plug notification.
#[cfg(feature = "controller")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerDeviceEvent {
    pub which: i32,
    pub added: bool,
}

/// Game controller axis motion.
#[cfg(feature = "controller")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerAxisEvent {
    pub which: i32,
    pub axis: u8,
    pub value: i16,
}

/// Game controller button press or release.
#[cfg(feature = "controller")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerButtonEvent {
    pub which: i32,
    pub button: u8,
    pub pressed: bool,
}

/// One decoded native input event.
///
/// Press/release pairs of the native vocabulary collapse into one variant
/// carrying a `pressed` flag, since they feed the same sub-driver entry
/// point either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    MouseButton(MouseButtonEvent),
    MouseMotion(MouseMotionEvent),
    MouseWheel(MouseWheelEvent),
    JoyDevice(JoyDeviceEvent),
    JoyAxis(JoyAxisEvent),
    JoyBall(JoyBallEvent),
    JoyButton(JoyButtonEvent),
    JoyHat(JoyHatEvent),
    #[cfg(feature = "controller")]
    ControllerDevice(ControllerDeviceEvent),
    #[cfg(feature = "controller")]
    ControllerAxis(ControllerAxisEvent),
    #[cfg(feature = "controller")]
    ControllerButton(ControllerButtonEvent),
}
