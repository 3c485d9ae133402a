//! Native event record layout.
//!
//! The native loop hands the watch callback a pointer to one tagged-union
//! event record. The discriminant values and per-kind field layouts here
//! must match the SDL2 event ABI exactly; the record is only valid for the
//! duration of one callback, so the decode step copies every field it needs
//! before returning.

/// Event discriminants understood by this crate (SDL2 values).
pub const EVENT_KEY_DOWN: u32 = 0x300;
pub const EVENT_KEY_UP: u32 = 0x301;
pub const EVENT_MOUSE_MOTION: u32 = 0x400;
pub const EVENT_MOUSE_BUTTON_DOWN: u32 = 0x401;
pub const EVENT_MOUSE_BUTTON_UP: u32 = 0x402;
pub const EVENT_MOUSE_WHEEL: u32 = 0x403;
pub const EVENT_JOY_AXIS_MOTION: u32 = 0x600;
pub const EVENT_JOY_BALL_MOTION: u32 = 0x601;
pub const EVENT_JOY_HAT_MOTION: u32 = 0x602;
pub const EVENT_JOY_BUTTON_DOWN: u32 = 0x603;
pub const EVENT_JOY_BUTTON_UP: u32 = 0x604;
pub const EVENT_JOY_DEVICE_ADDED: u32 = 0x605;
pub const EVENT_JOY_DEVICE_REMOVED: u32 = 0x606;
pub const EVENT_CONTROLLER_AXIS_MOTION: u32 = 0x650;
pub const EVENT_CONTROLLER_BUTTON_DOWN: u32 = 0x651;
pub const EVENT_CONTROLLER_BUTTON_UP: u32 = 0x652;
pub const EVENT_CONTROLLER_DEVICE_ADDED: u32 = 0x653;
pub const EVENT_CONTROLLER_DEVICE_REMOVED: u32 = 0x654;

/// `state` field values for key and button records.
pub const STATE_RELEASED: u8 = 0;
pub const STATE_PRESSED: u8 = 1;

/// `direction` field value for wheel records whose axes are inverted.
pub const WHEEL_FLIPPED: u32 = 1;

/// Keyboard event record (key down / key up) with the embedded keysym.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawKeyboardEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding: [u8; 2],
    pub scancode: i32,
    pub sym: i32,
    pub modifiers: u16,
    pub unused: u32,
}

/// Mouse motion record. `state` is the button bitmask held during the move.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMouseMotionEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Mouse button record (button down / button up).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMouseButtonEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding: u8,
    pub x: i32,
    pub y: i32,
}

/// Mouse wheel record.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMouseWheelEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub x: i32,
    pub y: i32,
    pub direction: u32,
}

/// Joystick axis motion record.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawJoyAxisEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub axis: u8,
    pub padding: [u8; 3],
    pub value: i16,
    pub padding2: u16,
}

/// Joystick trackball motion record.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawJoyBallEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub ball: u8,
    pub padding: [u8; 3],
    pub xrel: i16,
    pub yrel: i16,
}

/// Joystick hat motion record. `value` is a direction bitmask.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawJoyHatEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub hat: u8,
    pub value: u8,
    pub padding: [u8; 2],
}

/// Joystick button record (button down / button up).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawJoyButtonEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub button: u8,
    pub state: u8,
    pub padding: [u8; 2],
}

/// Joystick device record (added / removed).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawJoyDeviceEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
}

/// Game controller axis motion record.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawControllerAxisEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub axis: u8,
    pub padding: [u8; 3],
    pub value: i16,
    pub padding2: u16,
}

/// Game controller button record (button down / button up).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawControllerButtonEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
    pub button: u8,
    pub state: u8,
    pub padding: [u8; 2],
}

/// Game controller device record (added / removed).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RawControllerDeviceEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub which: i32,
}

/// The native tagged union. The first 4 bytes of every variant are the
/// discriminant; the trailing padding pins the size to the native 56 bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawEvent {
    pub kind: u32,
    pub key: RawKeyboardEvent,
    pub motion: RawMouseMotionEvent,
    pub button: RawMouseButtonEvent,
    pub wheel: RawMouseWheelEvent,
    pub jaxis: RawJoyAxisEvent,
    pub jball: RawJoyBallEvent,
    pub jhat: RawJoyHatEvent,
    pub jbutton: RawJoyButtonEvent,
    pub jdevice: RawJoyDeviceEvent,
    pub caxis: RawControllerAxisEvent,
    pub cbutton: RawControllerButtonEvent,
    pub cdevice: RawControllerDeviceEvent,
    pub padding: [u8; 56],
}

impl RawEvent {
    /// Discriminant of this record.
    pub fn kind(&self) -> u32 {
        // Every variant starts with the u32 discriminant.
        unsafe { self.kind }
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        RawEvent { padding: [0; 56] }
    }
}
