//! Shared fakes for unit tests.

use std::sync::Arc;

use parking_lot::Mutex;

#[cfg(feature = "controller")]
use crate::driver::GamepadHandler;
use crate::driver::{JoystickHandler, KeyboardHandler, MouseHandler, SubDrivers};
use crate::error::InputError;
#[cfg(feature = "controller")]
use crate::event::{ControllerAxisEvent, ControllerButtonEvent, ControllerDeviceEvent};
use crate::event::raw::{self, RawEvent, RawKeyboardEvent};
use crate::event::{
    JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent, KeyEvent,
    MouseButtonEvent, MouseMotionEvent, MouseWheelEvent,
};
use crate::native::NativeEventLoop;
use crate::registry::{DriverHandle, DriverRegistry};

/// Ordered record of handler invocations.
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn push(&self, call: &str) {
        self.calls.lock().push(call.to_string());
    }

    /// Drain and return the calls recorded so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock())
    }
}

pub struct RecordingKeyboard(pub CallLog);

impl KeyboardHandler for RecordingKeyboard {
    fn process_key(&self, _event: &KeyEvent) {
        self.0.push("keyboard.key");
    }
}

pub struct RecordingMouse(pub CallLog);

impl MouseHandler for RecordingMouse {
    fn process_button(&self, _event: &MouseButtonEvent) {
        self.0.push("mouse.button");
    }

    fn process_motion(&self, _event: &MouseMotionEvent) {
        self.0.push("mouse.motion");
    }

    fn process_wheel(&self, _event: &MouseWheelEvent) {
        self.0.push("mouse.wheel");
    }
}

pub struct RecordingJoystick(pub CallLog);

impl JoystickHandler for RecordingJoystick {
    fn process_device(&self, _event: &JoyDeviceEvent) {
        self.0.push("joystick.device");
    }

    fn process_axis(&self, _event: &JoyAxisEvent) {
        self.0.push("joystick.axis");
    }

    fn process_ball(&self, _event: &JoyBallEvent) {
        self.0.push("joystick.ball");
    }

    fn process_button(&self, _event: &JoyButtonEvent) {
        self.0.push("joystick.button");
    }

    fn process_hat(&self, _event: &JoyHatEvent) {
        self.0.push("joystick.hat");
    }

    fn shutdown(&self) {
        self.0.push("joystick.shutdown");
    }
}

#[cfg(feature = "controller")]
pub struct RecordingGamepad(pub CallLog);

#[cfg(feature = "controller")]
impl GamepadHandler for RecordingGamepad {
    fn process_device(&self, _event: &ControllerDeviceEvent) {
        self.0.push("gamepad.device");
    }

    fn process_axis(&self, _event: &ControllerAxisEvent) {
        self.0.push("gamepad.axis");
    }

    fn process_button(&self, _event: &ControllerButtonEvent) {
        self.0.push("gamepad.button");
    }
}

/// A full recording sub-driver set sharing one call log.
pub fn recording_subdrivers() -> (SubDrivers, CallLog) {
    let log = CallLog::default();
    let subs = SubDrivers {
        keyboard: Box::new(RecordingKeyboard(log.clone())),
        mouse: Box::new(RecordingMouse(log.clone())),
        joystick: Box::new(RecordingJoystick(log.clone())),
        #[cfg(feature = "controller")]
        gamepad: Box::new(RecordingGamepad(log.clone())),
    };
    (subs, log)
}

/// Keyboard handler that panics on every event.
pub struct PanickingKeyboard;

impl KeyboardHandler for PanickingKeyboard {
    fn process_key(&self, _event: &KeyEvent) {
        panic!("handler failure");
    }
}

/// A raw key-down event for the given keycode.
pub fn raw_key_down(sym: i32) -> RawEvent {
    RawEvent {
        key: RawKeyboardEvent {
            kind: raw::EVENT_KEY_DOWN,
            state: raw::STATE_PRESSED,
            sym,
            ..Default::default()
        },
    }
}

/// Native loop fake that records calls and probes registry state at the
/// moments the watch is added and removed.
pub struct RecordingEventLoop {
    registry: Arc<DriverRegistry>,
    calls: Mutex<Vec<String>>,
    registered_at_add: Mutex<Option<bool>>,
    registered_at_remove: Mutex<Option<bool>>,
    fail_joystick_init: bool,
}

impl RecordingEventLoop {
    pub fn watching(registry: Arc<DriverRegistry>) -> Self {
        Self {
            registry,
            calls: Mutex::new(Vec::new()),
            registered_at_add: Mutex::new(None),
            registered_at_remove: Mutex::new(None),
            fail_joystick_init: false,
        }
    }

    pub fn with_failing_joystick_init(mut self) -> Self {
        self.fail_joystick_init = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Was the handle resolvable when `add_event_watch` ran?
    pub fn handle_registered_at_add_watch(&self) -> Option<bool> {
        *self.registered_at_add.lock()
    }

    /// Was the handle resolvable when `remove_event_watch` ran?
    pub fn handle_registered_at_remove_watch(&self) -> Option<bool> {
        *self.registered_at_remove.lock()
    }
}

impl NativeEventLoop for RecordingEventLoop {
    fn set_joystick_events(&self, enabled: bool) {
        self.calls
            .lock()
            .push(format!("set_joystick_events({enabled})"));
    }

    #[cfg(feature = "controller")]
    fn set_controller_events(&self, enabled: bool) {
        self.calls
            .lock()
            .push(format!("set_controller_events({enabled})"));
    }

    fn init_joystick_subsystem(&self) -> Result<(), InputError> {
        self.calls.lock().push("init_joystick_subsystem".into());
        if self.fail_joystick_init {
            return Err(InputError::subsystem_init("joystick", "device unavailable"));
        }
        Ok(())
    }

    #[cfg(feature = "controller")]
    fn init_controller_subsystem(&self) -> Result<(), InputError> {
        self.calls.lock().push("init_controller_subsystem".into());
        Ok(())
    }

    fn add_event_watch(&self, handle: DriverHandle) {
        self.calls.lock().push("add_event_watch".into());
        *self.registered_at_add.lock() = Some(self.registry.lookup(handle).is_some());
    }

    fn remove_event_watch(&self, handle: DriverHandle) {
        self.calls.lock().push("remove_event_watch".into());
        *self.registered_at_remove.lock() = Some(self.registry.lookup(handle).is_some());
    }
}
