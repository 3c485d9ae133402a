//! Copy-out decoding of native event records.

use super::raw::{self, RawEvent};
use super::{
    InputEvent, JoyAxisEvent, JoyBallEvent, JoyButtonEvent, JoyDeviceEvent, JoyHatEvent, KeyEvent,
    MouseButtonEvent, MouseMotionEvent, MouseWheelEvent,
};
#[cfg(feature = "controller")]
use super::{ControllerAxisEvent, ControllerButtonEvent, ControllerDeviceEvent};

/// Decode one native event record into an owned payload.
///
/// Returns `None` for a null record and for any discriminant outside the
/// known set: the native source's event vocabulary may exceed what this
/// version understands, and such events are dropped rather than failed.
///
/// # Safety
///
/// A non-null `event` must point to a readable, properly aligned record of
/// at least `size_of::<RawEvent>()` bytes laid out per [`raw`]. The record
/// only needs to stay valid for the duration of this call; the returned
/// payload borrows nothing from it.
pub unsafe fn decode(event: *const RawEvent) -> Option<InputEvent> {
    if event.is_null() {
        return None;
    }
    // Copy the whole record up front; the native source may reuse the
    // backing memory as soon as the callback returns.
    let ev = *event;

    Some(match ev.kind() {
        raw::EVENT_KEY_DOWN | raw::EVENT_KEY_UP => {
            let k = ev.key;
            InputEvent::Key(KeyEvent {
                scancode: k.scancode,
                sym: k.sym,
                modifiers: k.modifiers,
                pressed: k.kind == raw::EVENT_KEY_DOWN,
                repeat: k.repeat != 0,
            })
        }
        raw::EVENT_MOUSE_BUTTON_DOWN | raw::EVENT_MOUSE_BUTTON_UP => {
            let b = ev.button;
            InputEvent::MouseButton(MouseButtonEvent {
                which: b.which,
                button: b.button,
                pressed: b.kind == raw::EVENT_MOUSE_BUTTON_DOWN,
                clicks: b.clicks,
                x: b.x,
                y: b.y,
            })
        }
        raw::EVENT_MOUSE_MOTION => {
            let m = ev.motion;
            InputEvent::MouseMotion(MouseMotionEvent {
                which: m.which,
                buttons: m.state,
                x: m.x,
                y: m.y,
                xrel: m.xrel,
                yrel: m.yrel,
            })
        }
        raw::EVENT_MOUSE_WHEEL => {
            let w = ev.wheel;
            InputEvent::MouseWheel(MouseWheelEvent {
                which: w.which,
                x: w.x,
                y: w.y,
                flipped: w.direction == raw::WHEEL_FLIPPED,
            })
        }
        raw::EVENT_JOY_DEVICE_ADDED | raw::EVENT_JOY_DEVICE_REMOVED => {
            let d = ev.jdevice;
            InputEvent::JoyDevice(JoyDeviceEvent {
                which: d.which,
                added: d.kind == raw::EVENT_JOY_DEVICE_ADDED,
            })
        }
        raw::EVENT_JOY_AXIS_MOTION => {
            let a = ev.jaxis;
            InputEvent::JoyAxis(JoyAxisEvent {
                which: a.which,
                axis: a.axis,
                value: a.value,
            })
        }
        raw::EVENT_JOY_BALL_MOTION => {
            let b = ev.jball;
            InputEvent::JoyBall(JoyBallEvent {
                which: b.which,
                ball: b.ball,
                xrel: b.xrel,
                yrel: b.yrel,
            })
        }
        raw::EVENT_JOY_BUTTON_DOWN | raw::EVENT_JOY_BUTTON_UP => {
            let b = ev.jbutton;
            InputEvent::JoyButton(JoyButtonEvent {
                which: b.which,
                button: b.button,
                pressed: b.kind == raw::EVENT_JOY_BUTTON_DOWN,
            })
        }
        raw::EVENT_JOY_HAT_MOTION => {
            let h = ev.jhat;
            InputEvent::JoyHat(JoyHatEvent {
                which: h.which,
                hat: h.hat,
                value: h.value,
            })
        }
        #[cfg(feature = "controller")]
        raw::EVENT_CONTROLLER_DEVICE_ADDED | raw::EVENT_CONTROLLER_DEVICE_REMOVED => {
            let d = ev.cdevice;
            InputEvent::ControllerDevice(ControllerDeviceEvent {
                which: d.which,
                added: d.kind == raw::EVENT_CONTROLLER_DEVICE_ADDED,
            })
        }
        #[cfg(feature = "controller")]
        raw::EVENT_CONTROLLER_AXIS_MOTION => {
            let a = ev.caxis;
            InputEvent::ControllerAxis(ControllerAxisEvent {
                which: a.which,
                axis: a.axis,
                value: a.value,
            })
        }
        #[cfg(feature = "controller")]
        raw::EVENT_CONTROLLER_BUTTON_DOWN | raw::EVENT_CONTROLLER_BUTTON_UP => {
            let b = ev.cbutton;
            InputEvent::ControllerButton(ControllerButtonEvent {
                which: b.which,
                button: b.button,
                pressed: b.kind == raw::EVENT_CONTROLLER_BUTTON_DOWN,
            })
        }
        _ => return None,
    })
}
