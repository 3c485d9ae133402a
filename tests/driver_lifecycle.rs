//! End-to-end driver lifecycle: connect, dispatch through the native watch
//! callback, close, and verify post-close dispatch is inert.

use std::ffi::c_void;
use std::sync::Arc;

use parking_lot::Mutex;
use serial_test::serial;

use input_bridge::event::raw::{self, RawEvent, RawKeyboardEvent, RawMouseButtonEvent};
use input_bridge::event::KeyEvent;
use input_bridge::{
    default_registry, input_event_watch, InputDriver, KeyboardHandler, NullEventLoop, SubDrivers,
    EVENT_WATCH_CONTINUE,
};

struct CountingKeyboard {
    syms: Mutex<Vec<i32>>,
}

impl CountingKeyboard {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            syms: Mutex::new(Vec::new()),
        })
    }
}

struct SharedKeyboard(Arc<CountingKeyboard>);

impl KeyboardHandler for SharedKeyboard {
    fn process_key(&self, event: &KeyEvent) {
        self.0.syms.lock().push(event.sym);
    }
}

fn key_down(sym: i32) -> RawEvent {
    RawEvent {
        key: RawKeyboardEvent {
            kind: raw::EVENT_KEY_DOWN,
            state: raw::STATE_PRESSED,
            sym,
            ..Default::default()
        },
    }
}

unsafe fn dispatch(driver: &InputDriver, event: &RawEvent) -> i32 {
    input_event_watch(
        driver.handle().as_userdata(),
        event as *const RawEvent as *const c_void,
    )
}

#[test]
#[serial]
fn test_full_lifecycle_dispatch_and_close() {
    let keyboard = CountingKeyboard::new();
    let subs = SubDrivers {
        keyboard: Box::new(SharedKeyboard(Arc::clone(&keyboard))),
        ..SubDrivers::default()
    };
    let mut driver = InputDriver::connect_with(
        default_registry(),
        Arc::new(NullEventLoop),
        subs,
    );
    let handle = driver.handle();

    let ev = key_down(97);
    let rc = unsafe { dispatch(&driver, &ev) };
    assert_eq!(rc, EVENT_WATCH_CONTINUE);
    assert_eq!(*keyboard.syms.lock(), vec![97]);

    driver.close();
    assert!(driver.is_disposed());
    assert!(default_registry().lookup(handle).is_none());

    // Stale dispatch after close: accepted and dropped.
    let rc = unsafe { dispatch(&driver, &ev) };
    assert_eq!(rc, EVENT_WATCH_CONTINUE);
    assert_eq!(*keyboard.syms.lock(), vec![97]);

    // Closing again is a no-op.
    driver.close();
}

#[test]
#[serial]
fn test_two_drivers_dispatch_independently() {
    let kb_a = CountingKeyboard::new();
    let kb_b = CountingKeyboard::new();

    let mut a = InputDriver::connect_with(
        default_registry(),
        Arc::new(NullEventLoop),
        SubDrivers {
            keyboard: Box::new(SharedKeyboard(Arc::clone(&kb_a))),
            ..SubDrivers::default()
        },
    );
    let mut b = InputDriver::connect_with(
        default_registry(),
        Arc::new(NullEventLoop),
        SubDrivers {
            keyboard: Box::new(SharedKeyboard(Arc::clone(&kb_b))),
            ..SubDrivers::default()
        },
    );
    assert_ne!(a.handle(), b.handle());

    let ev = key_down(13);
    unsafe {
        dispatch(&a, &ev);
        dispatch(&b, &ev);
        dispatch(&a, &ev);
    }
    assert_eq!(kb_a.syms.lock().len(), 2);
    assert_eq!(kb_b.syms.lock().len(), 1);

    // Closing one driver leaves the other dispatchable.
    a.close();
    unsafe { dispatch(&b, &ev) };
    assert_eq!(kb_a.syms.lock().len(), 2);
    assert_eq!(kb_b.syms.lock().len(), 2);
    b.close();
}

#[test]
#[serial]
fn test_default_subdrivers_track_mouse_through_callback() {
    let mut driver = InputDriver::connect(Arc::new(NullEventLoop));

    let ev = RawEvent {
        button: RawMouseButtonEvent {
            kind: raw::EVENT_MOUSE_BUTTON_DOWN,
            button: 1,
            state: raw::STATE_PRESSED,
            clicks: 1,
            x: 42,
            y: 17,
            ..Default::default()
        },
    };
    let rc = unsafe { dispatch(&driver, &ev) };
    assert_eq!(rc, EVENT_WATCH_CONTINUE);

    driver.close();
}
