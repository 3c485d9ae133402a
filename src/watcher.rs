//! Event watch callback.
//!
//! `input_event_watch` is the function a native backend installs on its
//! event loop. It runs on whatever thread pumps events, inside foreign
//! code, so it must never unwind and never signal failure: every path out
//! of it returns [`EVENT_WATCH_CONTINUE`] so the native loop keeps
//! delivering the event to other watchers.

use std::ffi::{c_int, c_void};
use std::panic::{self, AssertUnwindSafe};

use crate::event::decode;
use crate::event::raw::RawEvent;
use crate::registry::{default_registry, DriverHandle, DriverRegistry};
use crate::router;

/// Watch callback return value telling the native loop to keep the event.
pub const EVENT_WATCH_CONTINUE: c_int = 0;

/// Decode, resolve and route one raw event against a registry.
///
/// Undecodable events and events for handles no longer registered are
/// dropped. A stale handle is a normal shutdown-order artifact, not an
/// error.
///
/// # Safety
///
/// `event` must be null or point to a valid [`RawEvent`].
pub unsafe fn watch_event(
    registry: &DriverRegistry,
    handle: DriverHandle,
    event: *const RawEvent,
) {
    let Some(decoded) = decode(event) else {
        return;
    };
    let Some(instance) = registry.lookup(handle) else {
        log::trace!("dropping event for unregistered driver {handle}");
        return;
    };
    router::route(&instance, &decoded);
}

/// Event watch entry point for native backends.
///
/// `userdata` carries the driver handle as produced by
/// [`DriverHandle::as_userdata`]. Panics from handler code are caught and
/// logged; nothing observable escapes to the caller.
///
/// # Safety
///
/// `event` must be null or point to a valid [`RawEvent`].
pub unsafe extern "C" fn input_event_watch(userdata: *mut c_void, event: *const c_void) -> c_int {
    let handle = DriverHandle::from_userdata(userdata);
    let registry = default_registry();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        watch_event(&registry, handle, event as *const RawEvent);
    }));
    if outcome.is_err() {
        log::error!("input event watch for driver {handle} panicked");
    }
    EVENT_WATCH_CONTINUE
}
