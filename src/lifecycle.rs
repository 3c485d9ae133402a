//! Driver lifecycle.
//!
//! [`InputDriver`] owns the connect/close sequence around one registered
//! driver instance. Construction order matters: the handle must be in the
//! registry before the event watch is installed, or the watch could fire
//! against a handle it cannot resolve. Teardown runs the mirror order.

use std::sync::Arc;

use crate::driver::SubDrivers;
#[cfg(feature = "controller")]
use crate::driver::GamepadHandler;
use crate::driver::{DriverInstance, JoystickHandler, KeyboardHandler, MouseHandler};
use crate::native::NativeEventLoop;
use crate::registry::{default_registry, DriverHandle, DriverRegistry};

/// A connected input driver.
///
/// Call [`close`](Self::close) when done. Dropping a driver without closing
/// it still tears everything down, but is treated as a leak and logged.
pub struct InputDriver {
    handle: DriverHandle,
    instance: Arc<DriverInstance>,
    registry: Arc<DriverRegistry>,
    native: Arc<dyn NativeEventLoop>,
    disposed: bool,
}

impl InputDriver {
    /// Connect a driver with the default sub-drivers on the process-wide
    /// registry.
    pub fn connect(native: Arc<dyn NativeEventLoop>) -> Self {
        Self::connect_with(default_registry(), native, SubDrivers::default())
    }

    /// Connect a driver with explicit registry and sub-drivers.
    ///
    /// Joystick (and controller) subsystem init failures are logged and
    /// swallowed; keyboard and mouse dispatch still works without them.
    pub fn connect_with(
        registry: Arc<DriverRegistry>,
        native: Arc<dyn NativeEventLoop>,
        subs: SubDrivers,
    ) -> Self {
        native.set_joystick_events(true);
        #[cfg(feature = "controller")]
        native.set_controller_events(true);

        let (handle, instance) = registry.register(subs);
        native.add_event_watch(handle);

        if let Err(err) = native.init_joystick_subsystem() {
            log::warn!("input driver {handle}: {err}");
        }
        #[cfg(feature = "controller")]
        if let Err(err) = native.init_controller_subsystem() {
            log::warn!("input driver {handle}: {err}");
        }

        Self {
            handle,
            instance,
            registry,
            native,
            disposed: false,
        }
    }

    pub fn handle(&self) -> DriverHandle {
        self.handle
    }

    pub fn keyboard(&self) -> &dyn KeyboardHandler {
        self.instance.keyboard()
    }

    pub fn mouse(&self) -> &dyn MouseHandler {
        self.instance.mouse()
    }

    pub fn joystick(&self) -> &dyn JoystickHandler {
        self.instance.joystick()
    }

    #[cfg(feature = "controller")]
    pub fn gamepad(&self) -> &dyn GamepadHandler {
        self.instance.gamepad()
    }

    /// The shared instance events are routed to.
    pub fn instance(&self) -> &Arc<DriverInstance> {
        &self.instance
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tear the driver down. Safe to call more than once.
    pub fn close(&mut self) {
        self.dispose(true);
    }

    fn dispose(&mut self, explicit: bool) {
        if self.disposed {
            return;
        }
        if !explicit {
            log::warn!(
                "InputDriver {} leaked, did you forget to call close()?",
                self.handle
            );
        }
        // Joystick resources go first, while the watch is still installed,
        // then the watch, then the handle. Events racing this sequence
        // either resolve the handle and route, or miss and drop.
        self.instance.joystick().shutdown();
        self.native.remove_event_watch(self.handle);
        self.registry.unregister(self.handle);
        self.disposed = true;
    }
}

impl Drop for InputDriver {
    fn drop(&mut self) {
        self.dispose(false);
    }
}
