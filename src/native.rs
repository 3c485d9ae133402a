//! Native event-loop seam.
//!
//! The crate never pumps events itself; it plugs into whatever loop the
//! platform layer runs. A backend implements [`NativeEventLoop`] over the
//! real windowing library, installing [`crate::watcher::input_event_watch`]
//! with [`crate::registry::DriverHandle::as_userdata`] as the callback
//! userdata when asked to add a watch.

use crate::error::InputError;
use crate::registry::DriverHandle;

pub trait NativeEventLoop: Send + Sync {
    /// Enable or disable delivery of joystick events by the native loop.
    fn set_joystick_events(&self, enabled: bool);

    /// Enable or disable delivery of game controller events.
    #[cfg(feature = "controller")]
    fn set_controller_events(&self, enabled: bool);

    /// Bring up the native joystick subsystem.
    fn init_joystick_subsystem(&self) -> Result<(), InputError>;

    /// Bring up the native game controller subsystem.
    #[cfg(feature = "controller")]
    fn init_controller_subsystem(&self) -> Result<(), InputError>;

    /// Install the event watch callback for this driver.
    fn add_event_watch(&self, handle: DriverHandle);

    /// Remove the event watch callback for this driver.
    fn remove_event_watch(&self, handle: DriverHandle);
}

/// Backend that ignores every call. Useful for embedders that feed events
/// in directly, and for tests.
#[derive(Debug, Default)]
pub struct NullEventLoop;

impl NativeEventLoop for NullEventLoop {
    fn set_joystick_events(&self, _enabled: bool) {}

    #[cfg(feature = "controller")]
    fn set_controller_events(&self, _enabled: bool) {}

    fn init_joystick_subsystem(&self) -> Result<(), InputError> {
        Ok(())
    }

    #[cfg(feature = "controller")]
    fn init_controller_subsystem(&self) -> Result<(), InputError> {
        Ok(())
    }

    fn add_event_watch(&self, _handle: DriverHandle) {}

    fn remove_event_watch(&self, _handle: DriverHandle) {}
}
