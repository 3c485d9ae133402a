//! Input event dispatch core.
//!
//! Bridges a native event loop's watch callback to per-category input
//! handlers. Control flow: the native loop invokes
//! [`watcher::input_event_watch`] with a raw event and a handle encoded as
//! userdata; the event is decoded into an [`event::InputEvent`], the handle
//! resolved through the [`registry::DriverRegistry`], and the payload
//! routed to the owning driver's sub-drivers.
//!
//! [`lifecycle::InputDriver`] owns setup and teardown around one registered
//! driver.

pub mod driver;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod native;
pub mod registry;
pub mod router;
pub mod watcher;

#[cfg(test)]
pub(crate) mod testutil;

pub use driver::{
    DriverInstance, JoystickHandler, JoystickTable, KeyboardHandler, KeyboardState, MouseHandler,
    MouseState, SubDrivers,
};
pub use error::InputError;
pub use event::InputEvent;
pub use lifecycle::InputDriver;
pub use native::{NativeEventLoop, NullEventLoop};
pub use registry::{default_registry, DriverHandle, DriverRegistry};
pub use router::route;
pub use watcher::{input_event_watch, EVENT_WATCH_CONTINUE};

#[cfg(feature = "controller")]
pub use driver::{GamepadHandler, GamepadTable};
