//! Driver handle registry.
//!
//! The native event watch identifies its driver through an opaque userdata
//! pointer, not a Rust reference. The registry is the trust boundary that
//! turns that pointer back into a live driver: handles are allocated from a
//! monotonic counter, never reused, and resolved under a single lock so a
//! stale or forged userdata value can only miss, never alias another
//! driver.

use std::collections::HashMap;
use std::ffi::c_void;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use crate::driver::{DriverInstance, SubDrivers};

/// Opaque identity of one registered driver.
///
/// The numeric value round-trips through the native loop's `*mut c_void`
/// userdata slot unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverHandle(usize);

impl DriverHandle {
    /// Encode the handle for the native userdata slot.
    pub fn as_userdata(self) -> *mut c_void {
        self.0 as *mut c_void
    }

    /// Decode a handle from the native userdata slot.
    pub fn from_userdata(userdata: *mut c_void) -> Self {
        Self(userdata as usize)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for DriverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct RegistryInner {
    next_handle: usize,
    entries: HashMap<DriverHandle, Arc<DriverInstance>>,
}

/// Handle allocator and handle-to-driver map.
pub struct DriverRegistry {
    inner: Mutex<RegistryInner>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                next_handle: 0,
                entries: HashMap::new(),
            }),
        }
    }

    /// Allocate a fresh handle and publish a driver instance under it.
    ///
    /// The instance is constructed inside the lock so its handle is fixed
    /// before any other thread can observe it.
    pub fn register(&self, subs: SubDrivers) -> (DriverHandle, Arc<DriverInstance>) {
        let mut inner = self.inner.lock();
        let handle = DriverHandle(inner.next_handle);
        inner.next_handle += 1;
        let instance = Arc::new(DriverInstance::new(handle, subs));
        inner.entries.insert(handle, Arc::clone(&instance));
        (handle, instance)
    }

    /// Resolve a handle to its driver, if still registered.
    ///
    /// Returns a clone of the `Arc`, so a dispatch that resolved the handle
    /// keeps the instance alive even if it is unregistered mid-route.
    pub fn lookup(&self, handle: DriverHandle) -> Option<Arc<DriverInstance>> {
        self.inner.lock().entries.get(&handle).cloned()
    }

    /// Remove a handle. Removing an absent handle is a no-op, so disposal
    /// stays idempotent. Handles are never reallocated.
    pub fn unregister(&self, handle: DriverHandle) {
        self.inner.lock().entries.remove(&handle);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: LazyLock<Arc<DriverRegistry>> =
    LazyLock::new(|| Arc::new(DriverRegistry::new()));

/// The process-wide registry used by [`crate::lifecycle::InputDriver::connect`].
pub fn default_registry() -> Arc<DriverRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}
