//! Error types.

use thiserror::Error;

/// Failures reported by the native event-loop seam.
///
/// None of these are fatal to the dispatch core: a subsystem that fails to
/// come up leaves that capability degraded, and the lifecycle manager logs
/// the failure instead of propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A native input subsystem could not be brought up.
    #[error("failed to init {subsystem} subsystem: {message}")]
    SubsystemInit {
        subsystem: &'static str,
        message: String,
    },
}

impl InputError {
    /// Create a SubsystemInit error for the named subsystem.
    pub fn subsystem_init(subsystem: &'static str, message: impl Into<String>) -> Self {
        Self::SubsystemInit {
            subsystem,
            message: message.into(),
        }
    }
}
