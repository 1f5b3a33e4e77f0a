//! Error types used by the bankfloor runtime.
//!
//! Normal operation has no error paths: every primitive on the floor is a
//! blocking synchronization step that, by construction (balanced
//! acquire/release pairs, balanced handshake signals), always eventually
//! proceeds. The one failure class worth surfacing is a protocol violation
//! bug — an unbalanced gate or handshake that leaves a task stuck forever.
//! That shows up as tellers failing to close after the last customer, which
//! the coordinator bounds with a grace period and reports as
//! [`RuntimeError::GraceExceeded`].

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by the bankfloor runtime.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Tellers did not close within the grace period after all customers
    /// finished; some tasks are stuck and the run is considered wedged.
    #[error("close-out grace {grace:?} exceeded; still open: {stuck:?}")]
    GraceExceeded {
        /// The configured grace duration.
        grace: Duration,
        /// Names of tellers that did not close in time.
        stuck: Vec<String>,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use bankfloor::RuntimeError;
    /// use std::time::Duration;
    ///
    /// let err = RuntimeError::GraceExceeded { grace: Duration::from_secs(5), stuck: vec![] };
    /// assert_eq!(err.as_label(), "runtime_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::GraceExceeded { .. } => "runtime_grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::GraceExceeded { grace, stuck } => {
                format!("grace exceeded after {grace:?}; stuck tellers={stuck:?}")
            }
        }
    }
}
