//! # Capacity gate: bounded admission to a conceptual resource.
//!
//! [`Gate`] wraps a [`tokio::sync::Semaphore`] with a fixed concurrent-holder
//! limit. It is an admission controller, not a lock: up to `limit` holders
//! may be inside at once (door = 2, safe = 2, manager = 1 in the reference
//! scenario).
//!
//! ## Contract
//! - [`Gate::enter`] blocks until fewer than `limit` holders are inside,
//!   then admits the caller. It cannot fail, only wait.
//! - The returned [`GatePermit`] releases the slot on drop, on every exit
//!   path. Holding it across `.await` points is the intended use.
//! - [`Gate::held`] exposes the current holder count for instrumentation;
//!   it never exceeds [`Gate::limit`].

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Counting-admission primitive bounding concurrent holders of a resource.
#[derive(Debug)]
pub struct Gate {
    sem: Arc<Semaphore>,
    limit: usize,
}

impl Gate {
    /// Creates a gate admitting at most `limit` concurrent holders.
    ///
    /// `limit` is clamped to a minimum of 1; a zero-capacity gate would
    /// block every caller forever.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            sem: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    /// Waits for a free slot and enters the gate.
    ///
    /// The slot is held until the returned permit is dropped.
    pub async fn enter(&self) -> GatePermit {
        match self.sem.clone().acquire_owned().await {
            Ok(permit) => GatePermit { _permit: permit },
            // The semaphore is never closed for the lifetime of the gate.
            Err(_) => unreachable!("gate semaphore closed"),
        }
    }

    /// The configured holder limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of holders currently inside.
    pub fn held(&self) -> usize {
        self.limit - self.sem.available_permits()
    }
}

/// RAII admission slot; dropping it releases the gate.
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}
