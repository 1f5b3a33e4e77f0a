//! # Shared floor state.
//!
//! [`FloorContext`] bundles everything more than one task touches: the three
//! capacity gates, the work queue, the served tally, and the event bus. One
//! `Arc<FloorContext>` is handed to every teller and customer at spawn time;
//! there are no ambient globals, which keeps ownership and test isolation
//! explicit.
//!
//! The tally and the queue are the only structures mutated concurrently
//! without a private handshake. The gates serialize admission to the
//! conceptual door/safe/manager resources, not in-memory data.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::Config;
use crate::events::{Bus, Event};
use crate::requests::CustomerRequest;
use crate::sync::{Gate, WorkQueue};

/// Everything the floor shares: gates, line, tally, bus.
#[derive(Debug)]
pub struct FloorContext {
    /// Front door: bounds customers inside the bank.
    pub door: Gate,
    /// Safe: bounds tellers inside concurrently.
    pub safe: Gate,
    /// Manager's office: bounds tellers asking for withdrawal permission.
    pub manager: Gate,
    /// The customer line, FIFO in arrival order.
    pub line: WorkQueue<Arc<CustomerRequest>>,

    bus: Bus,
    served: AtomicUsize,
    target: usize,
}

impl FloorContext {
    /// Builds the shared state for one run.
    pub fn new(cfg: &Config, bus: Bus) -> Arc<Self> {
        Arc::new(Self {
            door: Gate::new(cfg.door_limit),
            safe: Gate::new(cfg.safe_limit),
            manager: Gate::new(cfg.manager_limit),
            line: WorkQueue::new(),
            bus,
            served: AtomicUsize::new(0),
            target: cfg.customers as usize,
        })
    }

    /// Publishes a floor event.
    pub fn publish(&self, ev: Event) {
        self.bus.publish(ev);
    }

    /// Records one fully served customer and returns the new tally.
    ///
    /// Each customer contributes exactly once: the serving teller calls this
    /// after Completion, and only one teller ever serves a given request.
    pub fn record_served(&self) -> usize {
        self.served.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Customers served so far.
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }

    /// Total customers expected this run.
    pub fn target(&self) -> usize {
        self.target
    }

    /// True once the served tally has reached the target.
    pub fn is_closed(&self) -> bool {
        self.served() >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(customers: u64) -> Arc<FloorContext> {
        let cfg = Config {
            customers,
            ..Config::default()
        };
        FloorContext::new(&cfg, Bus::new(16))
    }

    #[test]
    fn tally_is_monotonic_and_reaches_target() {
        let ctx = ctx(3);
        assert!(!ctx.is_closed());
        assert_eq!(ctx.record_served(), 1);
        assert_eq!(ctx.record_served(), 2);
        assert!(!ctx.is_closed());
        assert_eq!(ctx.record_served(), 3);
        assert!(ctx.is_closed());
    }

    #[test]
    fn zero_target_is_closed_from_the_start() {
        assert!(ctx(0).is_closed());
    }

    #[test]
    fn gates_use_configured_limits() {
        let ctx = ctx(1);
        assert_eq!(ctx.door.limit(), 2);
        assert_eq!(ctx.safe.limit(), 2);
        assert_eq!(ctx.manager.limit(), 1);
    }
}
