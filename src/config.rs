//! # Global floor configuration.
//!
//! Provides [`Config`], centralized settings for the bank coordinator.
//!
//! ## Field semantics
//! - `tellers` / `customers`: pool size and served target for one run
//! - `door_limit` / `safe_limit` / `manager_limit`: gate capacities
//! - `arrival_spacing`: stagger between customer arrivals (a scheduling
//!   parameter, not a correctness requirement)
//! - `take_timeout`: bound on a teller's blocking dequeue, after which the
//!   teller re-checks the served tally; keep it short so close-out latency
//!   stays low even without the cancellation broadcast
//! - `manager_delay` / `safe_delay`: sampled hold times inside those gates
//! - `bus_capacity`: event bus ring buffer size (min 1; clamped by Bus)
//! - `grace`: how long the coordinator waits for tellers to close after the
//!   last customer before declaring the run stuck

use std::time::Duration;

use rand::Rng;

/// Global configuration for one bank-floor run.
///
/// All fields are public; [`Config::default`] is the reference scenario.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of teller workers in the pool.
    pub tellers: u32,
    /// Number of customers to spawn; also the served target for close-out.
    pub customers: u64,

    /// Concurrent-customer capacity of the front door.
    pub door_limit: usize,
    /// Concurrent-teller capacity of the safe.
    pub safe_limit: usize,
    /// Concurrent-teller capacity of the manager's office.
    pub manager_limit: usize,

    /// Delay between consecutive customer arrivals.
    pub arrival_spacing: Duration,
    /// Bound on a teller's blocking dequeue before re-checking the tally.
    pub take_timeout: Duration,

    /// Hold time inside the manager's office (withdrawals only).
    pub manager_delay: DelayRange,
    /// Hold time inside the safe (every transaction).
    pub safe_delay: DelayRange,

    /// Capacity of the event bus broadcast channel ring buffer.
    pub bus_capacity: usize,
    /// Maximum wait for tellers to close after the last customer leaves.
    pub grace: Duration,
}

impl Default for Config {
    /// Reference scenario:
    ///
    /// - `tellers = 3`, `customers = 50`
    /// - `door_limit = 2`, `safe_limit = 2`, `manager_limit = 1`
    /// - `arrival_spacing = 10ms`, `take_timeout = 25ms`
    /// - `manager_delay = 5..=30ms`, `safe_delay = 10..=50ms`
    /// - `bus_capacity = 1024`, `grace = 30s`
    fn default() -> Self {
        Self {
            tellers: 3,
            customers: 50,
            door_limit: 2,
            safe_limit: 2,
            manager_limit: 1,
            arrival_spacing: Duration::from_millis(10),
            take_timeout: Duration::from_millis(25),
            manager_delay: DelayRange::from_millis(5, 30),
            safe_delay: DelayRange::from_millis(10, 50),
            bus_capacity: 1024,
            grace: Duration::from_secs(30),
        }
    }
}

/// Inclusive duration range sampled once per gate visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayRange {
    /// Lower bound.
    pub min: Duration,
    /// Upper bound (inclusive).
    pub max: Duration,
}

impl DelayRange {
    /// Creates a range from millisecond bounds. `max` is raised to `min` if
    /// the bounds are inverted.
    pub fn from_millis(min: u64, max: u64) -> Self {
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(min.max(max)),
        }
    }

    /// Samples a uniformly random duration from the range.
    pub fn sample(&self) -> Duration {
        let lo = self.min.as_millis() as u64;
        let hi = self.max.as_millis() as u64;
        if lo >= hi {
            return self.min;
        }
        let mut rng = rand::rng();
        Duration::from_millis(rng.random_range(lo..=hi))
    }
}
