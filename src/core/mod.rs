//! Floor core: shared state, the two task kinds, and the coordinator.
//!
//! Internal modules:
//! - [`context`]: one shared-state bundle passed to every task;
//! - [`teller`]: the worker loop and serve state machine;
//! - [`customer`]: one customer's visit, arrival to departure;
//! - [`bank`]: spawns both pools and drives close-out.

mod bank;
mod context;
mod customer;
mod teller;

pub use bank::Bank;
pub use context::FloorContext;
pub use customer::run_customer;
pub use teller::Teller;
