//! Shared synchronization primitives: capacity gates and the work queue.

mod gate;
mod queue;

pub use gate::{Gate, GatePermit};
pub use queue::WorkQueue;
