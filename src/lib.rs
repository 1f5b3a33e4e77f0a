//! # bankfloor
//!
//! **bankfloor** is a concurrency simulation of a bank floor: a fixed pool
//! of teller workers serves a stream of arriving customers under
//! capacity-limited resources and a strict per-customer handshake.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Customer 1 ... Customer M          (staggered arrivals)
//!      │              │
//!      ▼              ▼
//! ┌───────────────────────────────┐
//! │  door Gate (limit 2)          │   admission, not locking:
//! └──────┬────────────────────────┘   up to `limit` holders inside
//!        ▼
//! ┌───────────────────────────────┐
//! │  WorkQueue (FIFO line)        │   push = get in line
//! └──────┬────────────────────────┘   take = teller pickup (blocking, bounded)
//!        ▼
//!   Teller 1 ... Teller N             each loops: fetch → serve → fetch
//!        │
//!        │  per-customer Rendezvous (strict alternation):
//!        │    Assignment → Introduction → TransactionRequest
//!        │       → [manager Gate (1), withdrawals] → safe Gate (2)
//!        │       → Completion
//!        ▼
//!   FloorContext tally ── reaches target ──► CancellationToken broadcast
//!                                            (all tellers close)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Config ──► Bank::run() ──► FloorContext ──► tellers + customers (JoinSet)
//!                 │
//!                 ├── join customers, then join tellers within `grace`
//!                 └── Bus ──► subscriber listener ──► LogWriter / AliveTracker / custom
//! ```
//!
//! Narration is a [`Subscriber`] concern; the synchronization core never
//! depends on anyone observing the bus.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use bankfloor::{Bank, Config, LogWriter, Subscriber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bankfloor::RuntimeError> {
//!     let cfg = Config::default(); // 3 tellers, 50 customers
//!     let subs: Vec<Arc<dyn Subscriber>> = vec![Arc::new(LogWriter)];
//!     Bank::new(cfg, subs).run().await
//! }
//! ```

mod config;
mod core;
mod error;
mod requests;
mod sync;

pub mod events;
pub mod subscribers;

pub use config::{Config, DelayRange};
pub use crate::core::{Bank, FloorContext, Teller, run_customer};
pub use error::RuntimeError;
pub use events::{Bus, Event, EventKind};
pub use requests::{CustomerRequest, Rendezvous, Transaction};
pub use subscribers::{AliveTracker, LogWriter, Subscriber};
pub use sync::{Gate, GatePermit, WorkQueue};
