//! # Event subscribers for the bankfloor runtime.
//!
//! This module provides the [`Subscriber`] trait and built-in
//! implementations for handling events broadcast through the
//! [`Bus`](crate::events::Bus).
//!
//! ```text
//! Event flow:
//!   Teller/Customer ── publish(Event) ──► Bus ──► Bank listener
//!                                                    │
//!                                          Subscriber::handle(&Event)
//!                                               ┌────┴─────┬─────────┐
//!                                               ▼          ▼         ▼
//!                                           LogWriter  AliveTracker  custom
//! ```
//!
//! - **Passive subscribers** observe and react (narration, metrics).
//! - **Stateful subscribers** maintain state from events ([`AliveTracker`]).

mod alive;
mod log;
mod subscriber;

pub use alive::AliveTracker;
pub use log::LogWriter;
pub use subscriber::Subscriber;
