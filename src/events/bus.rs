//! # Event bus for broadcasting floor events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that provides
//! non-blocking event publishing from multiple sources (tellers, customers,
//! the coordinator).
//!
//! ## Architecture
//! ```text
//! Publishers (many):                  Subscribers (many):
//!   Teller 1  ──┐
//!   Teller N  ──┼──────► Bus ───────► subscriber_listener ────► Subscriber::handle
//!   Customer M ──┤  (broadcast chan)    (in Bank)
//!   Bank       ──┘
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are lost if there are no active subscribers at send time.
//!
//! Narration is an observer concern; none of the floor synchronization
//! depends on anyone receiving these events.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for floor events.
///
/// Thin wrapper over [`tokio::sync::broadcast`] that provides
/// `publish`/`subscribe` API. Multiple publishers can publish concurrently;
/// subscribers receive clones of each event.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// Capacity is shared across all receivers; the minimum is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// If there are no receivers, the event is dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events.
    ///
    /// A receiver only gets events sent after it subscribes; slow receivers
    /// observe `RecvError::Lagged(n)` and skip over missed items.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Publishes a borrowed event by cloning it.
    pub fn publish_ref(&self, ev: &Event) {
        let _ = self.tx.send(ev.clone());
    }
}
