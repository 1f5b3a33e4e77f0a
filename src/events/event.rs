//! # Floor events emitted by tellers, customers, and the coordinator.
//!
//! The [`EventKind`] enum classifies every phase transition on the bank
//! floor across three categories:
//! - **Customer events**: arrival, door, queueing, handshake replies, leaving
//! - **Teller events**: pickup, handshake prompts, manager/safe visits, closing
//! - **Coordinator events**: bank closed, grace exceeded
//!
//! The [`Event`] struct carries optional metadata: teller id, customer id,
//! transaction kind, and a free-form reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. For a single customer the per-phase events are strictly
//! ordered by the handshake itself; `seq` additionally gives a total order
//! across customers for recorders that need one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::requests::Transaction;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of floor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Teller lifecycle ===
    /// Teller opened its window and is ready to serve.
    ///
    /// Sets: `teller`, `at`, `seq`
    TellerReady,

    /// Teller observed the served target and is closing for the day.
    ///
    /// Sets: `teller`, `at`, `seq`
    TellerClosing,

    // === Customer lifecycle ===
    /// Customer is on the way to the bank.
    ///
    /// Sets: `customer`, `transaction`, `at`, `seq`
    CustomerArrived,

    /// Customer is waiting at the door gate.
    ///
    /// Sets: `customer`, `at`, `seq`
    CustomerAtDoor,

    /// Customer passed the door gate and is inside.
    ///
    /// Sets: `customer`, `at`, `seq`
    CustomerEntered,

    /// Customer joined the line (request enqueued).
    ///
    /// Sets: `customer`, `at`, `seq`
    CustomerQueued,

    /// Customer acknowledged completion and left; door slot released.
    ///
    /// Sets: `customer`, `teller`, `at`, `seq`
    CustomerLeft,

    // === Handshake phases (strictly ordered per customer) ===
    /// Teller dequeued the request and recorded its id on it (Assignment).
    ///
    /// Sets: `teller`, `customer`, `at`, `seq`
    ServiceStarted,

    /// Customer read the assigned teller id and introduced itself (Introduction).
    ///
    /// Sets: `customer`, `teller`, `at`, `seq`
    CustomerIntroduced,

    /// Teller asked for the transaction.
    ///
    /// Sets: `teller`, `customer`, `at`, `seq`
    TransactionRequested,

    /// Customer stated the transaction kind.
    ///
    /// Sets: `customer`, `transaction`, `at`, `seq`
    TransactionStated,

    /// Teller went to the manager for withdrawal approval.
    ///
    /// Sets: `teller`, `at`, `seq`
    ManagerRequested,

    /// Teller is inside the manager's office asking for permission.
    ///
    /// Sets: `teller`, `at`, `seq`
    ManagerConsulting,

    /// Teller got the manager's permission (still inside; released next).
    ///
    /// Sets: `teller`, `at`, `seq`
    ManagerApproved,

    /// Teller entered the safe.
    ///
    /// Sets: `teller`, `at`, `seq`
    SafeEntered,

    /// Teller left the safe.
    ///
    /// Sets: `teller`, `at`, `seq`
    SafeLeft,

    /// Teller informed the customer the transaction is complete (Completion).
    ///
    /// Sets: `teller`, `customer`, `transaction`, `at`, `seq`
    TransactionComplete,

    // === Coordinator ===
    /// All customers served and all tellers closed.
    ///
    /// Sets: `at`, `seq`
    BankClosed,

    /// Tellers did not close within the grace period after the last customer.
    ///
    /// Sets: `reason` (still-open tellers), `at`, `seq`
    GraceExceeded,
}

/// Floor event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Teller id, if applicable.
    pub teller: Option<u32>,
    /// Customer id, if applicable.
    pub customer: Option<u64>,
    /// Transaction kind, if applicable.
    pub transaction: Option<Transaction>,
    /// Human-readable detail (grace diagnostics, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            teller: None,
            customer: None,
            transaction: None,
            reason: None,
        }
    }

    /// Attaches a teller id.
    #[inline]
    pub fn with_teller(mut self, id: u32) -> Self {
        self.teller = Some(id);
        self
    }

    /// Attaches a customer id.
    #[inline]
    pub fn with_customer(mut self, id: u64) -> Self {
        self.customer = Some(id);
        self
    }

    /// Attaches a transaction kind.
    #[inline]
    pub fn with_transaction(mut self, kind: Transaction) -> Self {
        self.transaction = Some(kind);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::now(EventKind::BankClosed);
        let b = Event::now(EventKind::BankClosed);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builders_set_fields() {
        let ev = Event::now(EventKind::ServiceStarted)
            .with_teller(2)
            .with_customer(17)
            .with_transaction(Transaction::Withdrawal);
        assert_eq!(ev.teller, Some(2));
        assert_eq!(ev.customer, Some(17));
        assert_eq!(ev.transaction, Some(Transaction::Withdrawal));
        assert!(ev.reason.is_none());
    }
}
