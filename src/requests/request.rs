//! # Customer request: the record shared between one customer and one teller.
//!
//! A [`CustomerRequest`] is created by the customer on arrival, handed to
//! exactly one teller through the work queue (the queue pop is the ownership
//! hand-off — no two tellers can dequeue the same request), and discarded
//! once the handshake completes. It is a fixed-shape record: constructed
//! once, never restructured.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::rendezvous::Rendezvous;

/// Kind of transaction a customer wants to run.
///
/// Withdrawals additionally require the manager's permission before the
/// teller may visit the safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit,
    Withdrawal,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::Deposit => f.write_str("Deposit"),
            Transaction::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// One customer's pending service request.
///
/// The customer task keeps one `Arc` handle; the queue carries the other to
/// the serving teller. `teller` is written exactly once, by the teller that
/// dequeues the request, before the first handshake signal.
#[derive(Debug)]
pub struct CustomerRequest {
    id: u64,
    transaction: Transaction,
    teller: OnceLock<u32>,
    rendezvous: Rendezvous,
}

impl CustomerRequest {
    /// Creates a request for the given customer and transaction kind.
    pub fn new(id: u64, transaction: Transaction) -> Arc<Self> {
        Arc::new(Self {
            id,
            transaction,
            teller: OnceLock::new(),
            rendezvous: Rendezvous::new(),
        })
    }

    /// The arriving customer's id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The transaction the customer wants to run.
    pub fn transaction(&self) -> Transaction {
        self.transaction
    }

    /// Records the serving teller's id. Called once, by that teller, before
    /// the Assignment signal; later calls are ignored.
    pub fn assign_teller(&self, teller: u32) {
        let _ = self.teller.set(teller);
    }

    /// The assigned teller id, once Assignment has happened.
    pub fn assigned_teller(&self) -> Option<u32> {
        self.teller.get().copied()
    }

    /// The handshake channel shared by the two parties.
    pub fn rendezvous(&self) -> &Rendezvous {
        &self.rendezvous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teller_is_assigned_exactly_once() {
        let req = CustomerRequest::new(7, Transaction::Deposit);
        assert_eq!(req.assigned_teller(), None);
        req.assign_teller(1);
        req.assign_teller(2);
        assert_eq!(req.assigned_teller(), Some(1));
    }

    #[test]
    fn transaction_kind_is_readable_by_both_sides() {
        let req = CustomerRequest::new(3, Transaction::Withdrawal);
        let teller_side = req.clone();
        assert_eq!(teller_side.transaction(), Transaction::Withdrawal);
        assert_eq!(req.id(), 3);
        assert_eq!(format!("{}", req.transaction()), "Withdrawal");
    }
}
