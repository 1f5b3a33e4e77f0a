//! # Rendezvous: the per-customer two-party handshake channel.
//!
//! One customer task and the teller that claims its request interleave
//! through a fixed sequence of phases, each phase one directed signal and
//! one acknowledgment:
//!
//! ```text
//!   teller                         customer
//!     │  assign id, proceed ─────►   │   (Assignment)
//!     │  ◄───── introduced           │   (Introduction)
//!     │  asks transaction ─────►     │
//!     │  ◄───── states kind          │   (Transaction request)
//!     │  [manager? safe]             │   (Service, teller only)
//!     │  done ─────►                 │   (Completion)
//!     │  ◄───── leaving              │
//! ```
//!
//! Two one-directional [`Notify`] signals carry the handshake, one per
//! direction of control. A single bidirectional signal would let a side
//! re-acquire the permit it just released before its peer wakes; separate
//! directions make that impossible while preserving the exact alternation.
//!
//! `Notify` stores one permit when nobody is waiting, so a signal sent
//! before the peer starts waiting is never lost. Strict alternation means
//! there is never more than one outstanding signal per direction.

use tokio::sync::Notify;

/// Private two-party synchronization channel, scoped to one customer's
/// full service window.
#[derive(Debug, Default)]
pub struct Rendezvous {
    to_customer: Notify,
    to_teller: Notify,
}

impl Rendezvous {
    /// Creates a fresh channel with no pending signals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Teller hands control to the customer.
    pub fn signal_customer(&self) {
        self.to_customer.notify_one();
    }

    /// Customer hands control back to the teller.
    pub fn signal_teller(&self) {
        self.to_teller.notify_one();
    }

    /// Customer waits for the teller's signal.
    pub async fn await_teller(&self) {
        self.to_customer.notified().await;
    }

    /// Teller waits for the customer's acknowledgment.
    pub async fn await_customer(&self) {
        self.to_teller.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn signal_before_wait_is_not_lost() {
        let rdv = Rendezvous::new();
        rdv.signal_customer();
        // The permit was stored; this must complete immediately.
        tokio::time::timeout(Duration::from_millis(50), rdv.await_teller())
            .await
            .expect("stored signal was lost");
    }

    #[tokio::test]
    async fn directions_are_independent() {
        let rdv = Rendezvous::new();
        rdv.signal_customer();
        // A customer-bound signal must not satisfy a teller-side wait.
        let res = tokio::time::timeout(Duration::from_millis(20), rdv.await_customer()).await;
        assert!(res.is_err(), "signal crossed directions");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn full_handshake_alternates() {
        let rdv = Arc::new(Rendezvous::new());

        let teller = {
            let rdv = rdv.clone();
            tokio::spawn(async move {
                rdv.signal_customer(); // assignment
                rdv.await_customer().await; // introduced
                rdv.signal_customer(); // asks
                rdv.await_customer().await; // stated
                rdv.signal_customer(); // done
                rdv.await_customer().await; // leaving
            })
        };
        let customer = {
            let rdv = rdv.clone();
            tokio::spawn(async move {
                rdv.await_teller().await;
                rdv.signal_teller();
                rdv.await_teller().await;
                rdv.signal_teller();
                rdv.await_teller().await;
                rdv.signal_teller();
            })
        };

        tokio::time::timeout(Duration::from_secs(2), async {
            teller.await.expect("teller side panicked");
            customer.await.expect("customer side panicked");
        })
        .await
        .expect("handshake deadlocked");
    }
}
