//! # Teller worker: dequeue, handshake, gates, repeat.
//!
//! A [`Teller`] loops `Idle → FetchingCustomer → Serving → Idle` until the
//! served tally reaches the target, then closes permanently.
//!
//! ## Fetching
//! The dequeue races the cancellation token inside a `select!` and is
//! additionally bounded by `take_timeout`. A timeout means "no work right
//! now, maybe more is coming": the teller re-checks the tally and retries.
//! The teller that records the final customer cancels the shared token, so
//! every other teller blocked in a dequeue unblocks promptly instead of
//! waiting out its timeout.
//!
//! ## Serving
//! The teller drives the active side of the handshake (see
//! [`Rendezvous`](crate::requests::Rendezvous)); between the transaction
//! statement and Completion it visits the manager (withdrawals only) and
//! the safe, holding each gate across a sampled delay and releasing it by
//! permit drop before moving on.

use std::sync::Arc;

use tokio::select;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::context::FloorContext;
use crate::events::{Event, EventKind};
use crate::requests::{CustomerRequest, Transaction};

/// One worker of the fixed teller pool.
pub struct Teller {
    id: u32,
    ctx: Arc<FloorContext>,
    cfg: Config,
}

impl Teller {
    /// Creates a teller with the given id over the shared floor state.
    pub fn new(id: u32, ctx: Arc<FloorContext>, cfg: Config) -> Self {
        Self { id, ctx, cfg }
    }

    /// Runs the worker until the floor closes.
    ///
    /// `closing` is the shared close-out token; it is cancelled by whichever
    /// teller records the final customer.
    pub async fn run(self, closing: CancellationToken) {
        self.ctx
            .publish(Event::now(EventKind::TellerReady).with_teller(self.id));

        loop {
            if self.ctx.is_closed() {
                // Cover the race where the last server cancels between our
                // check and the select below.
                closing.cancel();
                break;
            }

            let fetched = select! {
                req = self.ctx.line.take(self.cfg.take_timeout) => req,
                _ = closing.cancelled() => {
                    // Drain whatever is already in line; the token only
                    // fires once the tally hits target, so this is empty in
                    // practice, but a popped request must never be dropped.
                    self.ctx.line.pop()
                }
            };

            match fetched {
                Some(req) => {
                    self.serve(&req).await;
                    if self.ctx.record_served() >= self.ctx.target() {
                        closing.cancel();
                    }
                }
                // Timed out or close-out; loop re-checks the tally.
                None => continue,
            }
        }

        self.ctx
            .publish(Event::now(EventKind::TellerClosing).with_teller(self.id));
    }

    /// Serves one customer through the full handshake.
    async fn serve(&self, req: &Arc<CustomerRequest>) {
        let rdv = req.rendezvous();
        let customer = req.id();

        // Assignment: record our id on the request, then hand control over.
        req.assign_teller(self.id);
        self.ctx.publish(
            Event::now(EventKind::ServiceStarted)
                .with_teller(self.id)
                .with_customer(customer),
        );
        rdv.signal_customer();

        // Introduction.
        rdv.await_customer().await;

        // Transaction request; the kind is read off the shared request.
        self.ctx.publish(
            Event::now(EventKind::TransactionRequested)
                .with_teller(self.id)
                .with_customer(customer),
        );
        rdv.signal_customer();
        rdv.await_customer().await;

        // Service: manager for withdrawals, then the safe for everyone.
        if req.transaction() == Transaction::Withdrawal {
            self.visit_manager().await;
        }
        self.visit_safe().await;

        // Completion.
        self.ctx.publish(
            Event::now(EventKind::TransactionComplete)
                .with_teller(self.id)
                .with_customer(customer)
                .with_transaction(req.transaction()),
        );
        rdv.signal_customer();
        rdv.await_customer().await;
    }

    async fn visit_manager(&self) {
        self.ctx
            .publish(Event::now(EventKind::ManagerRequested).with_teller(self.id));
        let _slot = self.ctx.manager.enter().await;
        self.ctx
            .publish(Event::now(EventKind::ManagerConsulting).with_teller(self.id));
        tokio::time::sleep(self.cfg.manager_delay.sample()).await;
        self.ctx
            .publish(Event::now(EventKind::ManagerApproved).with_teller(self.id));
    }

    async fn visit_safe(&self) {
        let _slot = self.ctx.safe.enter().await;
        self.ctx
            .publish(Event::now(EventKind::SafeEntered).with_teller(self.id));
        tokio::time::sleep(self.cfg.safe_delay.sample()).await;
        self.ctx
            .publish(Event::now(EventKind::SafeLeft).with_teller(self.id));
    }
}
