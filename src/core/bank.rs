//! # Bank: coordinates the teller pool, customer arrivals, and close-out.
//!
//! The [`Bank`] owns the event bus and the subscriber list, builds the
//! shared [`FloorContext`], and drives the lifecycle:
//!
//! ```text
//! Bank::run()
//!   ├─ FloorContext::new(cfg)            gates, line, tally
//!   ├─ subscriber_listener()             Bus ─► Subscriber::handle fan-out
//!   ├─ spawn N tellers    (JoinSet)      sharing one close-out token
//!   ├─ spawn M customers  (JoinSet)      staggered by cfg.arrival_spacing
//!   ├─ join all customers                every customer reached Done
//!   └─ join tellers within cfg.grace
//!        ├─ Ok        → publish BankClosed
//!        └─ timeout   → publish GraceExceeded, Err(RuntimeError::GraceExceeded)
//! ```
//!
//! Close-out is a cancellation broadcast, not a relay: the teller that
//! records the final customer cancels the shared token and every blocked
//! dequeue observes it at once. The bounded dequeue timeout stays as a
//! fallback recheck, so even a missed wake cannot wedge the pool.

use std::sync::Arc;

use rand::Rng;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::context::FloorContext;
use crate::core::customer::run_customer;
use crate::core::teller::Teller;
use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};
use crate::requests::Transaction;
use crate::subscribers::{AliveTracker, Subscriber};

/// Coordinates one full bank-floor run.
pub struct Bank {
    /// Global floor configuration.
    pub cfg: Config,
    /// Event bus shared with every task on the floor.
    pub bus: Bus,

    subs: Vec<Arc<dyn Subscriber>>,
    alive: AliveTracker,
}

impl Bank {
    /// Creates a bank with the given config and subscribers.
    ///
    /// An [`AliveTracker`] is always installed alongside the provided
    /// subscribers; it feeds the stuck-teller report on grace timeout.
    pub fn new(cfg: Config, mut subscribers: Vec<Arc<dyn Subscriber>>) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        let alive = AliveTracker::new();
        subscribers.push(Arc::new(alive.clone()));
        Self {
            bus,
            subs: subscribers,
            alive,
            cfg,
        }
    }

    /// Runs the reference scenario: each customer's transaction kind is
    /// sampled uniformly at random.
    pub async fn run(&self) -> Result<(), RuntimeError> {
        let transactions = (0..self.cfg.customers)
            .map(|_| {
                if rand::rng().random_range(0..2) == 0 {
                    Transaction::Deposit
                } else {
                    Transaction::Withdrawal
                }
            })
            .collect();
        self.run_with_transactions(transactions).await
    }

    /// Runs one full day with a fixed transaction per customer.
    ///
    /// `transactions.len()` overrides `cfg.customers` as the served target,
    /// so tests can pin both the count and the kinds.
    pub async fn run_with_transactions(
        &self,
        transactions: Vec<Transaction>,
    ) -> Result<(), RuntimeError> {
        let cfg = Config {
            customers: transactions.len() as u64,
            ..self.cfg.clone()
        };
        let ctx = FloorContext::new(&cfg, self.bus.clone());
        let closing = CancellationToken::new();
        self.subscriber_listener();

        let mut tellers = JoinSet::new();
        for id in 0..cfg.tellers {
            let teller = Teller::new(id, ctx.clone(), cfg.clone());
            // Tellers share one token: whichever records the final customer
            // cancels it for the others, so clones rather than child tokens.
            tellers.spawn(teller.run(closing.clone()));
        }

        let mut customers = JoinSet::new();
        for (id, transaction) in transactions.into_iter().enumerate() {
            customers.spawn(run_customer(ctx.clone(), id as u64, transaction));
            tokio::time::sleep(cfg.arrival_spacing).await;
        }
        while customers.join_next().await.is_some() {}

        self.join_tellers_with_grace(&mut tellers).await?;
        self.bus.publish(Event::now(EventKind::BankClosed));
        Ok(())
    }

    /// Subscribes to the bus and forwards events to every subscriber.
    ///
    /// The listener exits when the bus sender side is dropped with the Bank.
    fn subscriber_listener(&self) {
        let mut rx = self.bus.subscribe();
        let subs = self.subs.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => {
                        for sub in &subs {
                            sub.handle(&ev).await;
                        }
                    }
                    // Slow subscribers skip missed items but keep listening.
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }

    /// Waits for every teller to close within the configured grace period.
    ///
    /// All customers are done by the time this runs, so a teller that does
    /// not close promptly is stuck in a broken handshake or gate; the error
    /// names it via the alive tracker.
    async fn join_tellers_with_grace(
        &self,
        tellers: &mut JoinSet<()>,
    ) -> Result<(), RuntimeError> {
        let grace = self.cfg.grace;
        let done = async { while tellers.join_next().await.is_some() {} };

        match tokio::time::timeout(grace, done).await {
            Ok(_) => Ok(()),
            Err(_) => {
                let stuck = self.alive.snapshot().await;
                self.bus.publish(
                    Event::now(EventKind::GraceExceeded).with_reason(format!("{stuck:?}")),
                );
                Err(RuntimeError::GraceExceeded { grace, stuck })
            }
        }
    }
}
