//! # Customer task: door, line, passive handshake, leave.
//!
//! One arriving customer runs `Arriving → EnteringDoor → InLine →
//! AwaitingAssignment → Introducing → StatingTransaction →
//! AwaitingCompletion → Leaving`. The customer is the passive side of the
//! handshake: it waits for each teller-initiated signal and acknowledges it.
//!
//! The door slot is held as a [`GatePermit`](crate::sync::GatePermit) for
//! the whole visit and released by drop when the task returns, on every
//! exit path.

use std::sync::Arc;

use crate::core::context::FloorContext;
use crate::events::{Event, EventKind};
use crate::requests::{CustomerRequest, Transaction};

/// Runs one customer's visit from arrival to departure.
pub async fn run_customer(ctx: Arc<FloorContext>, id: u64, transaction: Transaction) {
    ctx.publish(
        Event::now(EventKind::CustomerArrived)
            .with_customer(id)
            .with_transaction(transaction),
    );

    // EnteringDoor: blocks while the bank is at capacity.
    ctx.publish(Event::now(EventKind::CustomerAtDoor).with_customer(id));
    let door_slot = ctx.door.enter().await;
    ctx.publish(Event::now(EventKind::CustomerEntered).with_customer(id));

    // InLine: the queue push hands the request to exactly one future teller.
    let req = CustomerRequest::new(id, transaction);
    ctx.line.push(req.clone());
    ctx.publish(Event::now(EventKind::CustomerQueued).with_customer(id));

    let rdv = req.rendezvous();

    // AwaitingAssignment: the teller recorded its id before signalling.
    rdv.await_teller().await;
    let teller = req.assigned_teller().unwrap_or_default();
    ctx.publish(
        Event::now(EventKind::CustomerIntroduced)
            .with_customer(id)
            .with_teller(teller),
    );
    rdv.signal_teller();

    // StatingTransaction.
    rdv.await_teller().await;
    ctx.publish(
        Event::now(EventKind::TransactionStated)
            .with_customer(id)
            .with_transaction(transaction),
    );
    rdv.signal_teller();

    // AwaitingCompletion.
    rdv.await_teller().await;
    ctx.publish(
        Event::now(EventKind::CustomerLeft)
            .with_customer(id)
            .with_teller(teller),
    );
    rdv.signal_teller();

    // Leaving: free the door slot.
    drop(door_slot);
}
