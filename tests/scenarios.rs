//! End-to-end floor scenarios: conservation, gate capacity, handshake
//! alternation, FIFO pickup, and liveness.
//!
//! Each test subscribes a raw broadcast receiver before the run and drains
//! the buffered events afterwards; the bus capacity in the test config is
//! sized so nothing is dropped.

use std::sync::Arc;
use std::time::Duration;

use bankfloor::{Bank, Config, DelayRange, Event, EventKind, Subscriber, Transaction};

fn quick_config(tellers: u32) -> Config {
    Config {
        tellers,
        arrival_spacing: Duration::from_millis(1),
        take_timeout: Duration::from_millis(10),
        manager_delay: DelayRange::from_millis(1, 3),
        safe_delay: DelayRange::from_millis(1, 3),
        bus_capacity: 16_384,
        grace: Duration::from_secs(10),
        ..Config::default()
    }
}

fn no_subscribers() -> Vec<Arc<dyn Subscriber>> {
    Vec::new()
}

/// Runs a day with fixed transactions and returns every published event.
async fn run_and_record(cfg: Config, transactions: Vec<Transaction>) -> Vec<Event> {
    let bank = Bank::new(cfg, no_subscribers());
    let mut rx = bank.bus.subscribe();

    tokio::time::timeout(
        Duration::from_secs(60),
        bank.run_with_transactions(transactions),
    )
    .await
    .expect("run did not terminate")
    .expect("run failed");

    let mut events = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        events.push(ev);
    }
    events
}

fn count(events: &[Event], kind: EventKind) -> usize {
    events.iter().filter(|e| e.kind == kind).count()
}

/// Peak number of tellers simultaneously between `enter` and `exit` events,
/// in bus publish order. Both events are published while the gate is held,
/// so this never overstates occupancy.
fn peak_occupancy(events: &[Event], enter: EventKind, exit: EventKind) -> usize {
    let mut inside = 0usize;
    let mut peak = 0usize;
    for ev in events {
        if ev.kind == enter {
            inside += 1;
            peak = peak.max(inside);
        } else if ev.kind == exit {
            inside = inside.saturating_sub(1);
        }
    }
    peak
}

#[tokio::test(flavor = "multi_thread")]
async fn reduced_scenario_one_teller_three_withdrawals() {
    let events = run_and_record(quick_config(1), vec![Transaction::Withdrawal; 3]).await;

    // Conservation: every customer served, nobody skipped or double-counted.
    assert_eq!(count(&events, EventKind::TransactionComplete), 3);
    assert_eq!(count(&events, EventKind::CustomerLeft), 3);
    assert_eq!(count(&events, EventKind::TellerClosing), 1);
    assert_eq!(count(&events, EventKind::BankClosed), 1);

    // Every withdrawal consulted the manager, and never two at once.
    assert_eq!(count(&events, EventKind::ManagerConsulting), 3);
    assert!(
        peak_occupancy(&events, EventKind::ManagerConsulting, EventKind::ManagerApproved) <= 1
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn reference_scenario_three_tellers_fifty_customers() {
    let transactions: Vec<Transaction> = (0..50)
        .map(|i| {
            if i % 2 == 0 {
                Transaction::Deposit
            } else {
                Transaction::Withdrawal
            }
        })
        .collect();
    let events = run_and_record(quick_config(3), transactions).await;

    assert_eq!(count(&events, EventKind::TransactionComplete), 50);
    assert_eq!(count(&events, EventKind::CustomerLeft), 50);
    assert_eq!(count(&events, EventKind::TellerClosing), 3);

    // Gate limits: safe ≤ 2, manager ≤ 1, observed in publish order.
    assert!(peak_occupancy(&events, EventKind::SafeEntered, EventKind::SafeLeft) <= 2);
    assert!(
        peak_occupancy(&events, EventKind::ManagerConsulting, EventKind::ManagerApproved) <= 1
    );
    // Only the 25 withdrawals visited the manager.
    assert_eq!(count(&events, EventKind::ManagerConsulting), 25);
}

#[tokio::test(flavor = "multi_thread")]
async fn handshake_alternates_per_customer() {
    let events = run_and_record(
        quick_config(3),
        vec![
            Transaction::Withdrawal,
            Transaction::Deposit,
            Transaction::Withdrawal,
            Transaction::Deposit,
            Transaction::Deposit,
        ],
    )
    .await;

    let phases = [
        EventKind::ServiceStarted,
        EventKind::CustomerIntroduced,
        EventKind::TransactionRequested,
        EventKind::TransactionStated,
        EventKind::TransactionComplete,
        EventKind::CustomerLeft,
    ];

    for customer in 0..5u64 {
        let observed: Vec<EventKind> = events
            .iter()
            .filter(|e| e.customer == Some(customer) && phases.contains(&e.kind))
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            observed, phases,
            "customer {customer}: phases repeated, skipped, or reordered"
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn single_teller_picks_up_in_arrival_order() {
    // One teller and spaced arrivals: pickup order must match queue order.
    let cfg = Config {
        arrival_spacing: Duration::from_millis(5),
        ..quick_config(1)
    };
    let events = run_and_record(cfg, vec![Transaction::Deposit; 6]).await;

    let queued: Vec<u64> = events
        .iter()
        .filter(|e| e.kind == EventKind::CustomerQueued)
        .filter_map(|e| e.customer)
        .collect();
    let picked: Vec<u64> = events
        .iter()
        .filter(|e| e.kind == EventKind::ServiceStarted)
        .filter_map(|e| e.customer)
        .collect();
    assert_eq!(queued.len(), 6);
    assert_eq!(queued, picked, "pickup order diverged from arrival order");
}

#[tokio::test(flavor = "multi_thread")]
async fn liveness_one_teller_five_hundred_customers() {
    let cfg = Config {
        tellers: 1,
        arrival_spacing: Duration::ZERO,
        take_timeout: Duration::from_millis(5),
        manager_delay: DelayRange::from_millis(0, 0),
        safe_delay: DelayRange::from_millis(0, 0),
        bus_capacity: 1,
        grace: Duration::from_secs(30),
        ..Config::default()
    };
    let bank = Bank::new(cfg, no_subscribers());
    let transactions: Vec<Transaction> = (0..500)
        .map(|i| {
            if i % 3 == 0 {
                Transaction::Withdrawal
            } else {
                Transaction::Deposit
            }
        })
        .collect();

    tokio::time::timeout(Duration::from_secs(120), bank.run_with_transactions(transactions))
        .await
        .expect("run wedged: termination protocol failed")
        .expect("run failed");
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_customers_closes_immediately() {
    let bank = Bank::new(quick_config(3), no_subscribers());
    let mut rx = bank.bus.subscribe();

    tokio::time::timeout(Duration::from_secs(5), bank.run_with_transactions(Vec::new()))
        .await
        .expect("tellers did not close on an empty day")
        .expect("run failed");

    let mut events = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        events.push(ev);
    }
    assert_eq!(count(&events, EventKind::TellerClosing), 3);
    assert_eq!(count(&events, EventKind::TransactionComplete), 0);
}
