//! # Simple narration subscriber for debugging and demos.
//!
//! [`LogWriter`] prints the bank-floor narration to stdout, one line per
//! event. This is primarily useful for development, debugging, and the
//! `closing_day` demo.
//!
//! ## Output format
//! ```text
//! Teller 0 is ready to serve.
//! Customer 1 is going to the bank.
//! Customer 1 has entered the bank.
//! Teller 0 is serving Customer 1.
//! Teller 0 is going to the manager.
//! ...
//! The bank is now closed.
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscriber;

/// Stdout narration subscriber.
///
/// Not intended for production use; implement a custom [`Subscriber`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscriber for LogWriter {
    async fn handle(&self, e: &Event) {
        let teller = e.teller.unwrap_or_default();
        let customer = e.customer.unwrap_or_default();
        match e.kind {
            EventKind::TellerReady => {
                println!("Teller {teller} is ready to serve.");
            }
            EventKind::TellerClosing => {
                println!("Teller {teller} is closing for the day.");
            }
            EventKind::CustomerArrived => {
                println!("Customer {customer} is going to the bank.");
            }
            EventKind::CustomerAtDoor => {
                println!("Customer {customer} is waiting to enter the bank.");
            }
            EventKind::CustomerEntered => {
                println!("Customer {customer} has entered the bank.");
            }
            EventKind::CustomerQueued => {
                println!("Customer {customer} is getting in line.");
            }
            EventKind::ServiceStarted => {
                println!("Teller {teller} is serving Customer {customer}.");
            }
            EventKind::CustomerIntroduced => {
                println!("Customer {customer} introduces itself to Teller {teller}.");
            }
            EventKind::TransactionRequested => {
                println!("Teller {teller} asks Customer {customer} for the transaction.");
            }
            EventKind::TransactionStated => {
                if let Some(tx) = e.transaction {
                    println!("Customer {customer} asks for a {tx} transaction.");
                }
            }
            EventKind::ManagerRequested => {
                println!("Teller {teller} is going to the manager.");
            }
            EventKind::ManagerConsulting => {
                println!("Teller {teller} is getting the manager's permission.");
            }
            EventKind::ManagerApproved => {
                println!("Teller {teller} got the manager's permission.");
            }
            EventKind::SafeEntered => {
                println!("Teller {teller} is in the safe.");
            }
            EventKind::SafeLeft => {
                println!("Teller {teller} is leaving the safe.");
            }
            EventKind::TransactionComplete => {
                println!("Teller {teller} informs Customer {customer} the transaction is complete.");
            }
            EventKind::CustomerLeft => {
                println!("Customer {customer} thanks Teller {teller} and leaves the bank.");
            }
            EventKind::BankClosed => {
                println!("The bank is now closed.");
            }
            EventKind::GraceExceeded => {
                println!("The bank failed to close: {:?}", e.reason);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
