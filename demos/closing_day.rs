//! Runs the reference scenario (3 tellers, 50 customers) with stdout
//! narration, then a reduced day (1 teller, 3 withdrawals).
//!
//! ```sh
//! cargo run --example closing_day
//! ```

use std::sync::Arc;
use std::time::Duration;

use bankfloor::{Bank, Config, LogWriter, RuntimeError, Subscriber, Transaction};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), RuntimeError> {
    let cfg = Config::default();
    let subs: Vec<Arc<dyn Subscriber>> = vec![Arc::new(LogWriter)];
    Bank::new(cfg, subs).run().await?;

    println!("--- reduced day ---");
    let reduced = Config {
        tellers: 1,
        grace: Duration::from_secs(5),
        ..Config::default()
    };
    let subs: Vec<Arc<dyn Subscriber>> = vec![Arc::new(LogWriter)];
    Bank::new(reduced, subs)
        .run_with_transactions(vec![Transaction::Withdrawal; 3])
        .await
}
