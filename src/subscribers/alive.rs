//! # Stateful subscriber that tracks tellers still on the floor.
//!
//! [`AliveTracker`] maintains an in-memory set of open teller names by
//! listening to [`EventKind::TellerReady`] and [`EventKind::TellerClosing`]
//! events. The [`Bank`](crate::Bank) consults it when the close-out
//! grace period expires to name the tellers that never closed.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscriber;

/// Tracks which tellers are currently open.
///
/// Thread-safe and cloneable; clones share the same internal state.
#[derive(Clone, Default)]
pub struct AliveTracker {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl AliveTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of tellers that opened but have not closed.
    pub async fn snapshot(&self) -> Vec<String> {
        let g = self.inner.lock().await;
        let mut names: Vec<String> = g.iter().cloned().collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl Subscriber for AliveTracker {
    async fn handle(&self, event: &Event) {
        let Some(id) = event.teller else { return };
        match event.kind {
            EventKind::TellerReady => {
                self.inner.lock().await.insert(format!("teller-{id}"));
            }
            EventKind::TellerClosing => {
                self.inner.lock().await.remove(&format!("teller-{id}"));
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "alive_tracker"
    }
}
