//! # Core subscriber trait.
//!
//! `Subscriber` is the extension point for plugging custom event handlers
//! into the floor runtime: narration, metrics, recorders for tests. All
//! subscribers are driven by a single listener task spawned by the
//! [`Bank`](crate::Bank); none of the synchronization depends on them.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for floor-event subscribers.
///
/// Called from the coordinator's listener task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscriber: Send + Sync + 'static {
    /// Handle a single event.
    async fn handle(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
