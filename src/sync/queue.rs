//! # Work queue: unbounded FIFO with a blocking, bounded-timeout dequeue.
//!
//! [`WorkQueue`] is the shared line between customers and the teller pool.
//! `push` never blocks; `take` suspends the caller on a [`Notify`] until an
//! item arrives or the timeout elapses. There is no busy-polling: a waiting
//! teller consumes no CPU between wake-ups.
//!
//! ## Lost-wakeup discipline
//! A taker re-checks the deque *after* creating its `notified()` future, so
//! a push that lands between the check and the wait still stores a permit
//! and wakes the taker. `notify_one` stores at most one permit when nobody
//! is waiting, which is enough because every woken taker loops back to the
//! check before waiting again.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::{Instant, timeout_at};

/// Thread-safe unbounded FIFO with blocking dequeue.
///
/// Insertion order is preserved: if A is pushed strictly before B, A is
/// taken first. That fixes pickup order only; completion order is up to
/// whatever the takers do afterwards.
#[derive(Debug, Default)]
pub struct WorkQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Notify,
}

impl<T> WorkQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Notify::new(),
        }
    }

    /// Enqueues an item at the back. Never blocks.
    pub fn push(&self, item: T) {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(item);
        self.available.notify_one();
    }

    /// Dequeues the front item, waiting up to `timeout` for one to arrive.
    ///
    /// Returns `None` if the timeout elapses with the queue still empty.
    pub async fn take(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        loop {
            let notified = self.available.notified();
            if let Some(item) = self.pop() {
                return Some(item);
            }
            if timeout_at(deadline, notified).await.is_err() {
                // Deadline hit; one last check in case a push raced the timeout.
                return self.pop();
            }
        }
    }

    /// Dequeues the front item if one is immediately available.
    pub fn pop(&self) -> Option<T> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
    }

    /// Number of items currently queued.
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// True if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn take_returns_pushed_items_in_fifo_order() {
        let queue = WorkQueue::new();
        queue.push(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(queue.take(Duration::from_millis(10)).await, Some(1));
        assert_eq!(queue.take(Duration::from_millis(10)).await, Some(2));
        assert_eq!(queue.take(Duration::from_millis(10)).await, Some(3));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn take_times_out_on_empty_queue() {
        let queue: WorkQueue<u32> = WorkQueue::new();
        let before = Instant::now();
        assert_eq!(queue.take(Duration::from_millis(20)).await, None);
        assert!(before.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn take_wakes_on_push_while_waiting() {
        let queue = Arc::new(WorkQueue::new());

        let taker = {
            let queue = queue.clone();
            tokio::spawn(async move { queue.take(Duration::from_secs(5)).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        queue.push(42);

        assert_eq!(taker.await.expect("taker panicked"), Some(42));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_takers_drain_everything_exactly_once() {
        let queue = Arc::new(WorkQueue::new());
        let mut takers = Vec::new();
        for _ in 0..4 {
            let queue = queue.clone();
            takers.push(tokio::spawn(async move {
                let mut got = Vec::new();
                while let Some(v) = queue.take(Duration::from_millis(100)).await {
                    got.push(v);
                }
                got
            }));
        }

        for v in 0..100u32 {
            queue.push(v);
        }

        let mut all = Vec::new();
        for t in takers {
            all.extend(t.await.expect("taker panicked"));
        }
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }
}
