//! Deterministic provider for tests and demos.

use super::snapshot::HostSnapshot;
use super::MetricsProvider;

/// Replays a queue of prepared snapshots; once the queue is exhausted,
/// keeps returning the last one.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    queue: Vec<HostSnapshot>,
    position: usize,
}

impl MockProvider {
    /// Provider that always returns the given snapshot.
    pub fn fixed(snapshot: HostSnapshot) -> Self {
        Self {
            queue: vec![snapshot],
            position: 0,
        }
    }

    /// Provider that steps through `snapshots` one tick at a time.
    pub fn sequence(snapshots: Vec<HostSnapshot>) -> Self {
        Self {
            queue: snapshots,
            position: 0,
        }
    }
}

impl MetricsProvider for MockProvider {
    fn sample(&mut self) -> HostSnapshot {
        let snapshot = self
            .queue
            .get(self.position)
            .or_else(|| self.queue.last())
            .cloned()
            .unwrap_or_default();
        if self.position < self.queue.len() {
            self.position += 1;
        }
        snapshot
    }

    fn description(&self) -> &str {
        "mock"
    }
}
