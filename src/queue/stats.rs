//! Queue counters shared between the interface and the worker.
//!
//! [`QueueStats`] is a set of atomic counters: the interface bumps
//! `submitted`; the worker bumps `completed` or `failed` once per unit.
//! The interface reads a [`StatsSnapshot`] each frame for the status bar.

use std::sync::atomic::{AtomicU64, Ordering};

// ---------------------------------------------------------------------------
// QueueStats
// ---------------------------------------------------------------------------

/// Lock-free counters describing queue progress.
#[derive(Debug, Default)]
pub struct QueueStats {
    submitted: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
}

impl QueueStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_completed(&self) {
        self.completed.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::AcqRel);
    }

    /// Read all counters at once.
    ///
    /// The counters are read individually, so a snapshot taken while the
    /// worker is running may be one unit behind on either side.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            submitted: self.submitted.load(Ordering::Acquire),
            completed: self.completed.load(Ordering::Acquire),
            failed: self.failed.load(Ordering::Acquire),
        }
    }
}

// ---------------------------------------------------------------------------
// StatsSnapshot
// ---------------------------------------------------------------------------

/// Point-in-time copy of [`QueueStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Snapshots accepted by `submit`.
    pub submitted: u64,
    /// Units transformed successfully and handed to the result channel.
    pub completed: u64,
    /// Units whose transformation returned an error or panicked.
    pub failed: u64,
}

impl StatsSnapshot {
    /// Units submitted but not yet processed by the worker.
    ///
    /// ```
    /// use cipher_pad::queue::StatsSnapshot;
    ///
    /// let s = StatsSnapshot { submitted: 5, completed: 2, failed: 1 };
    /// assert_eq!(s.pending(), 2);
    /// ```
    pub fn pending(&self) -> u64 {
        self.submitted
            .saturating_sub(self.completed)
            .saturating_sub(self.failed)
    }

    /// Returns `true` while the worker has a backlog.
    pub fn is_busy(&self) -> bool {
        self.pending() > 0
    }

    /// The four status-bar counts, in display order.
    ///
    /// ```
    /// use cipher_pad::queue::StatsSnapshot;
    ///
    /// let s = StatsSnapshot { submitted: 4, completed: 2, failed: 0 };
    /// assert_eq!(s.summary(), "submitted 4 | delivered 2 | failed 0 | pending 2");
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "submitted {} | delivered {} | failed {} | pending {}",
            self.submitted,
            self.completed,
            self.failed,
            self.pending()
        )
    }

    /// A short human-readable label for the status bar.
    pub fn label(&self) -> &'static str {
        if self.is_busy() {
            "Encrypting"
        } else {
            "Idle"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stats_are_zero() {
        let stats = QueueStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert!(!stats.snapshot().is_busy());
    }

    #[test]
    fn pending_counts_unprocessed_units() {
        let stats = QueueStats::new();
        stats.record_submitted();
        stats.record_submitted();
        stats.record_submitted();
        stats.record_completed();
        stats.record_failed();

        let s = stats.snapshot();
        assert_eq!(s.submitted, 3);
        assert_eq!(s.completed, 1);
        assert_eq!(s.failed, 1);
        assert_eq!(s.pending(), 1);
        assert!(s.is_busy());
    }

    #[test]
    fn pending_never_underflows() {
        let s = StatsSnapshot {
            submitted: 1,
            completed: 2,
            failed: 0,
        };
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn label_reflects_backlog() {
        let idle = StatsSnapshot::default();
        let busy = StatsSnapshot {
            submitted: 1,
            ..StatsSnapshot::default()
        };
        assert_eq!(idle.label(), "Idle");
        assert_eq!(busy.label(), "Encrypting");
    }

    #[test]
    fn summary_lists_all_four_counts_even_when_zero() {
        let s = StatsSnapshot {
            submitted: 7,
            completed: 5,
            failed: 1,
        };
        assert_eq!(s.summary(), "submitted 7 | delivered 5 | failed 1 | pending 1");
        assert_eq!(
            StatsSnapshot::default().summary(),
            "submitted 0 | delivered 0 | failed 0 | pending 0"
        );
    }

    #[test]
    fn stats_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueueStats>();
    }
}
