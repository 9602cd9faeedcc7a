//! Ordering queue: single-worker, strictly-FIFO transformation queue.
//!
//! The interface thread submits text snapshots; one dedicated worker thread
//! transforms them in submission order and hands each result back over a
//! second FIFO channel that the interface thread drains.
//!
//! # Architecture
//!
//! ```text
//! interface thread                     worker thread ("transform-worker")
//! ────────────────                     ──────────────────────────────────
//! OrderingQueue::submit(text)
//!        │  TextSnapshot { seq, text }
//!        ▼
//!   job channel (unbounded, FIFO) ───▶ blocking_recv()
//!                                          │
//!                                          ├─ Transform::apply   (may block)
//!                                          ├─ Err / panic → log, skip
//!                                          └─ Ok → send TransformedResult
//!                                                     + Notify::notify()
//!        ┌──────────────────────────────────────────────┘
//!        ▼
//!   result channel (unbounded, FIFO)
//!        │
//!        ▼
//! try_recv() on each frame → apply to output
//! ```
//!
//! Both channels are FIFO and there is exactly one producer on the job side
//! and one on the result side, so results reach the interface in the order
//! their snapshots were submitted.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use cipher_pad::queue::{NoNotify, OrderingQueue};
//! use cipher_pad::transform::ReverseBase64;
//!
//! let (mut queue, mut results) = OrderingQueue::start(ReverseBase64, NoNotify).unwrap();
//! queue.submit("AB".to_string()).unwrap();
//!
//! // Later, on the interface thread:
//! while let Ok(result) = results.try_recv() {
//!     println!("#{} -> {}", result.seq, result.text);
//! }
//! ```

pub mod notify;
pub mod stats;
pub mod worker;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use notify::{NoNotify, Notify};
pub use stats::{QueueStats, StatsSnapshot};
pub use worker::{OrderingQueue, QueueError, ResultReceiver};

// ---------------------------------------------------------------------------
// Units of work
// ---------------------------------------------------------------------------

/// Submission sequence number, assigned by [`OrderingQueue::submit`].
pub type Seq = u64;

/// Input text captured on the interface thread at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    /// Position of this snapshot in submission order (starts at 1).
    pub seq: Seq,
    /// The full input text at the moment of the change.
    pub text: String,
}

/// Output of the transformation for one [`TextSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedResult {
    /// Sequence number of the snapshot this result was produced from.
    pub seq: Seq,
    /// The transformed text.
    pub text: String,
}
