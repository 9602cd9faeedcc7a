//! [`OrderingQueue`]: owns the job channel and the single worker thread.
//!
//! # Unit lifecycle
//!
//! ```text
//! submit(text)
//!   └─▶ TextSnapshot { seq, text } → job channel
//!
//! worker: blocking_recv()
//!   ├─ stop flag raised        → exit, backlog abandoned
//!   ├─ apply → Ok(text)        → completed += 1, result channel, notify
//!   ├─ apply → Err(e)          → log, failed += 1, no delivery
//!   └─ apply panics            → log, failed += 1, no delivery
//! job channel closed           → exit cleanly
//! ```
//!
//! Each unit is attempted exactly once; there are no retries.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use thiserror::Error;
use tokio::sync::mpsc;

use super::notify::Notify;
use super::stats::{QueueStats, StatsSnapshot};
use super::{Seq, TextSnapshot, TransformedResult};
use crate::transform::Transform;

// ---------------------------------------------------------------------------
// QueueError
// ---------------------------------------------------------------------------

/// Errors surfaced by [`OrderingQueue`].
#[derive(Debug, Error)]
pub enum QueueError {
    /// The queue has been shut down and accepts no more work.
    #[error("queue is closed")]
    Closed,

    /// The OS refused to create the worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The worker thread panicked outside a transformation.
    #[error("worker thread panicked")]
    WorkerPanicked,
}

/// Receiving end of the result channel, drained by the interface thread.
pub type ResultReceiver = mpsc::UnboundedReceiver<TransformedResult>;

// ---------------------------------------------------------------------------
// OrderingQueue
// ---------------------------------------------------------------------------

/// Single-worker FIFO queue that transforms text snapshots off the
/// interface thread.
///
/// Create with [`OrderingQueue::start`], feed it with
/// [`submit`](Self::submit), and drain the returned [`ResultReceiver`] on
/// the interface thread.  Dropping the queue shuts it down.
pub struct OrderingQueue {
    job_tx: Option<mpsc::UnboundedSender<TextSnapshot>>,
    stop: Arc<AtomicBool>,
    stats: Arc<QueueStats>,
    next_seq: Seq,
    worker: Option<JoinHandle<()>>,
}

impl OrderingQueue {
    /// Spawn the worker thread and return the queue together with the
    /// receiving end of the result channel.
    ///
    /// * `transform` - runs on the worker thread for every snapshot.
    /// * `notify`    - called on the worker thread after each delivery.
    ///
    /// # Errors
    ///
    /// [`QueueError::Spawn`] if the worker thread cannot be created.
    pub fn start<T, N>(transform: T, notify: N) -> Result<(Self, ResultReceiver), QueueError>
    where
        T: Transform + 'static,
        N: Notify + 'static,
    {
        let (job_tx, job_rx) = mpsc::unbounded_channel::<TextSnapshot>();
        let (result_tx, result_rx) = mpsc::unbounded_channel::<TransformedResult>();
        let stop = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(QueueStats::new());

        let worker = {
            let stop = Arc::clone(&stop);
            let stats = Arc::clone(&stats);
            std::thread::Builder::new()
                .name("transform-worker".into())
                .spawn(move || run_worker(transform, notify, job_rx, result_tx, stop, stats))?
        };

        let queue = Self {
            job_tx: Some(job_tx),
            stop,
            stats,
            next_seq: 0,
            worker: Some(worker),
        };
        Ok((queue, result_rx))
    }

    /// Enqueue `text` for transformation and return its sequence number.
    ///
    /// Never blocks: the job channel is unbounded.
    ///
    /// # Errors
    ///
    /// [`QueueError::Closed`] after [`shutdown`](Self::shutdown) or if the
    /// worker has exited.
    pub fn submit(&mut self, text: String) -> Result<Seq, QueueError> {
        let tx = self.job_tx.as_ref().ok_or(QueueError::Closed)?;
        let seq = self.next_seq + 1;

        tx.send(TextSnapshot { seq, text })
            .map_err(|_| QueueError::Closed)?;

        self.next_seq = seq;
        self.stats.record_submitted();
        log::debug!("queue: submitted #{seq}");
        Ok(seq)
    }

    /// Stop accepting work and release the worker.
    ///
    /// The worker finishes the unit it is currently transforming (if any)
    /// and exits without touching the remaining backlog.  Idempotent.
    pub fn shutdown(&mut self) {
        if self.job_tx.is_some() {
            // Flag first: every unit dequeued after this point sees it.
            self.stop.store(true, Ordering::Release);
            self.job_tx = None;
            log::info!(
                "queue: shutdown requested ({} unit(s) pending)",
                self.stats.snapshot().pending()
            );
        }
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_closed(&self) -> bool {
        self.job_tx.is_none()
    }

    /// Shut down and wait for the worker thread to exit.
    pub fn join(mut self) -> Result<(), QueueError> {
        self.shutdown();
        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| QueueError::WorkerPanicked),
            None => Ok(()),
        }
    }

    /// Current counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Shared handle to the counters.
    pub fn stats_handle(&self) -> Arc<QueueStats> {
        Arc::clone(&self.stats)
    }
}

impl Drop for OrderingQueue {
    /// Shut down without joining; the worker exits on its own.
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ---------------------------------------------------------------------------
// Worker loop
// ---------------------------------------------------------------------------

fn run_worker<T: Transform, N: Notify>(
    transform: T,
    notify: N,
    mut job_rx: mpsc::UnboundedReceiver<TextSnapshot>,
    result_tx: mpsc::UnboundedSender<TransformedResult>,
    stop: Arc<AtomicBool>,
    stats: Arc<QueueStats>,
) {
    log::info!("worker: started (transform = {})", transform.name());

    while let Some(snapshot) = job_rx.blocking_recv() {
        if stop.load(Ordering::Acquire) {
            log::debug!("worker: stop flag set, abandoning #{}", snapshot.seq);
            break;
        }

        let seq = snapshot.seq;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| transform.apply(&snapshot.text)));

        match outcome {
            Ok(Ok(text)) => {
                // Counted before the send: whoever receives the result also
                // sees the count.
                stats.record_completed();
                if result_tx.send(TransformedResult { seq, text }).is_err() {
                    log::debug!("worker: result receiver gone, dropping #{seq}");
                    continue;
                }
                log::debug!("worker: delivered #{seq}");
                notify.notify();
            }
            Ok(Err(e)) => {
                stats.record_failed();
                log::error!("worker: transform failed on #{seq}: {e}");
            }
            Err(payload) => {
                stats.record_failed();
                log::error!(
                    "worker: transform panicked on #{seq}: {}",
                    panic_message(payload.as_ref())
                );
            }
        }
    }

    log::info!("worker: exiting");
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
