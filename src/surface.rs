//! Input surface and output sink: the interface-thread half of the queue.
//!
//! [`InputSurface`] owns the editable input text, the displayed output text
//! and the producer end of the [`OrderingQueue`].  It holds no widget
//! types, so the app can drive it from egui while tests drive it directly.
//!
//! ```text
//! text edited ─▶ on_text_changed()  snapshot input → queue.submit
//! each frame  ─▶ apply_pending(n)   result channel → output (FIFO)
//! window exit ─▶ close()            queue.shutdown
//! ```
//!
//! Only the interface thread ever writes `output`; the worker reaches it
//! exclusively through the result channel.

use crate::queue::{
    Notify, OrderingQueue, QueueError, ResultReceiver, Seq, StatsSnapshot,
};
use crate::transform::Transform;

/// Editable input, displayed output and the queue between them.
pub struct InputSurface {
    input: String,
    output: String,
    queue: OrderingQueue,
    results: ResultReceiver,
    /// Results applied to `output` so far.
    applied: u64,
    /// Sequence number of the result currently displayed.
    shown_seq: Option<Seq>,
}

impl InputSurface {
    /// Start the worker and return an empty surface.
    ///
    /// # Errors
    ///
    /// [`QueueError::Spawn`] if the worker thread cannot be created.
    pub fn new<T, N>(transform: T, notify: N) -> Result<Self, QueueError>
    where
        T: Transform + 'static,
        N: Notify + 'static,
    {
        let (queue, results) = OrderingQueue::start(transform, notify)?;
        Ok(Self {
            input: String::new(),
            output: String::new(),
            queue,
            results,
            applied: 0,
            shown_seq: None,
        })
    }

    // ── Input side ────────────────────────────────────────────────────────

    /// The current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mutable access for the text widget.  Call
    /// [`on_text_changed`](Self::on_text_changed) after an edit.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Replace the whole input and submit it, as a paste would.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.on_text_changed();
    }

    /// Snapshot the current input and hand it to the queue.
    ///
    /// Returns the snapshot's sequence number, or `None` once the surface
    /// has been closed.
    pub fn on_text_changed(&mut self) -> Option<Seq> {
        match self.queue.submit(self.input.clone()) {
            Ok(seq) => Some(seq),
            Err(e) => {
                log::warn!("surface: edit ignored: {e}");
                None
            }
        }
    }

    // ── Output side ───────────────────────────────────────────────────────

    /// The text currently displayed in the output pane.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Sequence number of the displayed result, if any.
    pub fn shown_seq(&self) -> Option<Seq> {
        self.shown_seq
    }

    /// Apply up to `max` delivered results to the output, oldest first.
    ///
    /// Never blocks.  Returns how many results were applied.
    pub fn apply_pending(&mut self, max: usize) -> usize {
        let mut count = 0;
        while count < max {
            let Ok(result) = self.results.try_recv() else {
                break;
            };
            self.output = result.text;
            self.shown_seq = Some(result.seq);
            self.applied += 1;
            count += 1;
        }
        count
    }

    /// Results waiting in the result channel, not yet displayed.
    pub fn pending_deliveries(&self) -> usize {
        self.results.len()
    }

    /// Results applied to the output so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Queue counters for the status bar.
    pub fn stats(&self) -> StatsSnapshot {
        self.queue.stats()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Stop accepting edits and release the worker.  Idempotent.
    pub fn close(&mut self) {
        self.queue.shutdown();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::queue::NoNotify;
    use crate::transform::{Delayed, ReverseBase64};

    /// Spin until `n` results in total have reached the surface.
    fn wait_for_deliveries(surface: &InputSurface, n: u64) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while surface.applied() + (surface.pending_deliveries() as u64) < n {
            assert!(Instant::now() < deadline, "timed out waiting for worker");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    /// Simulate typing `text` one character at a time.
    fn type_text(surface: &mut InputSurface, text: &str) {
        for ch in text.chars() {
            surface.input_mut().push(ch);
            surface.on_text_changed();
        }
    }

    #[test]
    fn typing_shows_encoded_text() {
        let mut surface = InputSurface::new(ReverseBase64, NoNotify).unwrap();
        type_text(&mut surface, "AB");
        wait_for_deliveries(&surface, 2);

        surface.apply_pending(usize::MAX);
        assert_eq!(surface.output(), "QkE=");
        assert_eq!(surface.shown_seq(), Some(2));
    }

    #[test]
    fn every_intermediate_state_is_displayed_in_order() {
        let slow = Delayed::new(ReverseBase64, Duration::from_millis(5));
        let mut surface = InputSurface::new(slow, NoNotify).unwrap();
        type_text(&mut surface, "ABC");
        wait_for_deliveries(&surface, 3);

        let mut shown = Vec::new();
        while surface.apply_pending(1) == 1 {
            shown.push(surface.output().to_owned());
        }

        let expected: Vec<String> = ["A", "AB", "ABC"]
            .iter()
            .map(|s| ReverseBase64.apply(s).unwrap())
            .collect();
        assert_eq!(shown, expected);
        assert_eq!(surface.applied(), 3);
    }

    #[test]
    fn deleting_everything_clears_output() {
        let mut surface = InputSurface::new(ReverseBase64, NoNotify).unwrap();
        surface.set_input("hello");
        surface.set_input("");
        wait_for_deliveries(&surface, 2);

        surface.apply_pending(usize::MAX);
        assert_eq!(surface.output(), "");
    }

    #[test]
    fn edits_do_not_wait_for_the_worker() {
        let slow = Delayed::new(ReverseBase64, Duration::from_millis(200));
        let mut surface = InputSurface::new(slow, NoNotify).unwrap();

        let start = Instant::now();
        type_text(&mut surface, "typing fast");
        assert!(start.elapsed() < Duration::from_millis(200));
        assert_eq!(surface.apply_pending(usize::MAX), 0);
        assert_eq!(surface.output(), "");
    }

    #[test]
    fn pending_deliveries_tracks_unapplied_results() {
        let mut surface = InputSurface::new(ReverseBase64, NoNotify).unwrap();
        type_text(&mut surface, "xyz");
        wait_for_deliveries(&surface, 3);

        assert_eq!(surface.pending_deliveries(), 3);
        surface.apply_pending(2);
        assert_eq!(surface.pending_deliveries(), 1);
        surface.apply_pending(2);
        assert_eq!(surface.pending_deliveries(), 0);
    }

    #[test]
    fn edits_after_close_are_ignored() {
        let mut surface = InputSurface::new(ReverseBase64, NoNotify).unwrap();
        surface.close();

        assert!(surface.is_closed());
        assert_eq!(surface.on_text_changed(), None);
        assert_eq!(surface.stats().submitted, 0);
    }
}
