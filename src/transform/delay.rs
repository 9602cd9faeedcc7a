//! Artificial latency wrapper.
//!
//! [`Delayed`] sleeps for a fixed duration before delegating to the wrapped
//! transform, which makes the asynchronous hand-off visible while typing.

use std::time::Duration;

use super::{Transform, TransformError};

/// Wraps any [`Transform`] and blocks for `delay` before each call.
///
/// The sleep happens on whichever thread calls [`apply`](Transform::apply),
/// which in the application is always the queue's worker thread.
#[derive(Debug, Clone)]
pub struct Delayed<T: Transform> {
    inner: T,
    delay: Duration,
}

impl<T: Transform> Delayed<T> {
    /// Wrap `inner` with a fixed `delay`.
    pub fn new(inner: T, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Return a reference to the wrapped transform.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transform> Transform for Delayed<T> {
    fn apply(&self, text: &str) -> Result<String, TransformError> {
        std::thread::sleep(self.delay);
        self.inner.apply(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::transform::ReverseBase64;

    #[test]
    fn result_matches_inner_transform() {
        let t = Delayed::new(ReverseBase64, Duration::from_millis(1));
        assert_eq!(t.apply("AB").unwrap(), "QkE=");
        assert_eq!(t.name(), "reverse-base64");
    }

    #[test]
    fn apply_waits_at_least_the_delay() {
        let t = Delayed::new(ReverseBase64, Duration::from_millis(30));
        let start = Instant::now();
        t.apply("x").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn accessors_expose_configuration() {
        let t = Delayed::new(ReverseBase64, Duration::from_millis(50));
        assert_eq!(t.delay(), Duration::from_millis(50));
        assert_eq!(t.inner().name(), "reverse-base64");
    }
}
