//! Wake-up hook invoked by the worker after each delivery.

/// Wakes the interface thread so it drains the result channel.
///
/// Called on the worker thread; implementations must only signal, never
/// touch display state.
pub trait Notify: Send + Sync {
    fn notify(&self);
}

/// A [`Notify`] that does nothing; the interface polls on its own schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNotify;

impl Notify for NoNotify {
    fn notify(&self) {}
}
