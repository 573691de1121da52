use std::sync::{Mutex, PoisonError};

/// Single-slot holder for the first failure of a run.
///
/// The first `record` wins; later values are dropped.
pub(crate) struct ErrorSlot<T> {
    inner: Mutex<Option<T>>,
}

impl<T> ErrorSlot<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Store `value` if the slot is empty. Returns `true` if it was stored.
    pub(crate) fn record(&self, value: T) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return false;
        }
        *guard = Some(value);
        true
    }

    pub(crate) fn take(&self) -> Option<T> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
