// progress.rs - Progress reporting and cooperative cancellation

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Receiver of `(current, total)` progress events.
///
/// The filter calls `report` with non-decreasing `current` values; how the
/// event is displayed is entirely up to the implementor.
pub trait ProgressSink: Send + Sync {
    fn report(&self, current: usize, total: usize);
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn report(&self, current: usize, total: usize) {
        self(current, total)
    }
}

/// Polled progress counter for callers that prefer sampling over callbacks
#[derive(Debug, Default)]
pub struct ProgressCounter {
    current: AtomicUsize,
    total: AtomicUsize,
}

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest `(current, total)` pair
    pub fn get(&self) -> (usize, usize) {
        (
            self.current.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }

    pub fn fraction(&self) -> f64 {
        let (current, total) = self.get();
        if total == 0 {
            0.0
        } else {
            current as f64 / total as f64
        }
    }
}

impl ProgressSink for ProgressCounter {
    fn report(&self, current: usize, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.current.store(current, Ordering::Relaxed);
    }
}

/// Shared flag checked once per column by the filter
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink() {
        let events = Mutex::new(Vec::new());
        let sink = |current: usize, total: usize| events.lock().unwrap().push((current, total));
        sink.report(1, 10);
        sink.report(10, 10);
        assert_eq!(*events.lock().unwrap(), vec![(1, 10), (10, 10)]);
    }

    #[test]
    fn test_progress_counter() {
        let counter = ProgressCounter::new();
        assert_eq!(counter.fraction(), 0.0);
        counter.report(25, 100);
        assert_eq!(counter.get(), (25, 100));
        assert_eq!(counter.fraction(), 0.25);
    }

    #[test]
    fn test_cancellation_token_is_shared() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
