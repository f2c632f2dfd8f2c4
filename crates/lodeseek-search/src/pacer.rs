//! Cooperative scheduling hooks for long scans.
//!
//! The engine calls [`Pacer::checkpoint`] after every outer-loop row and
//! checks the [`CancelToken`] at the same points. Yielding is purely a
//! scheduling concern: it never changes output values or ordering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives a callback at every row boundary of a scan. Implementations can
/// sleep, yield to an event loop, or just count.
pub trait Pacer {
    fn checkpoint(&mut self);
}

/// Default pacer: does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn checkpoint(&mut self) {}
}

/// Counts checkpoints; used to verify the yield schedule in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountingPacer {
    pub checkpoints: usize,
}

impl Pacer for CountingPacer {
    fn checkpoint(&mut self) {
        self.checkpoints += 1;
    }
}

/// Cooperative cancellation flag, checked at the same row boundaries the
/// pacer runs at. A cancelled search returns whatever it collected so far;
/// there is no stronger partial-result contract.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent; safe from any thread.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
