//! In-flight operation tracking.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts operations of one kind that are currently running.
///
/// The counter only reports; it never blocks a caller. Enforcing
/// single-flight is left to whoever reads [`InFlight::is_active`].
#[derive(Debug, Default)]
pub struct InFlight {
    count: AtomicUsize,
}

impl InFlight {
    /// Creates an idle counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Returns true while at least one operation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.count.load(Ordering::Acquire) > 0
    }

    /// Marks an operation as started. It ends when the guard drops.
    #[must_use = "the operation ends as soon as the guard is dropped"]
    pub fn enter(&self) -> FlightGuard<'_> {
        self.count.fetch_add(1, Ordering::AcqRel);
        FlightGuard { flight: self }
    }
}

/// Ends an in-flight operation on drop, on every exit path.
#[derive(Debug)]
pub struct FlightGuard<'a> {
    flight: &'a InFlight,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flight.count.fetch_sub(1, Ordering::AcqRel);
    }
}
