use std::sync::{Arc, Mutex};

use serde::{Serialize, Deserialize};


/// Totals for one transfer direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferCount {
    /// cumulative bytes moved
    pub bytes: u64,
    /// cumulative calls, successful or not
    pub ops: u64,
}

/// Shared accumulator behind the counting wrappers.
///
/// Cloning yields another handle onto the same totals, so a monitoring
/// thread can poll [`snapshot`](Self::snapshot) while I/O is in flight
/// elsewhere. The lock is only ever held for the count update itself,
/// never across an I/O call: a snapshot racing an in-flight call may
/// not include it yet, but updates are serialized and every call's
/// contribution is visible by the time that call returns.
#[derive(Debug, Default, Clone)]
pub struct TransferStats {
    count: Arc<Mutex<TransferCount>>,
}

impl TransferStats {
    /// Fresh accumulator starting at zero bytes, zero calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call and the bytes it moved to the totals.
    pub(crate) fn record(&self, bytes: usize) {
        let mut count = self.count.lock().unwrap();
        count.bytes += bytes as u64;
        count.ops += 1;
    }

    /// Current totals, as one consistent pair.
    pub fn snapshot(&self) -> TransferCount {
        *self.count.lock().unwrap()
    }
}
