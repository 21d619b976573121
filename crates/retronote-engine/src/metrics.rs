//! Lightweight performance instrumentation.
//!
//! The buffer is explicit state owned by whoever creates the handle, not a
//! process-wide global: callers that want timings construct a
//! [`MetricsHandle`] at startup and pass clones down. Append-only ring
//! buffer, capped, emptied only when the handle is first created.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Ring buffer capacity; the oldest samples fall off first.
const CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub label: &'static str,
    pub duration: Duration,
}

/// Cheaply cloneable handle to a shared metrics buffer.
#[derive(Debug, Clone, Default)]
pub struct MetricsHandle {
    inner: Arc<Mutex<VecDeque<Sample>>>,
}

impl MetricsHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, label: &'static str, duration: Duration) {
        let mut buf = self.inner.lock().expect("metrics lock poisoned");
        if buf.len() == CAPACITY {
            buf.pop_front();
        }
        buf.push_back(Sample { label, duration });
    }

    /// Run `f`, recording its wall-clock duration under `label`.
    pub fn time<T>(&self, label: &'static str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.record(label, start.elapsed());
        value
    }

    /// Snapshot of the buffered samples, oldest first.
    pub fn samples(&self) -> Vec<Sample> {
        self.inner
            .lock()
            .expect("metrics lock poisoned")
            .iter()
            .cloned()
            .collect()
    }
}
