//! Authentication counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Metrics {
    pub authorized: AtomicU64,
    pub rejected: AtomicU64,
    pub store_errors: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_authorized(&self) {
        self.authorized.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            authorized: self.authorized.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MetricsSnapshot {
    pub authorized: u64,
    pub rejected: u64,
    pub store_errors: u64,
}
