use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

#[derive(Clone, Default)]
pub struct MetricsRegistry {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    orders_placed: AtomicU64,
    estimates_computed: AtomicU64,
    stars_awarded: AtomicU64,
    scoops_redeemed: AtomicU64,
    wait_secs_peak: AtomicU64,
    queue_active_peak: AtomicU64,
}

impl MetricsRegistry {
    pub fn inc_orders_placed(&self, delta: u64) {
        self.inner.orders_placed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_estimates_computed(&self, delta: u64) {
        self.inner.estimates_computed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_stars_awarded(&self, delta: u64) {
        self.inner.stars_awarded.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn inc_scoops_redeemed(&self, delta: u64) {
        self.inner.scoops_redeemed.fetch_add(delta, Ordering::Relaxed);
    }

    pub fn record_wait_peak(&self, wait_secs: u64) {
        self.inner.wait_secs_peak.fetch_max(wait_secs, Ordering::Relaxed);
    }

    pub fn record_queue_active_peak(&self, active: u64) {
        self.inner.queue_active_peak.fetch_max(active, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            orders_placed: self.inner.orders_placed.load(Ordering::Relaxed),
            estimates_computed: self.inner.estimates_computed.load(Ordering::Relaxed),
            stars_awarded: self.inner.stars_awarded.load(Ordering::Relaxed),
            scoops_redeemed: self.inner.scoops_redeemed.load(Ordering::Relaxed),
            wait_secs_peak: self.inner.wait_secs_peak.load(Ordering::Relaxed),
            queue_active_peak: self.inner.queue_active_peak.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsSnapshot {
    pub orders_placed: u64,
    pub estimates_computed: u64,
    pub stars_awarded: u64,
    pub scoops_redeemed: u64,
    pub wait_secs_peak: u64,
    pub queue_active_peak: u64,
}

impl MetricsSnapshot {
    pub fn to_json_line(&self, label: &str, elapsed: Option<Duration>) -> String {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            label: &'a str,
            orders_placed: u64,
            estimates_computed: u64,
            stars_awarded: u64,
            scoops_redeemed: u64,
            wait_secs_peak: u64,
            queue_active_peak: u64,
            elapsed_ms: Option<u128>,
        }

        let payload = Snapshot {
            label,
            orders_placed: self.orders_placed,
            estimates_computed: self.estimates_computed,
            stars_awarded: self.stars_awarded,
            scoops_redeemed: self.scoops_redeemed,
            wait_secs_peak: self.wait_secs_peak,
            queue_active_peak: self.queue_active_peak,
            elapsed_ms: elapsed.map(|d| d.as_millis()),
        };
        serde_json::to_string(&payload).unwrap_or_else(|_| String::from("{}"))
    }
}

pub struct ServiceTimer {
    start: Instant,
}

impl ServiceTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_and_peaks_keep_max() {
        let metrics = MetricsRegistry::default();
        metrics.inc_orders_placed(2);
        metrics.inc_orders_placed(1);
        metrics.record_wait_peak(300);
        metrics.record_wait_peak(120);
        let snap = metrics.snapshot();
        assert_eq!(snap.orders_placed, 3);
        assert_eq!(snap.wait_secs_peak, 300);
    }

    #[test]
    fn json_line_carries_the_label() {
        let snap = MetricsRegistry::default().snapshot();
        let line = snap.to_json_line("closing", None);
        assert!(line.contains("\"label\":\"closing\""));
    }
}
