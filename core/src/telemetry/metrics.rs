use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Point-in-time view of the session counters, serialized by the status
/// bridge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub cycles: usize,
    pub decisions: usize,
    pub adapter_errors: usize,
    pub dispatch_errors: usize,
    pub emergencies: usize,
}

/// Session counters for the monitoring loop. `decisions` counts cycles whose
/// classification succeeded, so `cycles - decisions` equals the skipped
/// adapter-failure cycles.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_cycle(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.cycles += 1;
        }
    }

    pub fn record_decision(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.decisions += 1;
        }
    }

    pub fn record_adapter_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.adapter_errors += 1;
        }
    }

    pub fn record_dispatch_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.dispatch_errors += 1;
        }
    }

    pub fn record_emergency(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.emergencies += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_cycle();
        recorder.record_cycle();
        recorder.record_decision();
        recorder.record_adapter_error();
        recorder.record_emergency();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.cycles, 2);
        assert_eq!(snapshot.decisions, 1);
        assert_eq!(snapshot.adapter_errors, 1);
        assert_eq!(snapshot.dispatch_errors, 0);
        assert_eq!(snapshot.emergencies, 1);
    }
}
