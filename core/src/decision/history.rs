use crate::threat::ThreatLabel;
use crate::{ShieldError, ShieldResult};
use std::collections::VecDeque;

/// Bounded sliding window of the most recent threat labels.
///
/// Replaces the legacy controller's free-floating history list with an owned
/// FIFO: `record` evicts the oldest entry once the window is full, and only
/// `reset` (or a fresh tracker) clears accumulated entries.
pub struct HistoryTracker {
    window: VecDeque<ThreatLabel>,
    capacity: usize,
}

impl HistoryTracker {
    pub fn new(capacity: usize) -> ShieldResult<Self> {
        if capacity == 0 {
            return Err(ShieldError::Configuration(
                "persistence window capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends one label, evicting the oldest entry when at capacity.
    pub fn record(&mut self, label: ThreatLabel) {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(label);
    }

    /// True iff the window is full, every entry equals `current`, and
    /// `current` is not Nominal. A single differing label anywhere in the
    /// window breaks persistence.
    pub fn is_persistent(&self, current: ThreatLabel) -> bool {
        current != ThreatLabel::Nominal
            && self.window.len() == self.capacity
            && self.window.iter().all(|&label| label == current)
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_a_configuration_error() {
        assert!(matches!(
            HistoryTracker::new(0),
            Err(ShieldError::Configuration(_))
        ));
    }

    #[test]
    fn record_evicts_oldest_at_capacity() {
        let mut tracker = HistoryTracker::new(2).unwrap();
        tracker.record(ThreatLabel::Pulsed);
        tracker.record(ThreatLabel::Pulsed);
        tracker.record(ThreatLabel::WidebandNoise);
        assert_eq!(tracker.len(), 2);
        // Oldest Pulsed is gone, so a Pulsed run is broken.
        assert!(!tracker.is_persistent(ThreatLabel::Pulsed));
    }

    #[test]
    fn persistence_requires_full_window_of_identical_labels() {
        let mut tracker = HistoryTracker::new(3).unwrap();
        tracker.record(ThreatLabel::NarrowbandContinuous);
        tracker.record(ThreatLabel::NarrowbandContinuous);
        assert!(!tracker.is_persistent(ThreatLabel::NarrowbandContinuous));
        tracker.record(ThreatLabel::NarrowbandContinuous);
        assert!(tracker.is_persistent(ThreatLabel::NarrowbandContinuous));
    }

    #[test]
    fn nominal_never_counts_as_persistent() {
        let mut tracker = HistoryTracker::new(3).unwrap();
        for _ in 0..3 {
            tracker.record(ThreatLabel::Nominal);
        }
        assert!(!tracker.is_persistent(ThreatLabel::Nominal));
    }

    #[test]
    fn differing_label_in_window_breaks_persistence() {
        let mut tracker = HistoryTracker::new(3).unwrap();
        tracker.record(ThreatLabel::BurstNoise);
        tracker.record(ThreatLabel::AtmosphericFading);
        tracker.record(ThreatLabel::BurstNoise);
        assert!(!tracker.is_persistent(ThreatLabel::BurstNoise));
    }

    #[test]
    fn reset_empties_the_window() {
        let mut tracker = HistoryTracker::new(3).unwrap();
        for _ in 0..3 {
            tracker.record(ThreatLabel::BurstNoise);
        }
        tracker.reset();
        assert!(tracker.is_empty());
        assert!(!tracker.is_persistent(ThreatLabel::BurstNoise));
    }
}
