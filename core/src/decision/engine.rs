use crate::decision::history::HistoryTracker;
use crate::decision::policy::PolicyTable;
use crate::telemetry::log::LogManager;
use crate::threat::{ActionCode, ClassificationEvent, ThreatLabel};
use crate::ShieldResult;
use std::sync::{Arc, Mutex};

/// Adaptive threat-mitigation decision engine.
///
/// Converts a stream of classification events into mitigation action codes
/// using the policy table augmented with temporal persistence detection: a
/// non-nominal label repeating across the whole history window escalates to
/// an Emergency response regardless of its normal tier. The history window is
/// the engine's only evolving state; restarting the process is equivalent to
/// calling [`DecisionEngine::reset`].
pub struct DecisionEngine {
    history: HistoryTracker,
    policy: PolicyTable,
    logger: LogManager,
}

impl DecisionEngine {
    pub fn new(policy: PolicyTable, persistence_window: usize) -> ShieldResult<Self> {
        Ok(Self {
            history: HistoryTracker::new(persistence_window)?,
            policy,
            logger: LogManager::new(),
        })
    }

    /// Engine with the standard policy table.
    pub fn standard(persistence_window: usize) -> ShieldResult<Self> {
        Self::new(PolicyTable::standard(), persistence_window)
    }

    /// Resolves one classification cycle into an action code. Total and
    /// infallible; the persistence check runs before the table lookup so a
    /// persistent threat escalates even when its normal tier is Basic.
    pub fn decide(&mut self, event: &ClassificationEvent) -> ActionCode {
        self.history.record(event.label);

        if self.history.is_persistent(event.label) {
            self.logger.record_warning(&format!(
                "persistent threat {} (confidence {:.1}%), standard mitigation ineffective",
                event.label,
                event.confidence * 100.0
            ));
            // Clearing the window keeps the very next identical label from
            // re-firing the emergency path.
            self.history.reset();
            return ActionCode::Emergency;
        }

        let action = self.policy.action_for(event.label);
        if event.label == ThreatLabel::Nominal {
            // A clean reading breaks any accumulating run, so an old threat
            // recurring after a clean interval starts its count from scratch.
            self.history.reset();
        }

        self.logger.record(&format!(
            "diagnosis {} (confidence {:.1}%) -> action {}",
            event.label,
            event.confidence * 100.0,
            action
        ));
        action
    }

    /// Restores the start-of-session state.
    pub fn reset(&mut self) {
        self.history.reset();
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn persistence_window(&self) -> usize {
        self.history.capacity()
    }
}

/// Mutex-guarded handle for engines fed from concurrent sources.
///
/// The lock spans the whole decision cycle, so persistence evaluation and the
/// post-emergency reset stay atomic with the record that triggered them and
/// events are resolved strictly in arrival order.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<DecisionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn decide(&self, event: &ClassificationEvent) -> ActionCode {
        let mut engine = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        engine.decide(event)
    }

    pub fn reset(&self) {
        let mut engine = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        engine.reset();
    }

    pub fn history_len(&self) -> usize {
        let engine = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        engine.history_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn event(label: ThreatLabel) -> ClassificationEvent {
        ClassificationEvent::new(label, 0.95)
    }

    fn run(engine: &mut DecisionEngine, labels: &[ThreatLabel]) -> Vec<ActionCode> {
        labels.iter().map(|&l| engine.decide(&event(l))).collect()
    }

    #[test]
    fn persistence_escalates_on_exactly_the_nth_event() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        let actions = run(&mut engine, &[ThreatLabel::BurstNoise; 3]);
        assert_eq!(
            actions,
            vec![
                ActionCode::AdaptiveCodingModulation,
                ActionCode::AdaptiveCodingModulation,
                ActionCode::Emergency,
            ]
        );
    }

    #[test]
    fn emergency_clears_the_window_before_the_next_cycle() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        run(&mut engine, &[ThreatLabel::BurstNoise; 3]);
        // Two more identical labels must not re-trigger.
        let actions = run(&mut engine, &[ThreatLabel::BurstNoise; 2]);
        assert_eq!(actions, vec![ActionCode::AdaptiveCodingModulation; 2]);
        // The third one completes a fresh run.
        assert_eq!(
            engine.decide(&event(ThreatLabel::BurstNoise)),
            ActionCode::Emergency
        );
    }

    #[test]
    fn nominal_breaks_a_threat_run() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        let actions = run(
            &mut engine,
            &[
                ThreatLabel::NarrowbandContinuous,
                ThreatLabel::NarrowbandContinuous,
                ThreatLabel::Nominal,
                ThreatLabel::NarrowbandContinuous,
                ThreatLabel::NarrowbandContinuous,
            ],
        );
        assert!(!actions.contains(&ActionCode::Emergency));
        assert_eq!(actions[2], ActionCode::Nominal);
        assert_eq!(actions[4], ActionCode::NotchFilter);
    }

    #[test]
    fn co_channel_interference_is_spatial_until_persistent() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        let actions = run(&mut engine, &[ThreatLabel::CoChannelInterference; 2]);
        assert_eq!(actions, vec![ActionCode::BeamformingStbc; 2]);
        assert_eq!(
            engine.decide(&event(ThreatLabel::CoChannelInterference)),
            ActionCode::Emergency
        );
    }

    #[test]
    fn decisions_are_deterministic_for_a_fixed_sequence() {
        let sequence = [
            ThreatLabel::WidebandNoise,
            ThreatLabel::Pulsed,
            ThreatLabel::Pulsed,
            ThreatLabel::Nominal,
            ThreatLabel::AtmosphericFading,
            ThreatLabel::CoChannelInterference,
            ThreatLabel::CoChannelInterference,
            ThreatLabel::CoChannelInterference,
        ];
        let mut first = DecisionEngine::standard(3).unwrap();
        let mut second = DecisionEngine::standard(3).unwrap();
        assert_eq!(run(&mut first, &sequence), run(&mut second, &sequence));
    }

    #[test]
    fn confidence_never_gates_the_decision() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        let low = ClassificationEvent::new(ThreatLabel::WidebandNoise, 0.01);
        assert_eq!(engine.decide(&low), ActionCode::AdaptiveCodingModulation);
    }

    #[test]
    fn reset_matches_a_process_restart() {
        let mut engine = DecisionEngine::standard(3).unwrap();
        run(&mut engine, &[ThreatLabel::Pulsed; 2]);
        engine.reset();
        let actions = run(&mut engine, &[ThreatLabel::Pulsed; 2]);
        assert_eq!(actions, vec![ActionCode::AdaptiveCodingModulation; 2]);
        assert_eq!(engine.history_len(), 2);
    }

    #[test]
    fn shared_engine_serializes_concurrent_cycles() {
        let shared = SharedEngine::new(DecisionEngine::standard(3).unwrap());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let engine = shared.clone();
            handles.push(thread::spawn(move || {
                let mut actions = Vec::new();
                for _ in 0..25 {
                    actions.push(engine.decide(&event(ThreatLabel::NarrowbandContinuous)));
                }
                actions
            }));
        }

        let mut total = 0;
        for handle in handles {
            let actions = handle.join().unwrap();
            total += actions.len();
            assert!(actions
                .iter()
                .all(|a| matches!(a, ActionCode::NotchFilter | ActionCode::Emergency)));
        }
        // No cycle lost or duplicated, and the window never overflows.
        assert_eq!(total, 200);
        assert!(shared.history_len() <= 3);
    }
}
