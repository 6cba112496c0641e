use crate::dispatch::ConsoleDispatcher;
use crate::generator::ScenarioSource;
use crate::inference::BypassClassifier;
use crate::workflow::config::MonitorConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use shieldcore::dsp::SpectrumHelper;
use shieldcore::prelude::{
    ActionCode, ActionDispatcher, ClassificationAdapter, ClassificationEvent, DecisionEngine,
    SharedEngine, SignalSource, ThreatLabel,
};
use shieldcore::telemetry::{MetricsRecorder, MetricsSnapshot};
use std::sync::Mutex;

/// Resolution of the status-bridge spectrum snapshot.
pub const SPECTRUM_BINS: usize = 128;

/// Outcome of one monitoring cycle. `event` and `action` are absent when the
/// classification failed and the decision was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    pub scenario: ThreatLabel,
    pub event: Option<ClassificationEvent>,
    pub action: Option<ActionCode>,
    pub spectrum_db: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub metrics: MetricsSnapshot,
    pub last: Option<CycleReport>,
}

/// Monitoring-loop orchestrator: scenario generation, bypass classification,
/// decision, dispatch. Shareable behind `Arc` with the status bridge; the
/// engine itself serializes concurrent cycles.
pub struct Runner {
    engine: SharedEngine,
    adapter: ClassificationAdapter<BypassClassifier>,
    source: ScenarioSource,
    dispatcher: ConsoleDispatcher,
    spectrum: SpectrumHelper,
    metrics: MetricsRecorder,
    schedule_rng: Mutex<StdRng>,
}

impl Runner {
    pub fn new(config: MonitorConfig) -> anyhow::Result<Self> {
        let classifier = BypassClassifier::new(config.seed);
        Self::with_parts(config, classifier, ConsoleDispatcher::new())
    }

    pub fn with_parts(
        config: MonitorConfig,
        classifier: BypassClassifier,
        dispatcher: ConsoleDispatcher,
    ) -> anyhow::Result<Self> {
        let engine = SharedEngine::new(DecisionEngine::standard(config.persistence_window)?);
        let adapter = ClassificationAdapter::new(classifier, config.window_len);
        let source = ScenarioSource::new(config.to_scenario_config());
        Ok(Self {
            engine,
            adapter,
            source,
            dispatcher,
            spectrum: SpectrumHelper::new(SPECTRUM_BINS),
            metrics: MetricsRecorder::new(),
            schedule_rng: Mutex::new(StdRng::seed_from_u64(config.seed ^ 0x5ca1ab1e)),
        })
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Clears the engine's persistence window, equivalent to a process
    /// restart of the decision core.
    pub fn reset(&self) {
        self.engine.reset();
    }

    /// Next scenario to inject. Biased toward repeated burst jamming so the
    /// escalation path gets exercised in short demo runs.
    pub fn pick_scenario(&self) -> ThreatLabel {
        let mut rng = self.schedule_rng.lock().unwrap();
        if rng.gen::<f32>() < 0.2 {
            ThreatLabel::BurstNoise
        } else {
            ThreatLabel::ALL[rng.gen_range(0..ThreatLabel::ALL.len())]
        }
    }

    /// Runs one classification cycle to completion. A classification failure
    /// skips the decision entirely without touching the persistence window,
    /// and a dispatch failure is logged without affecting engine state.
    pub fn execute_cycle(&self, scenario: ThreatLabel) -> CycleReport {
        self.metrics.record_cycle();
        log::info!(target: "monitor", "incoming window: scenario {}", scenario);

        let samples = match self.source.generate(scenario) {
            Ok(samples) => samples,
            Err(err) => {
                log::warn!(target: "monitor", "signal source failed, cycle skipped: {err}");
                self.metrics.record_adapter_error();
                return CycleReport {
                    scenario,
                    event: None,
                    action: None,
                    spectrum_db: Vec::new(),
                };
            }
        };
        let spectrum_db = self.spectrum.power_db(&samples);

        self.adapter.classifier().prime(scenario);
        let event = match self.adapter.classify_window(&samples) {
            Ok(event) => event,
            Err(err) => {
                log::warn!(target: "monitor", "classification failed, cycle skipped: {err}");
                self.metrics.record_adapter_error();
                return CycleReport {
                    scenario,
                    event: None,
                    action: None,
                    spectrum_db,
                };
            }
        };

        let action = self.engine.decide(&event);
        self.metrics.record_decision();
        if action == ActionCode::Emergency {
            self.metrics.record_emergency();
        }

        if let Err(err) = self.dispatcher.dispatch(action) {
            log::warn!(target: "monitor", "dispatch failed, continuing: {err}");
            self.metrics.record_dispatch_error();
        }

        CycleReport {
            scenario,
            event: Some(event),
            action: Some(action),
            spectrum_db,
        }
    }

    /// Runs `cycles` scheduled cycles and returns the session summary.
    pub fn run(&self, cycles: usize) -> RunSummary {
        let mut last = None;
        for _ in 0..cycles {
            let scenario = self.pick_scenario();
            last = Some(self.execute_cycle(scenario));
        }
        RunSummary {
            metrics: self.metrics.snapshot(),
            last,
        }
    }
}
