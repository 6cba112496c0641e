use ndarray::ArrayView2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use shieldcore::prelude::{ClassificationEvent, Classifier, ShieldError, ShieldResult, ThreatLabel};
use std::sync::Mutex;

/// Stand-in for the trained CNN: echoes the scenario label the runner primes
/// it with, the legacy controller's bypass/override mode.
///
/// Two fault knobs exercise the loop's error policy: `confusion_rate`
/// mislabels a fraction of windows with reduced confidence, and `fail_every`
/// turns every Nth inference into an adapter failure.
pub struct BypassClassifier {
    truth: Mutex<Option<ThreatLabel>>,
    rng: Mutex<StdRng>,
    calls: Mutex<usize>,
    confusion_rate: f32,
    fail_every: Option<usize>,
}

impl BypassClassifier {
    pub fn new(seed: u64) -> Self {
        Self {
            truth: Mutex::new(None),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            calls: Mutex::new(0),
            confusion_rate: 0.0,
            fail_every: None,
        }
    }

    pub fn with_confusion(mut self, rate: f32) -> Self {
        self.confusion_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_failure_every(mut self, n: usize) -> Self {
        self.fail_every = (n > 0).then_some(n);
        self
    }

    /// Sets the ground-truth label for the next inference. Consumed by
    /// `classify`; classifying without priming is an adapter failure.
    pub fn prime(&self, label: ThreatLabel) {
        *self.truth.lock().unwrap() = Some(label);
    }
}

impl Classifier for BypassClassifier {
    fn classify(&self, features: ArrayView2<'_, f32>) -> ShieldResult<ClassificationEvent> {
        if features.ncols() != 2 || features.nrows() == 0 {
            return Err(ShieldError::Adapter(format!(
                "unexpected feature tensor shape {:?}",
                features.shape()
            )));
        }

        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if let Some(n) = self.fail_every {
            if call % n == 0 {
                return Err(ShieldError::Adapter("injected inference failure".into()));
            }
        }

        let truth = self
            .truth
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ShieldError::Adapter("no scenario primed for bypass mode".into()))?;

        let mut rng = self.rng.lock().unwrap();
        if self.confusion_rate > 0.0 && rng.gen::<f32>() < self.confusion_rate {
            let others: Vec<ThreatLabel> = ThreatLabel::ALL
                .into_iter()
                .filter(|&l| l != truth)
                .collect();
            let label = others[rng.gen_range(0..others.len())];
            let confidence = rng.gen_range(0.5..0.7);
            return Ok(ClassificationEvent::new(label, confidence));
        }

        let confidence = rng.gen_range(0.88..0.99);
        Ok(ClassificationEvent::new(truth, confidence))
    }
}
