use crate::dsp::frame::feature_tensor;
use crate::threat::ClassificationEvent;
use crate::{Classifier, ShieldResult};
use num_complex::Complex32;

/// Wraps the external classifier behind the preprocessing contract: every
/// raw window is shaped and normalized the same way the training data was
/// before the classifier sees it.
///
/// Failures from either step surface as [`crate::ShieldError::Adapter`]; the
/// monitoring loop skips the decision for that cycle so a failed read never
/// counts toward (or breaks) persistence.
pub struct ClassificationAdapter<C: Classifier> {
    classifier: C,
    window_len: usize,
}

impl<C: Classifier> ClassificationAdapter<C> {
    pub fn new(classifier: C, window_len: usize) -> Self {
        Self {
            classifier,
            window_len,
        }
    }

    pub fn classify_window(&self, samples: &[Complex32]) -> ShieldResult<ClassificationEvent> {
        let features = feature_tensor(samples, self.window_len)?;
        self.classifier.classify(features.view())
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }
}
