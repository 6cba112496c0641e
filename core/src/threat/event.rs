use crate::threat::ThreatLabel;
use serde::{Deserialize, Serialize};

/// One classifier verdict. `confidence` lies in `[0, 1]` and is observational
/// only: the decision engine reports it but never gates on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassificationEvent {
    pub label: ThreatLabel,
    pub confidence: f32,
}

impl ClassificationEvent {
    pub fn new(label: ThreatLabel, confidence: f32) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}
