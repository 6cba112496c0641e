use serde::{Deserialize, Serialize};
use shieldcore::telemetry::MetricsSnapshot;
use shieldcore::threat::{ActionCode, ClassificationEvent, ThreatLabel};

/// Session status published over the HTTP bridge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusModel {
    pub metrics: MetricsSnapshot,
    pub last_scenario: Option<ThreatLabel>,
    pub last_event: Option<ClassificationEvent>,
    pub last_action: Option<ActionCode>,
    pub spectrum_db: Vec<f32>,
}
