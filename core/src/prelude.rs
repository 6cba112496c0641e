pub use crate::adapter::ClassificationAdapter;
pub use crate::decision::{DecisionEngine, HistoryTracker, PolicyTable, SharedEngine};
pub use crate::threat::{ActionCode, ClassificationEvent, SeverityTier, ThreatLabel};
pub use crate::{
    ActionDispatcher, Classifier, EngineConfig, ShieldError, ShieldResult, SignalSource,
};
