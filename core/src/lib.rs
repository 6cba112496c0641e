//! Decision and classification core for the satellite interference-defense
//! platform.
//!
//! The modules mirror the legacy cognitive-defense controller while providing
//! an encapsulated persistence window, a fail-fast mitigation policy table,
//! and well-defined collaborator boundaries.

pub mod adapter;
pub mod decision;
pub mod dsp;
pub mod prelude;
pub mod telemetry;
pub mod threat;

use ndarray::ArrayView2;
use num_complex::Complex32;
use serde::{Deserialize, Serialize};
use threat::{ActionCode, ClassificationEvent, ThreatLabel};

/// Shared configuration for a monitoring session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Consecutive identical classifications required before escalation.
    pub persistence_window: usize,
    /// Sample count the classifier input window is shaped to.
    pub window_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            persistence_window: 3,
            window_len: 1024,
        }
    }
}

/// Common error type for the defense core.
#[derive(thiserror::Error, Debug)]
pub enum ShieldError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("adapter failure: {0}")]
    Adapter(String),
    #[error("dispatch failure: {0}")]
    Dispatch(String),
}

pub type ShieldResult<T> = Result<T, ShieldError>;

/// Trait describing the external classifier boundary. Implementations receive
/// the preprocessed two-channel feature tensor and return one labelled event.
pub trait Classifier {
    fn classify(&self, features: ArrayView2<'_, f32>) -> ShieldResult<ClassificationEvent>;
}

/// Trait describing the external signal-generation boundary.
pub trait SignalSource {
    fn generate(&self, scenario: ThreatLabel) -> ShieldResult<Vec<Complex32>>;
}

/// Trait describing the fire-and-forget mitigation/visualization boundary.
pub trait ActionDispatcher {
    fn dispatch(&self, action: ActionCode) -> ShieldResult<()>;
}
