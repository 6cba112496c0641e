pub mod action;
pub mod event;
pub mod label;

pub use action::{ActionCode, SeverityTier};
pub use event::ClassificationEvent;
pub use label::ThreatLabel;
