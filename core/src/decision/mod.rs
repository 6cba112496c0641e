pub mod engine;
pub mod history;
pub mod policy;

pub use engine::{DecisionEngine, SharedEngine};
pub use history::HistoryTracker;
pub use policy::PolicyTable;
