pub mod profile;

pub use profile::{ScenarioConfig, ScenarioSource};
