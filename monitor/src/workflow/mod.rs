pub mod config;
pub mod runner;

pub use config::MonitorConfig;
pub use runner::{CycleReport, Runner};
