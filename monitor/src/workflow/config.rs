use crate::generator::ScenarioConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use shieldcore::EngineConfig;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub persistence_window: usize,
    pub window_len: usize,
    pub cycles: usize,
    pub seed: u64,
    pub jnr_db: f32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            persistence_window: 3,
            window_len: 1024,
            cycles: 12,
            seed: 0,
            jnr_db: 30.0,
        }
    }
}

impl MonitorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading monitor config {}", path_ref.display()))?;
        let config: MonitorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing monitor config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        persistence_window: usize,
        window_len: usize,
        cycles: usize,
        seed: u64,
        jnr_db: f32,
    ) -> Self {
        Self {
            persistence_window,
            window_len,
            cycles,
            seed,
            jnr_db,
        }
    }

    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            persistence_window: self.persistence_window,
            window_len: self.window_len,
        }
    }

    pub fn to_scenario_config(&self) -> ScenarioConfig {
        ScenarioConfig {
            window_len: self.window_len,
            seed: self.seed,
            jnr_db: self.jnr_db,
            ..Default::default()
        }
    }
}
