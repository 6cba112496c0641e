use log::{info, warn};

/// Thin facade over the `log` crate used by the decision core.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!(target: "shieldcore", "{}", message);
    }

    pub fn record_warning(&self, message: &str) {
        warn!(target: "shieldcore", "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
