use shieldcore::prelude::{ActionCode, ActionDispatcher, ShieldError, ShieldResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Fire-and-forget mitigation dispatcher: narrates the action over the log
/// facade and optionally appends one line per action to a mitigation log.
pub struct ConsoleDispatcher {
    log_path: Option<PathBuf>,
}

impl ConsoleDispatcher {
    pub fn new() -> Self {
        Self { log_path: None }
    }

    pub fn with_log_file(path: PathBuf) -> Self {
        Self {
            log_path: Some(path),
        }
    }

    fn narration(action: ActionCode) -> &'static str {
        match action {
            ActionCode::Nominal => "link nominal, spectrum monitoring only",
            ActionCode::Agc => "automatic gain adjustment engaged",
            ActionCode::NotchFilter => "adaptive notch filtering deployed",
            ActionCode::AdaptiveCodingModulation => {
                "dynamic parameter fallback (QPSK -> BPSK coding)"
            }
            ActionCode::BeamformingStbc => "beamforming with STBC coding engaged",
            ActionCode::Emergency => "full receive-chain reconfiguration, emergency mode",
        }
    }
}

impl Default for ConsoleDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionDispatcher for ConsoleDispatcher {
    fn dispatch(&self, action: ActionCode) -> ShieldResult<()> {
        log::info!(target: "monitor", "action {}: {}", action, Self::narration(action));

        if let Some(path) = &self.log_path {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| {
                    ShieldError::Dispatch(format!(
                        "opening mitigation log {}: {err}",
                        path.display()
                    ))
                })?;
            writeln!(file, "{} {}", action, Self::narration(action))
                .map_err(|err| ShieldError::Dispatch(format!("writing mitigation log: {err}")))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dispatch_appends_one_line_per_action() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mitigation.log");
        let dispatcher = ConsoleDispatcher::with_log_file(path.clone());

        dispatcher.dispatch(ActionCode::NotchFilter).unwrap();
        dispatcher.dispatch(ActionCode::Emergency).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("FILTER"));
        assert!(lines[1].starts_with("EMERGENCY"));
    }

    #[test]
    fn unwritable_log_surfaces_as_dispatch_error() {
        let dir = tempdir().unwrap();
        // The path is a directory, so the append open fails.
        let dispatcher = ConsoleDispatcher::with_log_file(dir.path().to_path_buf());
        assert!(matches!(
            dispatcher.dispatch(ActionCode::Agc),
            Err(ShieldError::Dispatch(_))
        ));
    }

    #[test]
    fn console_only_dispatch_never_fails() {
        let dispatcher = ConsoleDispatcher::new();
        assert!(dispatcher.dispatch(ActionCode::Nominal).is_ok());
    }
}
