use crate::bridge::StatusModel;
use crate::workflow::{CycleReport, Runner};
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use shieldcore::threat::ThreatLabel;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Deserialize)]
struct CycleRequest {
    scenario: ThreatLabel,
}

/// Bridge that hosts the session-status HTTP endpoint and accepts injected
/// scenario cycles.
pub struct StatusBridge {
    state: Arc<RwLock<StatusModel>>,
}

fn apply_report(state: &Arc<RwLock<StatusModel>>, runner: &Runner, report: &CycleReport) {
    let mut guard = state.write().unwrap();
    guard.metrics = runner.metrics();
    guard.last_scenario = Some(report.scenario);
    guard.last_event = report.event;
    guard.last_action = report.action;
    guard.spectrum_db = report.spectrum_db.clone();
}

impl StatusBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(StatusModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let status_route = warp::path("status")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<StatusModel>>| warp::reply::json(&*state.read().unwrap()));

        let cycle_route = warp::path("cycle")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |request: CycleRequest,
                 state: Arc<RwLock<StatusModel>>,
                 runner: Arc<Runner>| async move {
                    let report = runner.execute_cycle(request.scenario);
                    apply_report(&state, &runner, &report);
                    let reply = json!({
                        "status": if report.action.is_some() { "ok" } else { "skipped" },
                        "scenario": report.scenario,
                        "action": report.action,
                    });
                    Ok::<_, warp::Rejection>(warp::reply::with_status(
                        warp::reply::json(&reply),
                        StatusCode::OK,
                    ))
                },
            );

        let reset_route = warp::path("reset")
            .and(warp::post())
            .and(runner_filter)
            .map(|runner: Arc<Runner>| {
                runner.reset();
                warp::reply::json(&json!({"status": "ok"}))
            });

        thread::spawn(move || {
            let routes = status_route.or(cycle_route).or(reset_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, runner: &Runner, report: &CycleReport) -> Result<()> {
        apply_report(&self.state, runner, report);
        let guard = self.state.read().unwrap();
        println!(
            "[BRIDGE] cycles: {}, emergencies: {}, last action: {}",
            guard.metrics.cycles,
            guard.metrics.emergencies,
            guard
                .last_action
                .map(|a| a.to_string())
                .unwrap_or_else(|| "none".into())
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[BRIDGE] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> StatusModel {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::MonitorConfig;
    use shieldcore::threat::ActionCode;

    #[test]
    fn bridge_publishes_cycle_state() {
        let config = MonitorConfig {
            window_len: 128,
            ..Default::default()
        };
        let runner = Arc::new(Runner::new(config).unwrap());
        let bridge = StatusBridge::new(runner.clone());

        let report = runner.execute_cycle(ThreatLabel::AtmosphericFading);
        bridge.publish(&runner, &report).unwrap();

        let snapshot = bridge.snapshot();
        assert_eq!(snapshot.last_scenario, Some(ThreatLabel::AtmosphericFading));
        assert_eq!(snapshot.last_action, Some(ActionCode::Agc));
        assert_eq!(snapshot.metrics.cycles, 1);
    }
}
