use anyhow::Context;
use bridge::StatusBridge;
use clap::Parser;
use dispatch::ConsoleDispatcher;
use inference::BypassClassifier;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::{MonitorConfig, Runner};

mod bridge;
mod dispatch;
mod generator;
mod inference;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Monitoring-loop driver for the satellite defense core")]
struct Args {
    /// Run a fixed number of offline cycles and emit a session summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a monitor config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 3)]
    persistence_window: usize,
    #[arg(long, default_value_t = 1024)]
    window_len: usize,
    #[arg(long, default_value_t = 12)]
    cycles: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 30.0)]
    jnr_db: f32,
    /// Fraction of windows the bypass classifier mislabels
    #[arg(long, default_value_t = 0.0)]
    confusion_rate: f32,
    /// Inject a classification failure every Nth cycle (0 disables)
    #[arg(long, default_value_t = 0)]
    fail_every: usize,
    /// Keep the status bridge alive for injected scenario cycles
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.workflow {
        MonitorConfig::load(path)?
    } else {
        MonitorConfig::from_args(
            args.persistence_window,
            args.window_len,
            args.cycles,
            args.seed,
            args.jnr_db,
        )
    };

    let action_log = PathBuf::from("tools/data/mitigation_actions.log");
    if let Some(parent) = action_log.parent() {
        fs::create_dir_all(parent)?;
    }
    let classifier = BypassClassifier::new(config.seed)
        .with_confusion(args.confusion_rate)
        .with_failure_every(args.fail_every);
    let runner = Arc::new(Runner::with_parts(
        config.clone(),
        classifier,
        ConsoleDispatcher::with_log_file(action_log),
    )?);
    let status_bridge = StatusBridge::new(runner.clone());

    if args.offline {
        let summary = runner.run(config.cycles);
        let metrics = summary.metrics;

        println!(
            "Offline run -> cycles {}, decisions {}, emergencies {}, adapter errors {}, dispatch errors {}",
            metrics.cycles,
            metrics.decisions,
            metrics.emergencies,
            metrics.adapter_errors,
            metrics.dispatch_errors
        );

        if let Some(report) = summary.last.as_ref() {
            status_bridge.publish(&runner, report)?;
        }
        status_bridge.publish_status("Offline monitoring session complete.");

        let report_line = format!(
            "cycles={} decisions={} emergencies={} adapter_errors={} dispatch_errors={}\n",
            metrics.cycles,
            metrics.decisions,
            metrics.emergencies,
            metrics.adapter_errors,
            metrics.dispatch_errors
        );
        let report_path = PathBuf::from("tools/data/session_summary.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report_line.as_bytes())?;
    }
    if args.serve {
        status_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
