//! # Framepipe binary
//!
//! Runs the stock pipeline: a producer thread pushing little-endian counter
//! frames every 10 ms, a busy-polling consumer printing `Got <value>` for
//! every non-zero decode, and a 20-second run window. All parameters are
//! overridable from the CLI; the zero-argument invocation reproduces the
//! stock behavior exactly. Ctrl+C ends the run early with a clean join.

use clap::Parser;
use framepipe::{PipeRunner, RunConfig};
use std::process;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// Framepipe — lock-guarded byte FIFO with a framed producer/consumer pair
#[derive(Parser, Debug)]
#[command(name = "framepipe")]
#[command(version)]
#[command(about = "Framed producer/consumer pipeline over a shared byte queue")]
struct Args {
    /// Run window in seconds before both workers are stopped.
    #[arg(long, default_value_t = 20)]
    duration_secs: u64,

    /// Producer sleep interval in milliseconds.
    #[arg(long, default_value_t = 10)]
    interval_ms: u64,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("framepipe v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("framepipe shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig {
        duration: Duration::from_secs(args.duration_secs),
        interval: Duration::from_millis(args.interval_ms),
    };
    let runner = PipeRunner::new(config);

    // Ctrl+C clears the running flag; the run joins cleanly and exits 0.
    let running = runner.running_flag();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        running.store(false, Ordering::SeqCst);
    })?;

    let start = std::time::Instant::now();
    let report = runner.run()?;

    info!(
        "Ran for {:.1?} without crashing ({} frames produced, {} values reported)",
        start.elapsed(),
        report.frames_produced,
        report.values_reported
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
