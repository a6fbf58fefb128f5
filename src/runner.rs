//! Pipeline driver: start both workers, wait out the run window, join.
//!
//! The runner owns the queue and the cancellation flag, creates both before
//! either worker starts, and hands each worker an `Arc` handle. Shutdown is
//! cooperative: clearing the flag does not interrupt an in-progress sleep or
//! a lock-protected operation, so the join tolerates up to one producer
//! interval of latency.

use crate::consumer::{ConsoleSink, Consumer};
use crate::error::{PipeError, PipeResult};
use crate::producer::Producer;
use crate::queue::SharedByteQueue;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info};

/// Run parameters for one pipeline execution.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Wall-clock run window before the flag is cleared.
    pub duration: Duration,
    /// Producer per-cycle sleep interval.
    pub interval: Duration,
}

impl Default for RunConfig {
    /// Stock parameters: 20 s run window, 10 ms production interval.
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(20),
            interval: Duration::from_millis(10),
        }
    }
}

/// Counters collected from the workers after a clean join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Frames the producer pushed.
    pub frames_produced: u64,
    /// Non-zero values the consumer reported.
    pub values_reported: u64,
}

/// Driver for one producer/consumer pair.
pub struct PipeRunner {
    config: RunConfig,
    queue: Arc<SharedByteQueue>,
    running: Arc<AtomicBool>,
}

impl PipeRunner {
    /// Create a runner with a fresh empty queue and a raised running flag.
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            queue: Arc::new(SharedByteQueue::new()),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle to the cancellation flag.
    ///
    /// Clearing it stops the run early; the workers exit at their next
    /// loop-top check and `run()` returns after joining them.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    /// Handle to the shared queue.
    pub fn queue(&self) -> Arc<SharedByteQueue> {
        Arc::clone(&self.queue)
    }

    /// Execute one full run: spawn, wait, cancel, join.
    ///
    /// Blocks the calling thread for the configured duration (less if the
    /// flag is cleared externally). The only error path is a worker panic
    /// surfacing at join time.
    pub fn run(&self) -> PipeResult<RunReport> {
        info!(
            "pipeline starting (duration {:?}, interval {:?})",
            self.config.duration, self.config.interval
        );

        let producer = Producer::new(self.queue(), self.running_flag(), self.config.interval);
        let consumer = Consumer::new(self.queue(), self.running_flag(), ConsoleSink);

        let producer_handle = spawn_worker("producer", move || producer.run())?;
        let consumer_handle = spawn_worker("consumer", move || consumer.run())?;

        // Sleep in short slices so an external flag clear (Ctrl+C) ends the
        // wait promptly instead of after the full window.
        let slice = Duration::from_millis(50);
        let mut remaining = self.config.duration;
        while !remaining.is_zero() && self.running.load(Ordering::Relaxed) {
            let step = remaining.min(slice);
            thread::sleep(step);
            remaining -= step;
        }

        debug!("run window elapsed, clearing running flag");
        self.running.store(false, Ordering::SeqCst);

        let frames_produced = join_worker("producer", producer_handle)?;
        let values_reported = join_worker("consumer", consumer_handle)?;

        let report = RunReport {
            frames_produced,
            values_reported,
        };
        info!(
            "pipeline stopped: {} frames produced, {} values reported, {} bytes left queued",
            report.frames_produced,
            report.values_reported,
            self.queue.len()
        );
        Ok(report)
    }
}

/// Spawn a named worker thread.
fn spawn_worker<F>(name: &str, body: F) -> PipeResult<JoinHandle<u64>>
where
    F: FnOnce() -> u64 + Send + 'static,
{
    thread::Builder::new()
        .name(name.to_string())
        .spawn(body)
        .map_err(|source| PipeError::SpawnFailed {
            name: name.to_string(),
            source,
        })
}

/// Join a worker, mapping a panic to [`PipeError::WorkerPanicked`].
fn join_worker(name: &str, handle: JoinHandle<u64>) -> PipeResult<u64> {
    handle.join().map_err(|_| PipeError::WorkerPanicked {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> RunConfig {
        RunConfig {
            duration: Duration::from_millis(200),
            interval: Duration::from_millis(5),
        }
    }

    #[test]
    fn default_config_matches_stock_parameters() {
        let config = RunConfig::default();
        assert_eq!(config.duration, Duration::from_secs(20));
        assert_eq!(config.interval, Duration::from_millis(10));
    }

    #[test]
    fn short_run_produces_and_reports() {
        let runner = PipeRunner::new(short_config());
        let report = runner.run().expect("clean join");

        // ~40 cycles fit in the window; scheduling jitter eats a few.
        assert!(report.frames_produced >= 2);
        // The zero frame is suppressed and the tail frame may be undrained
        // at cancellation, so reported can trail produced by a little.
        assert!(report.values_reported <= report.frames_produced);
        assert!(report.values_reported >= 1);
        // Whole-frame discipline holds through shutdown.
        assert_eq!(runner.queue().len() % crate::frame::FRAME_SIZE, 0);
    }

    #[test]
    fn external_flag_clear_ends_run_early() {
        let runner = PipeRunner::new(RunConfig {
            duration: Duration::from_secs(30),
            interval: Duration::from_millis(5),
        });
        let flag = runner.running_flag();

        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            flag.store(false, Ordering::SeqCst);
        });

        let start = std::time::Instant::now();
        runner.run().expect("clean join");
        canceller.join().unwrap();

        // Far below the 30 s window: the sliced wait noticed the clear.
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
