//! Counter-producing worker.
//!
//! Owns a private `u32` counter. Each cycle it encodes the counter as one
//! little-endian frame, pushes the whole frame under a single lock
//! acquisition, increments, and sleeps a fixed interval. The sleep throttles
//! production; it never blocks the consumer, which holds the lock only for
//! its own whole-frame pops.

use crate::frame::encode;
use crate::queue::SharedByteQueue;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Producer worker. Runs on its own thread until the running flag clears.
pub struct Producer {
    queue: Arc<SharedByteQueue>,
    running: Arc<AtomicBool>,
    interval: Duration,
    counter: u32,
}

impl Producer {
    /// Create a producer over the shared queue and cancellation flag.
    ///
    /// `interval` is the per-cycle sleep (10 ms in the stock pipeline).
    pub fn new(queue: Arc<SharedByteQueue>, running: Arc<AtomicBool>, interval: Duration) -> Self {
        Self {
            queue,
            running,
            interval,
            counter: 0,
        }
    }

    /// Run the production loop. Returns the number of frames pushed.
    ///
    /// The flag is checked at the top of every cycle, so cancellation takes
    /// effect within one `interval` of the flag clearing. Cannot fail.
    pub fn run(mut self) -> u64 {
        debug!("producer started (interval {:?})", self.interval);
        let mut frames = 0u64;

        while self.running.load(Ordering::Relaxed) {
            self.produce_once();
            frames += 1;
            thread::sleep(self.interval);
        }

        debug!("producer stopped after {frames} frames");
        frames
    }

    /// One production cycle: encode, push whole frame, increment.
    ///
    /// The counter wraps at `u32::MAX`; the wrap is not an error.
    fn produce_once(&mut self) {
        self.queue.push_frame(encode(self.counter));
        self.counter = self.counter.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::decode;

    fn test_producer(queue: &Arc<SharedByteQueue>) -> Producer {
        Producer::new(
            Arc::clone(queue),
            Arc::new(AtomicBool::new(false)),
            Duration::from_millis(1),
        )
    }

    #[test]
    fn produces_sequential_frames() {
        let queue = Arc::new(SharedByteQueue::new());
        let mut producer = test_producer(&queue);

        for _ in 0..5 {
            producer.produce_once();
        }

        for expected in 0..5u32 {
            assert_eq!(decode(queue.try_pop_frame().unwrap()), expected);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn counter_wraps_without_panic() {
        let queue = Arc::new(SharedByteQueue::new());
        let mut producer = test_producer(&queue);
        producer.counter = u32::MAX;

        producer.produce_once();
        producer.produce_once();

        assert_eq!(decode(queue.try_pop_frame().unwrap()), u32::MAX);
        assert_eq!(decode(queue.try_pop_frame().unwrap()), 0);
    }

    #[test]
    fn cleared_flag_stops_loop_immediately() {
        let queue = Arc::new(SharedByteQueue::new());
        // Flag starts false: run() must exit on the first loop-top check
        // without producing anything.
        let frames = test_producer(&queue).run();
        assert_eq!(frames, 0);
        assert!(queue.is_empty());
    }
}
