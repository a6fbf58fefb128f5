//! Frame-draining worker and its reporting seam.
//!
//! The consumer busy-polls the queue: each cycle it attempts one whole-frame
//! pop, decodes on success, and reports the value through a [`ValueSink`]
//! when it is non-zero. There is no sleep in the loop, only a spin-loop
//! hint on the empty path, so drained values surface with minimal latency
//! at the cost of a spinning core.
//!
//! The zero filter is part of the pipeline's observable contract: a decoded
//! value of exactly 0 is never reported, which silently drops the first
//! frame the producer emits (counter = 0).

use crate::frame::decode;
use crate::queue::SharedByteQueue;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Destination for decoded counter values.
///
/// The trait exists so tests can capture reported values; production code
/// uses [`ConsoleSink`].
pub trait ValueSink {
    /// Report one non-zero decoded value.
    fn report(&mut self, value: u32);
}

/// Sink that prints `Got <value>` to standard output.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ValueSink for ConsoleSink {
    fn report(&mut self, value: u32) {
        println!("Got {value}");
    }
}

/// Consumer worker. Runs on its own thread until the running flag clears.
pub struct Consumer<S: ValueSink> {
    queue: Arc<SharedByteQueue>,
    running: Arc<AtomicBool>,
    sink: S,
}

impl<S: ValueSink> Consumer<S> {
    /// Create a consumer over the shared queue and cancellation flag.
    pub fn new(queue: Arc<SharedByteQueue>, running: Arc<AtomicBool>, sink: S) -> Self {
        Self {
            queue,
            running,
            sink,
        }
    }

    /// Run the drain loop. Returns the number of values reported.
    ///
    /// Prints the startup greeting, then polls until the flag clears. The
    /// flag is checked at the top of every cycle; with no sleep in the loop,
    /// cancellation takes effect almost immediately. Cannot fail.
    pub fn run(mut self) -> u64 {
        println!("Hello from consumer");
        debug!("consumer started");
        let mut reported = 0u64;

        while self.running.load(Ordering::Relaxed) {
            if self.poll_once() {
                reported += 1;
            } else {
                std::hint::spin_loop();
            }
        }

        debug!("consumer stopped after {reported} reported values");
        reported
    }

    /// One drain cycle. Returns `true` if a value was reported.
    ///
    /// Fewer than 4 buffered bytes is not an error; the frame simply is not
    /// ready yet and the next cycle retries.
    fn poll_once(&mut self) -> bool {
        let Some(frame) = self.queue.try_pop_frame() else {
            return false;
        };
        let value = decode(frame);
        if value != 0 {
            self.sink.report(value);
            return true;
        }
        false
    }
}
