//! # Framepipe
//!
//! A minimal framed producer/consumer pipeline over a lock-guarded byte FIFO.
//!
//! One thread generates a monotonically increasing 32-bit counter, encodes it
//! as a 4-byte little-endian frame, and appends it to a [`SharedByteQueue`].
//! A second thread drains the queue in whole frames, decodes them, and reports
//! every non-zero value. A shared cancellation flag stops both threads; the
//! [`PipeRunner`] starts them, waits out the configured run window, clears the
//! flag, and joins.
//!
//! ## Concurrency Contract
//!
//! - Both ends move bytes only in whole 4-byte frames, each under a single
//!   lock acquisition. The queue length at rest is therefore always a
//!   multiple of 4 and frames can never be split or interleaved.
//! - The running flag is a single-writer `AtomicBool`; workers check it at
//!   the top of every cycle, so cancellation is cooperative and bounded by
//!   one producer sleep interval.
//! - There is exactly one lock and it is never held across a sleep or a
//!   second acquisition, so deadlock is structurally impossible.
//!
//! ## Usage
//!
//! ```rust
//! use framepipe::{PipeRunner, RunConfig};
//! use std::time::Duration;
//!
//! # fn main() -> framepipe::PipeResult<()> {
//! let runner = PipeRunner::new(RunConfig {
//!     duration: Duration::from_millis(50),
//!     interval: Duration::from_millis(5),
//! });
//! let report = runner.run()?;
//! assert!(report.frames_produced >= report.values_reported);
//! # Ok(())
//! # }
//! ```
//!
//! ## Known Limitations
//!
//! - The queue is unbounded: if the consumer were indefinitely slower than
//!   the producer, memory would grow without limit. No capacity check is
//!   performed; growth is a documented limitation, not a backpressure policy.
//! - The consumer busy-polls (spin-loop hint only, no sleep), trading CPU
//!   for drain latency.
//! - A decoded value of exactly 0 is suppressed, which silently drops the
//!   first frame the producer emits (counter = 0).

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod consumer;
pub mod error;
pub mod frame;
pub mod producer;
pub mod queue;
pub mod runner;

pub use consumer::{Consumer, ConsoleSink, ValueSink};
pub use error::{PipeError, PipeResult};
pub use frame::{FRAME_SIZE, decode, encode};
pub use producer::Producer;
pub use queue::SharedByteQueue;
pub use runner::{PipeRunner, RunConfig, RunReport};
