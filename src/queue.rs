//! Shared byte FIFO guarded by a single mutex.
//!
//! The queue is the only shared mutable state in the pipeline. Its contract
//! is deliberately narrow: bytes go in and come out only in whole 4-byte
//! frames, and every frame transfer happens under a single lock acquisition.
//! That keeps the buffered length a multiple of [`FRAME_SIZE`] at rest, so a
//! reader can never observe a torn or misaligned frame.
//!
//! Splitting a frame across separate lock acquisitions (e.g. pushing bytes
//! one at a time) would reintroduce the misalignment hazard and violates
//! this contract.

use crate::frame::FRAME_SIZE;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Unbounded FIFO byte buffer shared between producer and consumer.
///
/// Thread-safe: all access goes through one internal [`Mutex`]. There is no
/// capacity limit; unbounded growth under a persistently slow consumer is a
/// documented limitation, not a backpressure policy.
#[derive(Debug, Default)]
pub struct SharedByteQueue {
    bytes: Mutex<VecDeque<u8>>,
}

impl SharedByteQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            bytes: Mutex::new(VecDeque::new()),
        }
    }

    /// Append one whole frame at the tail, byte 0 first.
    ///
    /// All 4 bytes land under a single lock acquisition. Never fails.
    pub fn push_frame(&self, frame: [u8; FRAME_SIZE]) {
        let mut bytes = self.bytes.lock();
        bytes.extend(frame);
    }

    /// Remove one whole frame from the head, if at least 4 bytes are buffered.
    ///
    /// Returns `None` without touching the buffer when fewer than
    /// [`FRAME_SIZE`] bytes are available; the caller is expected to retry
    /// on a later cycle. This is the sole read operation.
    pub fn try_pop_frame(&self) -> Option<[u8; FRAME_SIZE]> {
        let mut bytes = self.bytes.lock();
        if bytes.len() < FRAME_SIZE {
            return None;
        }
        let mut frame = [0u8; FRAME_SIZE];
        // Length was checked under this same lock; the drain yields exactly
        // FRAME_SIZE bytes.
        for (slot, byte) in frame.iter_mut().zip(bytes.drain(..FRAME_SIZE)) {
            *slot = byte;
        }
        Some(frame)
    }

    /// Number of bytes currently buffered.
    ///
    /// At rest this is always a multiple of [`FRAME_SIZE`].
    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    /// `true` if no bytes are buffered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage raw bytes without frame alignment. Test-only escape hatch for
    /// exercising the sub-frame-length paths of `try_pop_frame`.
    #[cfg(test)]
    fn push_raw(&self, raw: &[u8]) {
        self.bytes.lock().extend(raw.iter().copied());
    }
}
