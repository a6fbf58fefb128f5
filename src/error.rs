//! Error types for pipeline operations

use thiserror::Error;

/// Errors that can occur while running the pipeline.
///
/// The queue and frame operations are infallible by design; failure is
/// confined to worker thread lifecycle (spawn refusal or a panic surfacing
/// at join time).
#[derive(Error, Debug)]
pub enum PipeError {
    /// A worker thread panicked before the driver could join it
    #[error("Worker thread panicked: {name}")]
    WorkerPanicked {
        /// Thread name ("producer" or "consumer")
        name: String,
    },

    /// The OS refused to spawn a worker thread
    #[error("Failed to spawn {name} thread: {source}")]
    SpawnFailed {
        /// Thread name ("producer" or "consumer")
        name: String,
        /// Source IO error
        source: std::io::Error,
    },
}

/// Result type for pipeline operations
pub type PipeResult<T> = Result<T, PipeError>;
