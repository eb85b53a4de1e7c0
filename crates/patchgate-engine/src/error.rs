//! Error taxonomy for the engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an evaluation.
///
/// Size-based rejection is NOT an error; it is the
/// [`PatchOutcome::Rejected`](crate::PatchOutcome::Rejected) variant. These
/// errors cover I/O only, are returned as values, and trigger no retries
/// inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input text could not be read or decoded.
    #[error("failed to read input {}", path.display())]
    InputUnreadable {
        /// Path of the unreadable input.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing the patch artifact failed; the computed outcome is discarded
    /// rather than returned half-populated.
    #[error("failed to persist patch to {}", path.display())]
    PersistFailure {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
