//! Error types for modot operations.
//!
//! Modot follows a "best effort" approach for parsing: a single malformed
//! edge record never aborts the parse. Those records are collected in
//! [`ParseSummary`](crate::graph::ParseSummary) rather than surfaced as
//! errors. Only infrastructure failures (the edge stream breaking mid-read,
//! the output sink rejecting a write, the edge-stream subprocess failing)
//! terminate an operation.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for modot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for modot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge stream failed mid-read.
    ///
    /// Graph state accumulated before the failure is still valid and may be
    /// rendered, but the parse was incomplete.
    #[error("failed to read edge stream: {0}")]
    Stream(#[source] io::Error),

    /// The output sink rejected a write during rendering.
    #[error("failed to write graph output: {0}")]
    Sink(#[source] io::Error),

    /// The edge-stream subprocess could not be spawned or run.
    #[error("failed to run `{command}`: {source}")]
    Command {
        /// The command line that was attempted.
        command: String,
        /// The underlying spawn/run failure.
        #[source]
        source: io::Error,
    },

    /// The edge-stream subprocess exited unsuccessfully.
    #[error("`{command}` exited with {status}: {stderr}")]
    CommandStatus {
        /// The command line that was run.
        command: String,
        /// The non-success exit status.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// An input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    OpenInput {
        /// Path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An output file could not be created.
    #[error("failed to create {}: {source}", path.display())]
    CreateOutput {
        /// Path that failed to create.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
