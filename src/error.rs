// ============================================================================
// File: src/error.rs
// ----------------------------------------------------------------------------
// Error types for command execution, inventory, mounting and the HTTP server.
// ============================================================================

use std::io;
use std::net::SocketAddr;

/// Errors raised while running an external command
///
/// A command that starts and exits non-zero is a `Failed` error only once the
/// caller asks for it through `CommandOutput::check`; runners themselves only
/// report launch failures.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The process could not be started at all
    #[error("failed to execute {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("{program} {}", failure_detail(.status, .output))]
    Failed {
        program: String,
        status: Option<i32>,
        output: String,
    },
}

fn failure_detail(status: &Option<i32>, output: &str) -> String {
    let status = match status {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    };
    let output = output.trim();
    if output.is_empty() {
        status
    } else {
        format!("{status}: {output}")
    }
}

/// Errors raised while building the disk inventory
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// The listing command could not be run or reported failure
    #[error(transparent)]
    Listing(#[from] CommandError),

    /// The blocking listing task was cancelled or panicked
    #[error("listing task aborted: {0}")]
    Aborted(String),
}

/// Errors raised by the mount workflow
///
/// The `Display` text of each variant is the message handed back to the
/// operator, so the wording is part of the API.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// Device or path missing from the request
    #[error("Device and path are required")]
    MissingFields,

    /// The target directory could not be created
    #[error("Failed to create mount directory: {0}")]
    Directory(#[source] CommandError),

    /// The mount tool failed; carries its raw diagnostic output
    #[error("Mount failed: {0}")]
    Mount(String),
}

/// Errors raised while starting the HTTP server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen socket could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// Socket level failure after binding
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}
