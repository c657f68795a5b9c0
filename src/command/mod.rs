// ============================================================================
// File: src/command/mod.rs
// ----------------------------------------------------------------------------
// Capability seam for running external disk tools.
//
// Everything that touches the operating system (fdisk, mkdir, mount) goes
// through `CommandRunner`, so the inventory and mount logic can be exercised
// with canned output instead of real processes.
// ============================================================================

mod system;

#[cfg(test)]
pub(crate) mod scripted;

pub use system::{SystemRunner, locate};

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// Runs one external program to completion
///
/// Implementations block the calling thread until the process exits. No
/// timeout is applied: a hung tool blocks its caller indefinitely.
pub trait CommandRunner: Send + Sync + std::fmt::Debug {
    /// Run `program` with `args` and capture its combined output
    ///
    /// # Returns
    /// `Ok` whenever the process was started, regardless of exit status;
    /// `Err(CommandError::Launch)` when it could not be started.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, CommandError>;
}

/// Exit status plus combined stdout/stderr text of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub status: Option<i32>,

    /// Standard output followed by standard error
    pub output: String,
}

impl CommandOutput {
    /// Output of a command that exited with `code`
    pub fn exited<O: Into<String>>(code: i32, output: O) -> Self {
        Self {
            status: Some(code),
            output: output.into(),
        }
    }

    /// True only for exit code 0
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Turn an unsuccessful exit into `CommandError::Failed`
    pub fn check(self, program: &str) -> Result<Self, CommandError> {
        if self.success() {
            Ok(self)
        } else {
            Err(CommandError::Failed {
                program: program.to_string(),
                status: self.status,
                output: self.output,
            })
        }
    }
}
