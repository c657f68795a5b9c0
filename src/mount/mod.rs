// ============================================================================
// File: src/mount/mod.rs
// ----------------------------------------------------------------------------
// Mount orchestration.
//
// A mount request runs at most two external commands, in order:
// - directory creation for the target path (idempotent, never rolled back)
// - the mount tool itself, whose combined output is surfaced verbatim
// Nothing is retried.
// ============================================================================

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::command::CommandRunner;
use crate::config::{CommandSet, CommandSpec};
use crate::error::MountError;


/// Message reported when the mount tool exits successfully
pub const MOUNT_SUCCESS_MESSAGE: &str = "Disk mounted successfully";

/// A request to mount `device` on `path`
///
/// Missing JSON fields decode to empty strings so they are reported by
/// validation rather than as a decoding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountRequest {
    /// Source device, e.g. `/dev/sdb1`
    #[serde(default)]
    pub device: String,

    /// Target directory, e.g. `/mnt/usb`
    #[serde(default)]
    pub path: String,
}

impl MountRequest {
    pub fn new<D: Into<String>, P: Into<String>>(device: D, path: P) -> Self {
        Self {
            device: device.into(),
            path: path.into(),
        }
    }

    /// Both fields must be non-empty
    pub fn validate(&self) -> Result<(), MountError> {
        if self.device.is_empty() || self.path.is_empty() {
            return Err(MountError::MissingFields);
        }
        Ok(())
    }
}

/// Result of a mount attempt as reported to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountOutcome {
    pub success: bool,
    pub message: String,
}

impl MountOutcome {
    pub fn mounted() -> Self {
        Self {
            success: true,
            message: MOUNT_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed<M: Into<String>>(message: M) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Result<(), MountError>> for MountOutcome {
    fn from(result: Result<(), MountError>) -> Self {
        match result {
            Ok(()) => Self::mounted(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Validates requests, prepares the target directory and mounts
#[derive(Debug, Clone)]
pub struct MountOrchestrator {
    runner: Arc<dyn CommandRunner>,
    mkdir: CommandSpec,
    mount: CommandSpec,
}

impl MountOrchestrator {
    /// Create an orchestrator using explicit directory and mount commands
    pub fn new(runner: Arc<dyn CommandRunner>, mkdir: CommandSpec, mount: CommandSpec) -> Self {
        Self {
            runner,
            mkdir,
            mount,
        }
    }

    /// Create an orchestrator from the configured command set
    pub fn from_commands(runner: Arc<dyn CommandRunner>, commands: &CommandSet) -> Self {
        Self::new(runner, commands.mkdir.clone(), commands.mount.clone())
    }

    /// Mount `request.device` on `request.path`
    ///
    /// Blocks until the external commands exit. Failure messages take
    /// precedence in the order validation, directory creation, mount tool.
    pub fn mount(&self, request: &MountRequest) -> MountOutcome {
        let result = self.try_mount(request);
        match &result {
            Ok(()) => info!("Mounted {} at {}", request.device, request.path),
            Err(e) => warn!("Mount of {:?} at {:?} failed: {}", request.device, request.path, e),
        }
        result.into()
    }

    fn try_mount(&self, request: &MountRequest) -> Result<(), MountError> {
        request.validate()?;
        self.ensure_directory(&request.path)?;
        self.mount_device(&request.device, &request.path)
    }

    /// Create `path` and any missing ancestors; succeeds if it already exists
    pub fn ensure_directory(&self, path: &str) -> Result<(), MountError> {
        let program = &self.mkdir.program;
        self.runner
            .run(program, &self.mkdir.args_with(&[path]))
            .and_then(|output| output.check(program))
            .map(|_| ())
            .map_err(MountError::Directory)
    }

    fn mount_device(&self, device: &str, path: &str) -> Result<(), MountError> {
        let args = self.mount.args_with(&[device, path]);
        match self.runner.run(&self.mount.program, &args) {
            Ok(output) if output.success() => Ok(()),
            Ok(output) => Err(MountError::Mount(output.output)),
            Err(e) => Err(MountError::Mount(e.to_string())),
        }
    }
}
