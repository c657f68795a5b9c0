// ============================================================================
// File: src/config.rs
// ----------------------------------------------------------------------------
// Runtime configuration: listen address, static root and external commands.
// ============================================================================

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default directory for the bundled web front-end
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// An external program plus the fixed arguments it is always invoked with
///
/// Per-request arguments (a device, a target path) are appended after the
/// fixed ones by `args_with`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or absolute path
    pub program: String,

    /// Leading arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec with no fixed arguments
    pub fn new<P: Into<String>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument
    pub fn with_arg<A: Into<String>>(mut self, arg: A) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Replace all fixed arguments
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Fixed arguments followed by `extra`
    pub fn args_with(&self, extra: &[&str]) -> Vec<String> {
        self.args
            .iter()
            .cloned()
            .chain(extra.iter().map(|arg| (*arg).to_string()))
            .collect()
    }
}

/// The three external tools the service drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSet {
    /// Disk listing, e.g. `fdisk -l`
    pub listing: CommandSpec,

    /// Idempotent directory creation, e.g. `mkdir -p`
    pub mkdir: CommandSpec,

    /// Mount, invoked as `<program> <args..> <device> <path>`
    pub mount: CommandSpec,
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            listing: CommandSpec::new("fdisk").with_arg("-l"),
            mkdir: CommandSpec::new("mkdir").with_arg("-p"),
            mount: CommandSpec::new("mount"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,

    /// Root directory served for non-API paths
    pub static_dir: PathBuf,

    /// External commands
    pub commands: CommandSet,
}

impl ServerConfig {
    /// Create a configuration with defaults for everything
    pub fn new() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            commands: CommandSet::default(),
        }
    }

    /// Set the listen address
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the static file root
    pub fn with_static_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the disk listing command
    pub fn with_listing_command(mut self, spec: CommandSpec) -> Self {
        self.commands.listing = spec;
        self
    }

    /// Set the directory creation command
    pub fn with_mkdir_command(mut self, spec: CommandSpec) -> Self {
        self.commands.mkdir = spec;
        self
    }

    /// Set the mount command
    pub fn with_mount_command(mut self, spec: CommandSpec) -> Self {
        self.commands.mount = spec;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
