//! Disk inventory and mount service.
//!
//! Lists disks and bootable partitions by parsing `fdisk -l` output and
//! mounts devices with `mkdir -p` + `mount`, exposing both over a small JSON
//! HTTP API:
//!
//! - `GET /api/disks` returns the parsed inventory
//! - `POST /api/mount` with `{"device": "...", "path": "..."}` mounts a device
//!
//! All external tools run behind the [`CommandRunner`] trait.

pub mod api;
pub mod command;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod mount;
pub mod server;

pub use api::{ApiResponse, Router};
pub use command::{CommandOutput, CommandRunner, SystemRunner};
pub use config::{CommandSet, CommandSpec, ServerConfig};
pub use error::{CommandError, InventoryError, MountError, ServerError};
pub use inventory::{DeviceKind, DeviceRecord, InventoryService, parse};
pub use mount::{MountOrchestrator, MountOutcome, MountRequest};
pub use server::Server;
