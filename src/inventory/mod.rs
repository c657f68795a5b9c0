// ============================================================================
// File: src/inventory/mod.rs
// ----------------------------------------------------------------------------
// Disk inventory: run the listing tool and parse what it prints.
// ============================================================================

mod parser;
mod types;

pub use parser::{LineKind, is_disk_header, is_partition_row, parse};
pub use types::{DeviceKind, DeviceRecord};

use std::sync::Arc;

use log::{info, warn};

use crate::command::CommandRunner;
use crate::config::CommandSpec;
use crate::error::InventoryError;

/// Produces a fresh device inventory on every call
#[derive(Debug, Clone)]
pub struct InventoryService {
    runner: Arc<dyn CommandRunner>,
    listing: CommandSpec,
}

impl InventoryService {
    /// Create a service that runs `listing` through `runner`
    pub fn new(runner: Arc<dyn CommandRunner>, listing: CommandSpec) -> Self {
        Self { runner, listing }
    }

    /// Run the listing command once and parse its output
    ///
    /// Blocks until the listing tool exits.
    pub fn list_devices(&self) -> Result<Vec<DeviceRecord>, InventoryError> {
        let program = &self.listing.program;
        let output = self
            .runner
            .run(program, &self.listing.args)
            .and_then(|output| output.check(program))
            .map_err(|e| {
                warn!("Disk listing failed: {}", e);
                InventoryError::from(e)
            })?;

        let devices = parse(&output.output);
        info!("Disk listing found {} device(s)", devices.len());
        Ok(devices)
    }
}
