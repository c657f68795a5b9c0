// ============================================================================
// File: src/inventory/types.rs
// ----------------------------------------------------------------------------
// Device records produced from disk listing output.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Whether a record describes a whole disk or one of its partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Disk,
    Partition,
}

/// One device line of interest from the listing output
///
/// Field names on the wire follow the web front-end: `device`, `size`,
/// `type`, `mountPoint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Device or partition path, never empty
    #[serde(rename = "device")]
    pub identifier: String,

    /// Capacity exactly as the tool printed it
    pub size: String,

    /// Disk or partition
    #[serde(rename = "type")]
    pub kind: DeviceKind,

    /// Not filled in by parsing; always empty for now
    #[serde(rename = "mountPoint", default)]
    pub mount_point: String,
}

impl DeviceRecord {
    /// Create a disk record
    pub fn disk<I: Into<String>, S: Into<String>>(identifier: I, size: S) -> Self {
        Self::new(identifier, size, DeviceKind::Disk)
    }

    /// Create a partition record
    pub fn partition<I: Into<String>, S: Into<String>>(identifier: I, size: S) -> Self {
        Self::new(identifier, size, DeviceKind::Partition)
    }

    fn new<I: Into<String>, S: Into<String>>(identifier: I, size: S, kind: DeviceKind) -> Self {
        Self {
            identifier: identifier.into(),
            size: size.into(),
            kind,
            mount_point: String::new(),
        }
    }
}
