// ============================================================================
// File: src/inventory/parser.rs
// ----------------------------------------------------------------------------
// Heuristic parser for `fdisk -l` output.
//
// Each trimmed line is classified by a named predicate into a `LineKind`
// and only disk headers and bootable partition rows produce records.
// Parsing never fails: lines that do not fit are dropped.
// ============================================================================

use super::types::DeviceRecord;

/// Prefix of a disk summary line, e.g. `Disk /dev/sda: 1000.2 GB, ...`
pub const DISK_HEADER_PREFIX: &str = "Disk /dev/";

/// Tag stripped from the left of a disk header to get the device path
const DISK_TAG: &str = "Disk";

/// Token marking disk-label metadata lines
pub const DISK_LABEL_MARKER: &str = "Disklabel";

/// Prefix of a partition row
pub const DEVICE_PREFIX: &str = "/dev/";

/// Boot flag column value; rows without it are not recognised as partitions
pub const BOOTABLE_MARKER: char = '*';

/// Start, end, sectors, size, id, type
const MIN_PARTITION_FIELDS: usize = 6;

/// Classification of a single trimmed listing line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    DiskHeader,
    PartitionRow,
    Other,
}

impl LineKind {
    /// Classify a trimmed line. Disk headers win over partition rows.
    pub fn classify(line: &str) -> Self {
        if is_disk_header(line) {
            LineKind::DiskHeader
        } else if is_partition_row(line) {
            LineKind::PartitionRow
        } else {
            LineKind::Other
        }
    }
}

/// `Disk /dev/...` lines that are not disk-label metadata
pub fn is_disk_header(line: &str) -> bool {
    line.starts_with(DISK_HEADER_PREFIX) && !line.contains(DISK_LABEL_MARKER)
}

/// `/dev/...` lines carrying the bootable flag
pub fn is_partition_row(line: &str) -> bool {
    line.starts_with(DEVICE_PREFIX) && line.contains(BOOTABLE_MARKER)
}

/// Parse raw listing text into device records, preserving line order.
pub fn parse(raw: &str) -> Vec<DeviceRecord> {
    raw.lines().map(str::trim).filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<DeviceRecord> {
    match LineKind::classify(line) {
        LineKind::DiskHeader => parse_disk_header(line),
        LineKind::PartitionRow => parse_partition_row(line),
        LineKind::Other => None,
    }
}

fn parse_disk_header(line: &str) -> Option<DeviceRecord> {
    let (device, geometry) = line.split_once(':')?;

    let identifier = device.strip_prefix(DISK_TAG).unwrap_or(device).trim();
    let size = geometry.split(',').next().unwrap_or_default().trim();
    if identifier.is_empty() || size.is_empty() {
        return None;
    }

    Some(DeviceRecord::disk(identifier, size))
}

fn parse_partition_row(line: &str) -> Option<DeviceRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let count = fields.len();
    if count < MIN_PARTITION_FIELDS {
        return None;
    }

    // The two columns right before the last one. For a standard row this
    // yields "<size> <id>"; a type description with spaces shifts it.
    let size = format!("{} {}", fields[count - 3], fields[count - 2]);
    Some(DeviceRecord::partition(fields[0], size))
}
