//! Candidate records produced by enumeration
//!
//! A candidate is a plain snapshot of one live device. Candidates are
//! rebuilt on every resolution pass and never persisted, so the matcher
//! and path resolver stay pure functions over these records.

use devmap_core::SerialValue;

/// One live device observed during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCandidate {
    /// Sysfs path, kept for diagnostics
    pub syspath: String,
    /// Vendor ID from the udev database, 0 when the property is absent
    pub vendor_id: u16,
    /// Product ID from the udev database, 0 when the property is absent
    pub product_id: u16,
    /// Unique serial, or the revision fallback, or 0
    pub serial: SerialValue,
    /// Device node path, absent for interface-level entries
    pub devnode: Option<String>,
    /// Child devices in udev order
    pub children: Vec<ChildDevice>,
}

/// A child of an enumerated device
///
/// Children without a node are kept as placeholders so sibling order
/// survives into path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildDevice {
    pub subsystem: String,
    pub devnode: Option<String>,
}
