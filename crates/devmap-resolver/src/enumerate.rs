//! Live device enumeration via the udev database

use devmap_core::SerialValue;
use tracing::trace;

use crate::candidate::{ChildDevice, DeviceCandidate};
use crate::resolve::ResolveError;

/// Snapshot the currently attached devices of the usb subsystem
///
/// Candidates come back in the order udev reports them. Each call
/// re-queries the live device tree; two calls may see different snapshots.
pub fn scan_usb() -> Result<Vec<DeviceCandidate>, ResolveError> {
    let mut enumerator = udev::Enumerator::new()?;
    enumerator.match_subsystem("usb")?;

    let mut candidates = Vec::new();
    for device in enumerator.scan_devices()? {
        candidates.push(read_candidate(&device)?);
    }
    trace!(count = candidates.len(), "Enumerated usb subsystem");
    Ok(candidates)
}

fn read_candidate(device: &udev::Device) -> Result<DeviceCandidate, ResolveError> {
    Ok(DeviceCandidate {
        syspath: device.syspath().to_string_lossy().into_owned(),
        vendor_id: hex_property(device, "ID_VENDOR_ID"),
        product_id: hex_property(device, "ID_MODEL_ID"),
        serial: serial_property(device),
        devnode: node_path(device),
        children: scan_children(device)?,
    })
}

/// Child devices of `parent`, in udev order
fn scan_children(parent: &udev::Device) -> Result<Vec<ChildDevice>, ResolveError> {
    let mut enumerator = udev::Enumerator::new()?;
    enumerator.match_parent(parent)?;

    let mut children = Vec::new();
    for device in enumerator.scan_devices()? {
        // A parent-scoped scan includes the parent itself
        if device.syspath() == parent.syspath() {
            continue;
        }
        children.push(ChildDevice {
            subsystem: device
                .subsystem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            devnode: node_path(&device),
        });
    }
    Ok(children)
}

fn node_path(device: &udev::Device) -> Option<String> {
    device.devnode().map(|p| p.to_string_lossy().into_owned())
}

/// Read a hexadecimal identifier property, defaulting to 0 when absent
fn hex_property(device: &udev::Device, name: &str) -> u16 {
    device
        .property_value(name)
        .and_then(|v| v.to_str())
        .and_then(|v| u16::from_str_radix(v, 16).ok())
        .unwrap_or(0)
}

/// Unique serial of a device
///
/// Falls back to the revision property parsed as hex when the device
/// reports no serial, and to 0 when that is absent too. Unserialized
/// devices of the same model therefore share the 0 identifier.
fn serial_property(device: &udev::Device) -> SerialValue {
    if let Some(serial) = device
        .property_value("ID_SERIAL_SHORT")
        .and_then(|v| v.to_str())
    {
        return SerialValue::Text(serial.to_string());
    }
    let revision = device
        .property_value("ID_REVISION")
        .and_then(|v| v.to_str())
        .and_then(|v| u32::from_str_radix(v, 16).ok())
        .unwrap_or(0);
    SerialValue::Number(revision)
}
