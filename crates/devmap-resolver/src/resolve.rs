//! Resolution driver
//!
//! Walks the declared hardware entries in configuration order and builds
//! the name→path mapping. Resolution is all-or-nothing: the first
//! declaration that fails aborts the run and no partial mapping is
//! returned.

use devmap_core::{ConfigError, DeviceClass, HardwareConfig, SerialValue};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::candidate::DeviceCandidate;
use crate::enumerate::scan_usb;
use crate::matcher::{find_match, resolve_path};

/// Resolved paths keyed by declaration name, in configuration order
pub type ResolutionMap = IndexMap<String, String>;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Malformed or incomplete declaration: fix the config file
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The udev database could not be queried
    #[error("Failed to enumerate devices: {0}")]
    Enumerate(#[from] std::io::Error),
    /// No attached device carries the declared identifiers
    #[error(
        "Device '{name}' of type {class} with vendor {vendor:#06x}, \
         product {product:#06x}, serial {serial} not found"
    )]
    NotFound {
        name: String,
        class: DeviceClass,
        vendor: u16,
        product: u16,
        serial: SerialValue,
    },
    /// A device matched but neither it nor its children expose a node
    #[error("Device '{name}' matched but exposes no device node")]
    NoDeviceNode { name: String },
}

/// Resolve every declared hardware entry against the live device tree
pub fn resolve_all(config: &HardwareConfig) -> Result<ResolutionMap, ResolveError> {
    resolve_with(config, scan_usb)
}

/// Driver core, parameterized over the enumeration pass
///
/// `scan` runs once per declaration: device state is read fresh for each
/// entry, matching the one-shot semantics of the whole run.
fn resolve_with<F>(config: &HardwareConfig, mut scan: F) -> Result<ResolutionMap, ResolveError>
where
    F: FnMut() -> Result<Vec<DeviceCandidate>, ResolveError>,
{
    let mut paths = ResolutionMap::new();

    for (name, decl) in &config.hardware {
        debug!(name = %name, class = %decl.device_type, "Resolving hardware declaration");

        let missing = decl.missing_fields();
        if !missing.is_empty() {
            return Err(ConfigError::MissingFields {
                declaration: name.clone(),
                fields: missing,
            }
            .into());
        }

        let candidates = scan()?;
        let candidate =
            find_match(decl, &candidates).ok_or_else(|| ResolveError::NotFound {
                name: name.clone(),
                class: decl.device_type,
                vendor: decl.usb_vendor.unwrap_or_default(),
                product: decl.usb_product.unwrap_or_default(),
                serial: decl.serial(),
            })?;

        let path = resolve_path(candidate, decl)
            .ok_or_else(|| ResolveError::NoDeviceNode { name: name.clone() })?;

        info!(name = %name, path = %path, "Found device");
        paths.insert(name.clone(), path);
    }

    Ok(paths)
}
