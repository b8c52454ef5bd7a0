//! Candidate matching and path resolution
//!
//! Both functions are pure: they see only the candidate snapshot and one
//! declaration, and perform no system access.

use devmap_core::HardwareDeclaration;

use crate::candidate::DeviceCandidate;

/// Select the candidate matching a declaration
///
/// A candidate matches when vendor, product and serial all agree. The
/// first match in enumeration order wins; later duplicates are ignored.
/// Two attached devices with identical identifiers are tie-broken by
/// enumeration order, which the OS does not specify.
pub fn find_match<'a>(
    decl: &HardwareDeclaration,
    candidates: &'a [DeviceCandidate],
) -> Option<&'a DeviceCandidate> {
    let serial = decl.serial();
    candidates.iter().find(|c| {
        decl.usb_vendor == Some(c.vendor_id)
            && decl.usb_product == Some(c.product_id)
            && c.serial == serial
    })
}

/// Derive the final path string for a matched candidate
///
/// The node is the first child node whose subsystem equals the declared
/// class's subsystem, falling back to the candidate's own node. Composite
/// devices expose their character device on a child interface, so the
/// child scan runs first. Returns None when neither level has a node.
///
/// With `name_in_container` set, the result is `source:/dev/<alias>` so
/// the container runtime can remap the device.
pub fn resolve_path(candidate: &DeviceCandidate, decl: &HardwareDeclaration) -> Option<String> {
    let subsystem = decl.device_type.subsystem();
    let node = candidate
        .children
        .iter()
        .filter(|child| child.subsystem == subsystem)
        .find_map(|child| child.devnode.clone())
        .or_else(|| candidate.devnode.clone())?;

    Some(match &decl.name_in_container {
        Some(alias) => format!("{}:/dev/{}", node, alias),
        None => node,
    })
}
