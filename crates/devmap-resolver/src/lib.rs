//! Devmap Resolver - the device resolution engine
//!
//! Matches declared hardware entries against the live udev database and
//! derives the concrete /dev path for each declaration:
//! - Enumerator: snapshots usb-subsystem devices as plain candidate records
//! - Matcher: selects the first candidate with matching vendor/product/serial
//! - Path resolver: picks the node for the declared class, applies renames
//! - Driver: runs all declarations in configuration order, all-or-nothing

pub mod candidate;
pub mod enumerate;
pub mod matcher;
pub mod resolve;

pub use candidate::{ChildDevice, DeviceCandidate};
pub use resolve::{resolve_all, ResolutionMap, ResolveError};
