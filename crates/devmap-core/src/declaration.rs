//! Hardware declaration types
//!
//! A declaration describes one expected physical device and the stable
//! identifiers used to find it among the currently attached devices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Device classes a declaration can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    /// Raw HID device (kernel hidraw interface)
    Hid,
    /// Raw USB device node under /dev/bus/usb
    Usb,
    /// USB-serial character device
    Tty,
}

#[derive(Error, Debug)]
#[error("Unknown device type '{0}'. Recognized types are: HID, USB, TTY")]
pub struct UnknownDeviceType(pub String);

impl DeviceClass {
    /// Canonical (upper-case) name as written in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Hid => "HID",
            DeviceClass::Usb => "USB",
            DeviceClass::Tty => "TTY",
        }
    }

    /// The udev subsystem a child node of this class lives in
    pub fn subsystem(&self) -> &'static str {
        match self {
            DeviceClass::Hid => "hid",
            DeviceClass::Usb => "usb",
            DeviceClass::Tty => "tty",
        }
    }
}

impl FromStr for DeviceClass {
    type Err = UnknownDeviceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hid" => Ok(DeviceClass::Hid),
            "usb" => Ok(DeviceClass::Usb),
            "tty" => Ok(DeviceClass::Tty),
            _ => Err(UnknownDeviceType(s.to_string())),
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DeviceClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DeviceClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A serial-like identifier, either a string (e.g. "ABC123") or an integer
///
/// Declared serials come from YAML as whichever scalar the author wrote;
/// enumerated serials are strings from the unique-id property or integers
/// from the revision fallback. Equality is variant-and-value equality:
/// `Text("7")` does not match `Number(7)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SerialValue {
    Number(u32),
    Text(String),
}

impl fmt::Display for SerialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialValue::Number(n) => write!(f, "{}", n),
            SerialValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u32> for SerialValue {
    fn from(n: u32) -> Self {
        SerialValue::Number(n)
    }
}

impl From<&str> for SerialValue {
    fn from(s: &str) -> Self {
        SerialValue::Text(s.to_string())
    }
}

/// One named hardware entry from configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardwareDeclaration {
    /// Device class to resolve (HID, USB or TTY, case-insensitive)
    pub device_type: DeviceClass,
    /// USB vendor ID, e.g. 0x1234
    #[serde(default)]
    pub usb_vendor: Option<u16>,
    /// USB product ID, e.g. 0x5678
    #[serde(default)]
    pub usb_product: Option<u16>,
    /// Serial number the device must report
    #[serde(default)]
    pub usb_serial: Option<SerialValue>,
    /// Secondary identifier, consulted when usb_serial is absent
    #[serde(default)]
    pub device_id: Option<SerialValue>,
    /// Rename target; emits "source:/dev/<name>" for the container runtime
    #[serde(default)]
    pub name_in_container: Option<String>,
}

impl HardwareDeclaration {
    /// The identifier an enumerated serial must equal for this declaration
    ///
    /// Falls back from `usb_serial` to `device_id` to `0`, so a declaration
    /// without either matches the first unserialized device of its
    /// vendor/product pair.
    pub fn serial(&self) -> SerialValue {
        self.usb_serial
            .clone()
            .or_else(|| self.device_id.clone())
            .unwrap_or(SerialValue::Number(0))
    }

    /// Mandatory fields absent from this declaration
    ///
    /// Matching is always vendor/product-based, so both IDs are required
    /// for every device class.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.usb_vendor.is_none() {
            missing.push("usb_vendor");
        }
        if self.usb_product.is_none() {
            missing.push("usb_product");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_parse_case_insensitive() {
        assert_eq!("HID".parse::<DeviceClass>().unwrap(), DeviceClass::Hid);
        assert_eq!("usb".parse::<DeviceClass>().unwrap(), DeviceClass::Usb);
        assert_eq!("Tty".parse::<DeviceClass>().unwrap(), DeviceClass::Tty);
    }

    #[test]
    fn test_device_class_unknown() {
        let err = "PCI".parse::<DeviceClass>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("PCI"));
        assert!(msg.contains("HID, USB, TTY"));
    }

    #[test]
    fn test_device_class_subsystem() {
        assert_eq!(DeviceClass::Hid.subsystem(), "hid");
        assert_eq!(DeviceClass::Usb.subsystem(), "usb");
        assert_eq!(DeviceClass::Tty.subsystem(), "tty");
    }

    #[test]
    fn test_serial_value_equality_is_typed() {
        assert_eq!(SerialValue::from("ABC123"), SerialValue::from("ABC123"));
        assert_eq!(SerialValue::from(7), SerialValue::from(7));
        // A numeric string is not the same identifier as the number
        assert_ne!(SerialValue::from("7"), SerialValue::from(7));
    }

    #[test]
    fn test_declared_serial_fallback_chain() {
        let mut decl = HardwareDeclaration {
            device_type: DeviceClass::Usb,
            usb_vendor: Some(0x1234),
            usb_product: Some(0x5678),
            usb_serial: Some("ABC123".into()),
            device_id: Some(42u32.into()),
            name_in_container: None,
        };
        assert_eq!(decl.serial(), SerialValue::from("ABC123"));

        decl.usb_serial = None;
        assert_eq!(decl.serial(), SerialValue::from(42));

        decl.device_id = None;
        assert_eq!(decl.serial(), SerialValue::Number(0));
    }

    #[test]
    fn test_missing_fields() {
        let decl = HardwareDeclaration {
            device_type: DeviceClass::Tty,
            usb_vendor: None,
            usb_product: None,
            usb_serial: None,
            device_id: None,
            name_in_container: None,
        };
        assert_eq!(decl.missing_fields(), vec!["usb_vendor", "usb_product"]);

        let decl = HardwareDeclaration {
            usb_vendor: Some(0x0403),
            ..decl
        };
        assert_eq!(decl.missing_fields(), vec!["usb_product"]);
    }
}
