//! Devmap Core - hardware declarations and configuration loading
//!
//! This crate provides the configuration model for the devmap system:
//! - Typed hardware declarations (device class, USB identifiers, rename target)
//! - YAML configuration parsing with up-front validation
//! - The configuration error taxonomy

pub mod config;
pub mod declaration;

pub use config::{ConfigError, HardwareConfig};
pub use declaration::{DeviceClass, HardwareDeclaration, SerialValue};
