//! Env-file output
//!
//! One `NAME_PATH=value` line per resolved declaration, in resolution
//! order, consumed by the container runtime as an environment file.

use devmap_resolver::ResolutionMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write the resolved paths to `path`
///
/// Truncates the file unless `append` is set.
pub fn write_env_file(path: &Path, paths: &ResolutionMap, append: bool) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    for (name, device_path) in paths {
        writeln!(file, "{}_PATH={}", name, device_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample_paths() -> ResolutionMap {
        let mut paths = IndexMap::new();
        paths.insert("sensor".to_string(), "/dev/bus/usb/001/004".to_string());
        paths.insert(
            "fc".to_string(),
            "/dev/ttyUSB0:/dev/flightctl".to_string(),
        );
        paths
    }

    #[test]
    fn test_write_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        write_env_file(&path, &sample_paths(), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "sensor_PATH=/dev/bus/usb/001/004\nfc_PATH=/dev/ttyUSB0:/dev/flightctl\n"
        );
    }

    #[test]
    fn test_overwrite_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "stale_PATH=/dev/null\n").unwrap();

        write_env_file(&path, &sample_paths(), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale_PATH"));
        assert!(content.starts_with("sensor_PATH="));
    }

    #[test]
    fn test_append_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "existing_PATH=/dev/hidraw0\n").unwrap();

        write_env_file(&path, &sample_paths(), true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "existing_PATH=/dev/hidraw0\nsensor_PATH=/dev/bus/usb/001/004\nfc_PATH=/dev/ttyUSB0:/dev/flightctl\n"
        );
    }
}
