//! # File I/O Module
//!
//! Reads and writes the setups file (`.wcs`, JSON):
//!
//! - **Atomic saves**: write to .tmp, fsync, rename, so an interrupted
//!   flush never corrupts the previous file
//! - **First-run handling**: a missing file loads as an empty list
//! - **Version validation**: a file from a newer schema is rejected with a
//!   typed error instead of being misparsed
//!
//! The file is assumed to be touched by one process at a time; there is no
//! lock protocol.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wire_core::file_io::{load_setups_or_default, save_setups};
//! use wire_core::setups::SetupFile;
//! use std::path::Path;
//!
//! let path = Path::new("setups.wcs");
//! let file = load_setups_or_default(path)?;
//! save_setups(&file, path)?;
//! # Ok::<(), wire_core::errors::WireError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::errors::{WireError, WireResult};
use crate::setups::{SetupFile, SCHEMA_VERSION};

/// Save the setups file with atomic write semantics.
///
/// The save process:
/// 1. Serialize to pretty JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to the final path (atomic on most filesystems)
///
/// # Returns
///
/// * `Ok(())` - File on disk now holds exactly the given list
/// * `Err(WireError::File)` - I/O failure; the previous file is untouched
pub fn save_setups(file: &SetupFile, path: &Path) -> WireResult<()> {
    let json = serde_json::to_string_pretty(file).map_err(|e| WireError::Serialization {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("wcs.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        WireError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        WireError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        WireError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        WireError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), count = file.setups.len(), "setups flushed");
    Ok(())
}

/// Load the setups file.
///
/// # Returns
///
/// * `Ok(SetupFile)` - Successfully loaded
/// * `Err(WireError::File)` - I/O error (including a missing file; see
///   [`load_setups_or_default`] for first-run handling)
/// * `Err(WireError::Serialization)` - Corrupt JSON
/// * `Err(WireError::VersionMismatch)` - File schema is incompatible
pub fn load_setups(path: &Path) -> WireResult<SetupFile> {
    let mut file = File::open(path)
        .map_err(|e| WireError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| WireError::file_error("read", path.display().to_string(), e.to_string()))?;

    let setups: SetupFile =
        serde_json::from_str(&contents).map_err(|e| WireError::Serialization {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&setups.version)?;

    Ok(setups)
}

/// Load the setups file, treating a missing file as the first-run condition.
///
/// Any failure other than "file does not exist" is surfaced unchanged; a
/// corrupt or unreadable file must not be silently replaced with an empty
/// list.
pub fn load_setups_or_default(path: &Path) -> WireResult<SetupFile> {
    if !path.exists() {
        debug!(path = %path.display(), "no setups file, starting empty");
        return Ok(SetupFile::new());
    }
    load_setups(path)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> WireResult<()> {
    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(WireError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(WireError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    // For 0.x versions a newer minor is a breaking change we cannot read
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(WireError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: SCHEMA_VERSION.to_string(),
        });
    }

    Ok(())
}
