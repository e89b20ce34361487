//! # Setup Store
//!
//! A "setup" is a named snapshot of the calculation form's inputs. Setups
//! live in one ordered list, persisted as a versioned JSON file (`.wcs`),
//! and are addressed positionally: display order, rename, and delete all go
//! by index, with deletions shifting later entries down. Names need not be
//! unique.
//!
//! [`SetupStore`] owns both the file path and the in-memory list. It loads
//! once on [`SetupStore::open`] and re-serializes the whole list to disk
//! after every mutation. If a flush fails, the in-memory list is rolled
//! back to its pre-operation state and the error is returned; the caller
//! decides whether to retry or discard.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wire_core::calculations::wire::{Phases, VoltageType, WireInput};
//! use wire_core::materials::WireMaterial;
//! use wire_core::setups::SetupStore;
//! use wire_core::units::LengthUnit;
//! use std::path::Path;
//!
//! let mut store = SetupStore::open(Path::new("setups.wcs"))?;
//!
//! let input = WireInput {
//!     voltage_type: VoltageType::Dc,
//!     wire_material: WireMaterial::Copper,
//!     phases: Phases::Single,
//!     voltage: 120.0,
//!     current: 10.0,
//!     wire_length: 5.0,
//!     length_unit: LengthUnit::Cm,
//!     voltage_drop_pct: 2.0,
//! };
//!
//! store.append("Garage feed", input)?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), wire_core::errors::WireError>(())
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::wire::WireInput;
use crate::errors::{WireError, WireResult};
use crate::file_io;

/// Current schema version for .wcs files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A named, persisted snapshot of calculation inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    /// User-chosen name; not required to be unique
    pub name: String,

    /// The saved form inputs
    pub input: WireInput,
}

/// Root container serialized to .wcs files.
///
/// Ordered `Vec` rather than a map: insertion order is the display and
/// indexing order, and duplicate names are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupFile {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the file was first created
    pub created: DateTime<Utc>,

    /// When the list was last modified
    pub modified: DateTime<Utc>,

    /// All saved setups, in insertion order
    pub setups: Vec<Setup>,
}

impl SetupFile {
    /// Create a new empty setups file.
    pub fn new() -> Self {
        let now = Utc::now();
        SetupFile {
            version: SCHEMA_VERSION.to_string(),
            created: now,
            modified: now,
            setups: Vec::new(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for SetupFile {
    fn default() -> Self {
        SetupFile::new()
    }
}

/// Durable, ordered collection of named setups.
///
/// Loads once from disk on `open` and stays loaded for its lifetime. Every
/// mutating operation flushes the full list synchronously before returning.
#[derive(Debug)]
pub struct SetupStore {
    path: PathBuf,
    file: SetupFile,
}

impl SetupStore {
    /// Open the store backed by the given file.
    ///
    /// A missing file is the first-run condition and yields an empty list,
    /// not an error. An existing file that cannot be read or parsed is
    /// surfaced as [`WireError::File`] or [`WireError::Serialization`].
    pub fn open(path: &Path) -> WireResult<Self> {
        let file = file_io::load_setups_or_default(path)?;
        debug!(
            path = %path.display(),
            count = file.setups.len(),
            "setup store loaded"
        );
        Ok(SetupStore {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved setups, in insertion order
    pub fn setups(&self) -> &[Setup] {
        &self.file.setups
    }

    /// Get the setup at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Setup> {
        self.file.setups.get(index)
    }

    /// Number of saved setups
    pub fn len(&self) -> usize {
        self.file.setups.len()
    }

    /// True when no setups are saved
    pub fn is_empty(&self) -> bool {
        self.file.setups.is_empty()
    }

    /// Append a named setup at the end of the list and flush.
    ///
    /// Rejecting empty or cancelled name input is the caller's job; the
    /// store accepts any name it is given.
    pub fn append(&mut self, name: impl Into<String>, input: WireInput) -> WireResult<()> {
        let modified_before = self.file.modified;
        self.file.setups.push(Setup {
            name: name.into(),
            input,
        });
        self.file.touch();

        if let Err(e) = self.flush() {
            self.file.setups.pop();
            self.file.modified = modified_before;
            return Err(e);
        }
        debug!(count = self.len(), "setup appended");
        Ok(())
    }

    /// Replace the name of the setup at `index`, keeping its data, and flush.
    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> WireResult<()> {
        let len = self.len();
        let Some(setup) = self.file.setups.get_mut(index) else {
            return Err(WireError::index_out_of_bounds(index, len));
        };
        let old_name = std::mem::replace(&mut setup.name, new_name.into());
        let modified_before = self.file.modified;
        self.file.touch();

        if let Err(e) = self.flush() {
            self.file.setups[index].name = old_name;
            self.file.modified = modified_before;
            return Err(e);
        }
        debug!(index, "setup renamed");
        Ok(())
    }

    /// Remove the setup at `index`, shifting later entries down, and flush.
    pub fn delete_one(&mut self, index: usize) -> WireResult<()> {
        if index >= self.len() {
            return Err(WireError::index_out_of_bounds(index, self.len()));
        }
        let removed = self.file.setups.remove(index);
        let modified_before = self.file.modified;
        self.file.touch();

        if let Err(e) = self.flush() {
            self.file.setups.insert(index, removed);
            self.file.modified = modified_before;
            return Err(e);
        }
        debug!(index, count = self.len(), "setup deleted");
        Ok(())
    }

    /// Clear the entire list and flush.
    pub fn delete_all(&mut self) -> WireResult<()> {
        let previous = std::mem::take(&mut self.file.setups);
        let modified_before = self.file.modified;
        self.file.touch();

        if let Err(e) = self.flush() {
            self.file.setups = previous;
            self.file.modified = modified_before;
            return Err(e);
        }
        debug!("all setups deleted");
        Ok(())
    }

    /// Serialize the full list to the backing file.
    ///
    /// Uses the atomic tmp-write + rename in [`file_io`], so a failed flush
    /// leaves the previous file contents intact.
    pub fn flush(&self) -> WireResult<()> {
        file_io::save_setups(&self.file, &self.path)
    }
}
