// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod directory enumeration.
//!
//! ```text
//! scan_mods(mods_root, &ScanOptions)
//!        |
//!        v
//!   read_dir --> keep dirs containing "workshop-"
//!        |
//!        v
//!   modinfo.lua --> name = "..." --> ModRecord
//!        |
//!        v  (per-entry failure)
//!      warn! + skip, scan continues
//! ```

pub mod modinfo;


use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, warn};

use crate::error::{PathError, Result, ScanError};

/// Marker substring identifying workshop mod directories. The workshop id is
/// whatever follows it in the directory name.
pub const WORKSHOP_MARKER: &str = "workshop-";

/// One installed mod: its directory and the display name from `modinfo.lua`.
///
/// Ordering is the derived tuple comparison (directory first, then name),
/// which keeps the generated files reproducible for a given mod set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModRecord {
    directory: PathBuf,
    name: String,
}

impl ModRecord {
    pub(crate) const fn new(directory: PathBuf, name: String) -> Self {
        Self { directory, name }
    }

    /// The mod's directory inside the mods root.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The display name extracted from `modinfo.lua`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The numeric workshop identifier: the directory basename with the
    /// 9-byte `workshop-` marker removed.
    #[must_use]
    pub fn workshop_id(&self) -> &str {
        let base = self
            .directory
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or_default();
        base.get(WORKSHOP_MARKER.len()..).unwrap_or_default()
    }
}

/// Options for mod directory scanning.
#[derive(Debug, Clone, Builder)]
pub struct ScanOptions {
    /// Marker substring a directory name must contain to be considered a mod.
    #[builder(setters(name = with_marker), default = WORKSHOP_MARKER.to_string())]
    marker: String,
    /// Metadata file name looked up inside each mod directory.
    #[builder(setters(name = with_modinfo_name), default = "modinfo.lua".to_string())]
    modinfo_name: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    /// Returns the marker substring.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Returns the metadata file name.
    #[must_use]
    pub fn modinfo_name(&self) -> &str {
        &self.modinfo_name
    }
}

/// Enumerates installed mods under `mods_root`.
///
/// Lists immediate child directories only, keeps those whose name contains
/// the marker, and extracts each one's display name. Entries whose metadata
/// cannot be read are logged and skipped; one bad mod never aborts the scan.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if `mods_root` itself cannot be listed.
pub fn scan_mods(mods_root: &Path, options: &ScanOptions) -> Result<Vec<ModRecord>> {
    let entries = std::fs::read_dir(mods_root).map_err(|source| PathError::NotFound {
        path: mods_root.display().to_string(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "unreadable directory entry, skipping");
                continue;
            }
        };

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.contains(options.marker()) {
            continue;
        }

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match read_mod_record(&path, options.modinfo_name()) {
            Ok(record) => {
                debug!(mod_dir = %path.display(), name = record.name(), "mod found");
                records.push(record);
            }
            Err(e) => {
                warn!(mod_dir = %path.display(), error = %e, "skipping mod entry");
            }
        }
    }

    Ok(records)
}

/// Builds a [`ModRecord`] from one mod directory.
fn read_mod_record(
    mod_dir: &Path,
    modinfo_name: &str,
) -> std::result::Result<ModRecord, ScanError> {
    let modinfo_path = mod_dir.join(modinfo_name);
    let bytes = std::fs::read(&modinfo_path).map_err(|source| ScanError::Metadata {
        path: modinfo_path.display().to_string(),
        source,
    })?;

    // modinfo files in the wild are occasionally not valid UTF-8.
    let content = String::from_utf8_lossy(&bytes);
    let name = modinfo::extract_field(&content, "name").ok_or_else(|| ScanError::NameNotFound {
        path: modinfo_path.display().to_string(),
    })?;

    Ok(ModRecord::new(mod_dir.to_path_buf(), name))
}
