// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub output_log_level: LogLevel,
    /// File log level (0-5), only used when `log_file` is set.
    pub file_log_level: LogLevel,
    /// Log file path. Empty/absent disables file logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Installation and output paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Don't Starve Together installation root. When set, `--auto` resolves
    /// to this path before trying platform strategies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_root: Option<PathBuf>,
    /// Name of the mods directory under the installation root.
    pub mods_subdir: String,
    /// Directory receiving the generated files.
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            dst_root: None,
            mods_subdir: "mods".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Output file names and emitter behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Server mod-setup script file name.
    pub setup_file: String,
    /// Mod-override list file name.
    pub overrides_file: String,
    /// Append to the setup file instead of overwriting it.
    pub append_setup: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            setup_file: "dedicated_server_mods_setup.lua".to_string(),
            overrides_file: "modoverrides.lua".to_string(),
            append_setup: false,
        }
    }
}

/// Mod directory scanning options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Marker substring identifying workshop mod directories.
    pub marker: String,
    /// Metadata file name looked up inside each mod directory.
    pub modinfo_name: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: "workshop-".to_string(),
            modinfo_name: "modinfo.lua".to_string(),
        }
    }
}
