// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modlist-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local modlist.toml (cwd)
//! 3. --config FILE (repeatable)
//! 4. MODLIST_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODLIST_GLOBAL_OUTPUT_LOG_LEVEL=5  → global.output_log_level = 5
//! MODLIST_PATHS_DST_ROOT=/dst       → paths.dst_root = "/dst"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
pub use types::{GlobalConfig, OutputConfig, PathsConfig, ScanConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Installation and output paths.
    pub paths: PathsConfig,
    /// Output file names and emitter behavior.
    pub output: OutputConfig,
    /// Mod directory scanning options.
    pub scan: ScanConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modlist_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modlist.toml")
    ///     .with_env_prefix("MODLIST")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_output_options(&mut options);
        self.format_scan_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.dst_root".into(),
            self.paths
                .dst_root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("paths.mods_subdir".into(), self.paths.mods_subdir.clone());
        options.insert(
            "paths.output_dir".into(),
            self.paths.output_dir.display().to_string(),
        );
    }

    fn format_output_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("output.setup_file".into(), self.output.setup_file.clone());
        options.insert(
            "output.overrides_file".into(),
            self.output.overrides_file.clone(),
        );
        options.insert(
            "output.append_setup".into(),
            self.output.append_setup.to_string(),
        );
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("scan.marker".into(), self.scan.marker.clone());
        options.insert("scan.modinfo_name".into(), self.scan.modinfo_name.clone());
    }
}
