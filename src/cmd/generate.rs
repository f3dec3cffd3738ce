// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command implementation: the whole pipeline.
//!
//! ```text
//! resolve root --> scan mods --> sort --> count line
//!                                   |
//!                        +---------+---------+
//!                        v                   v
//!               mod-setup script     mod-override list
//! ```

use std::path::PathBuf;

use tracing::debug;

use crate::cli::generate::GenerateArgs;
use crate::config::Config;
use crate::discover::discover_install_root;
use crate::emit::overrides::write_mod_overrides;
use crate::emit::setup::{SetupMode, write_server_mods_setup};
use crate::error::Result;
use crate::scan::{ScanOptions, scan_mods};

/// Main handler for the generate command.
///
/// # Errors
///
/// Returns an error if the installation root cannot be resolved, the mods
/// directory cannot be listed, or an output file cannot be written. Per-mod
/// metadata failures are logged and skipped, never returned.
pub fn run_generate_command(args: &GenerateArgs, config: &Config) -> Result<()> {
    let install_root = resolve_install_root(args, config)?;
    let mods_root = install_root.join(&config.paths.mods_subdir);
    debug!(mods_root = %mods_root.display(), "scanning mods directory");

    let scan_options = ScanOptions::builder()
        .with_marker(config.scan.marker.clone())
        .with_modinfo_name(config.scan.modinfo_name.clone())
        .build();

    let mut records = scan_mods(&mods_root, &scan_options)?;
    records.sort();

    println!("Generated {} items.", records.len());

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.paths.output_dir.clone());

    let setup_name = args
        .setup_file
        .as_deref()
        .unwrap_or(&config.output.setup_file);
    let overrides_name = args
        .overrides_file
        .as_deref()
        .unwrap_or(&config.output.overrides_file);

    let mode = if args.append || config.output.append_setup {
        SetupMode::Append
    } else {
        SetupMode::Overwrite
    };

    write_server_mods_setup(&records, &output_dir.join(setup_name), mode)?;
    write_mod_overrides(&records, &output_dir.join(overrides_name))?;

    Ok(())
}

/// Resolves the installation root from the command line or by discovery.
///
/// An explicit `--dst-path` always wins. With `--auto`, a configured
/// `paths.dst_root` is honored before the platform strategies run.
fn resolve_install_root(args: &GenerateArgs, config: &Config) -> Result<PathBuf> {
    if let Some(path) = &args.dst_path {
        return Ok(path.clone());
    }
    if let Some(root) = &config.paths.dst_root {
        debug!(root = %root.display(), "using configured installation root");
        return Ok(root.clone());
    }
    Ok(discover_install_root()?)
}
