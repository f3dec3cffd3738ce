// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command arguments.
//!
//! ```text
//! --dst-path DIR | --auto    exactly one required
//! --output-dir DIR           where the two files land (default ".")
//! --append                   legacy append mode for the setup file
//! --setup-file / --overrides-file   output name overrides
//! ```

use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, Args)]
#[command(group(
    ArgGroup::new("install_root")
        .required(true)
        .args(["dst_path", "auto"])
))]
pub struct GenerateArgs {
    /// Path to the Don't Starve Together installation root.
    /// The mods directory is expected at `<DIR>/mods`.
    #[arg(long = "dst-path", value_name = "DIR", env = "DST_PATH")]
    pub dst_path: Option<PathBuf>,

    /// Discover the installation automatically (best-effort, Windows Steam
    /// locations only).
    #[arg(long)]
    pub auto: bool,

    /// Directory receiving the generated files.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Append to the setup file instead of overwriting it.
    /// Useful to keep previously generated blocks across re-runs.
    #[arg(long)]
    pub append: bool,

    /// Override the server mod-setup script file name.
    #[arg(long = "setup-file", value_name = "NAME")]
    pub setup_file: Option<String>,

    /// Override the mod-override list file name.
    #[arg(long = "overrides-file", value_name = "NAME")]
    pub overrides_file: Option<String>,
}
