// modlist-rs: Don't Starve Together Mod List Generator - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output file emitters.
//!
//! ```text
//! setup:      --#<name>
//!             ServerModSetup("<id>")        Overwrite | Append
//! overrides:  return {
//!             --#<name>
//!             ["workshop-<id>"] = { enabled = true },
//!             }                             always Overwrite
//! ```
//!
//! Rendering is pure; the writers own the I/O and the success log line.

pub mod overrides;
pub mod setup;


use std::path::Path;

/// Base name of an output path, for user-facing success messages.
fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
